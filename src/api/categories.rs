use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::infrastructure::AppState;

/// Categories in feed order. Empty when the catalog cannot be loaded.
#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "Available categories")
    )
)]
pub async fn list_categories(State(state): State<AppState>) -> Json<Value> {
    let categories = state.recommendations.categories().await;
    Json(json!({ "categories": categories }))
}
