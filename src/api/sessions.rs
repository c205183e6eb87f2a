use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

use super::error_response;
use crate::infrastructure::AppState;
use crate::models::SessionState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct RecommendRequest {
    pub category: String,
}

#[utoipa::path(
    post,
    path = "/api/sessions",
    responses(
        (status = 201, description = "Session created")
    )
)]
pub async fn create_session(State(state): State<AppState>) -> impl IntoResponse {
    let session_id = state.recommendations.create_session();
    (StatusCode::CREATED, Json(json!({ "session_id": session_id })))
}

#[utoipa::path(
    get,
    path = "/api/sessions/{id}",
    params(("id" = String, Path, description = "Session id")),
    responses(
        (status = 200, description = "Current session state", body = SessionState)
    )
)]
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<SessionState> {
    Json(state.recommendations.session(&id))
}

#[utoipa::path(
    delete,
    path = "/api/sessions/{id}",
    params(("id" = String, Path, description = "Session id")),
    responses(
        (status = 200, description = "Session discarded")
    )
)]
pub async fn end_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let existed = state.recommendations.end_session(&id);
    (StatusCode::OK, Json(json!({ "ended": existed })))
}

#[utoipa::path(
    post,
    path = "/api/sessions/{id}/recommend",
    params(("id" = String, Path, description = "Session id")),
    request_body = RecommendRequest,
    responses(
        (status = 200, description = "Book recommended", body = crate::services::Recommendation),
        (status = 400, description = "No category given"),
        (status = 404, description = "No books in this category"),
        (status = 503, description = "Catalog unavailable")
    )
)]
pub async fn recommend(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<RecommendRequest>,
) -> Response {
    match state
        .recommendations
        .recommend(&id, &payload.category)
        .await
    {
        Ok(recommendation) => (StatusCode::OK, Json(recommendation)).into_response(),
        Err(e) => error_response(&e, Some(payload.category.trim())),
    }
}

#[utoipa::path(
    post,
    path = "/api/sessions/{id}/reset",
    params(("id" = String, Path, description = "Session id")),
    responses(
        (status = 200, description = "History cleared", body = SessionState)
    )
)]
pub async fn reset_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<SessionState> {
    Json(state.recommendations.reset(&id))
}
