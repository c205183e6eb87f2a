pub mod categories;
pub mod health;
pub mod sessions;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;

use crate::domain::DomainError;
use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Catalog
        .route("/categories", get(categories::list_categories))
        // Sessions
        .route("/sessions", post(sessions::create_session))
        .route(
            "/sessions/:id",
            get(sessions::get_session).delete(sessions::end_session),
        )
        .route("/sessions/:id/recommend", post(sessions::recommend))
        .route("/sessions/:id/reset", post(sessions::reset_session))
        .with_state(state)
}

/// Map a domain error to a JSON error response. `EmptyPool` bodies name the
/// requested category.
pub fn error_response(err: &DomainError, category: Option<&str>) -> Response {
    let status = match err {
        DomainError::EmptyPool => StatusCode::NOT_FOUND,
        DomainError::DataUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Audit(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let mut body = json!({
        "error": err.to_string(),
        "message": err.user_message(),
    });
    if let (DomainError::EmptyPool, Some(category)) = (err, category) {
        body["category"] = json!(category);
    }

    (status, Json(body)).into_response()
}
