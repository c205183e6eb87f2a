// Server module - Provides reusable HTTP server functionality

use axum::Router;
use axum::http::HeaderValue;
use std::net::{SocketAddr, TcpListener};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api;
use crate::api_docs::ApiDoc;
use crate::infrastructure::AppState;

/// Build the full application router: API, docs, CORS and request tracing.
/// An empty origin list allows any origin.
pub fn build_router(state: AppState, cors_allowed_origins: &[String]) -> Router {
    let allowed = if cors_allowed_origins.is_empty() {
        AllowOrigin::any()
    } else {
        let mut origins = Vec::new();
        for origin in cors_allowed_origins {
            match origin.parse::<HeaderValue>() {
                Ok(v) => origins.push(v),
                Err(e) => tracing::error!("Failed to parse CORS origin '{}': {}", origin, e),
            }
        }
        AllowOrigin::list(origins)
    };

    let cors = CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(SwaggerUi::new("/api/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", api::api_router(state))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Find an available port starting from the preferred port on a specific IP
pub fn find_available_port_on_ip(preferred_port: u16, ip: &str) -> Option<u16> {
    // Try preferred port first
    if TcpListener::bind((ip, preferred_port)).is_ok() {
        return Some(preferred_port);
    }

    // Scan next 100 ports
    (preferred_port.saturating_add(1)..preferred_port.saturating_add(100))
        .find(|&port| TcpListener::bind((ip, port)).is_ok())
}

/// Find an available port starting from the preferred port (0.0.0.0)
pub fn find_available_port(preferred_port: u16) -> Option<u16> {
    find_available_port_on_ip(preferred_port, "0.0.0.0")
}

/// Bind and serve until the process is stopped. Returns when the server exits.
pub async fn serve(app: Router, preferred_port: u16) -> Result<(), String> {
    let port = find_available_port(preferred_port)
        .ok_or_else(|| format!("No available port near {}", preferred_port))?;

    if port != preferred_port {
        tracing::warn!(
            "Preferred port {} was not available, using port {} instead",
            preferred_port,
            port
        );
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", addr, e))?;

    tracing::info!("Moodshelf server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| format!("HTTP server error: {}", e))
}
