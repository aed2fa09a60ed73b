//! Landing endpoints and the unknown-route fallback

use axum::{http::Uri, routing::get, Json, Router};
use serde::Serialize;

use crate::{api::get_build_info, ApiError, AppState};

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// GET /
pub async fn welcome() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Jarvis Design Agent API".to_string(),
    })
}

/// GET /api/hello
///
/// Connectivity check for the dashboard.
pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello from the backend API!".to_string(),
    })
}

/// Fallback for unknown routes
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

/// Build landing routes
pub fn root_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(welcome))
        .route("/api/hello", get(hello))
        .route("/build_info", get(get_build_info))
}
