//! API route handlers
//!
//! - `classify`: the `POST /api` classification endpoint
//! - `health`: liveness probe

pub mod classify;
pub mod health;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info
///
/// Root endpoint (GET /), requires no authentication.
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "Profanity API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "/api",
            "/health"
        ]
    })))
}

/// 404 Not Found handler
///
/// Returns a standardized error response for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
