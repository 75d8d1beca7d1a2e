use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;

/// Message length cap, counted in Unicode scalar values. The 413 body
/// quotes this number, so it stays a constant rather than a config knob.
const MAX_MESSAGE_CHARS: usize = 1000;

/// Classification request body
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    #[serde(default)]
    pub message: Option<String>,
}

/// Classify a message as profane or clean.
///
/// Validation happens before any lookup: content type, then presence, then
/// length. The content type is checked by hand instead of through the
/// `Json` extractor so the 406 contract and its exact body are preserved;
/// a body from which no `message` can be read counts as a missing message.
///
/// Success is always one of two shapes: `{ isProfanity, score, flaggedFor }`
/// or `{ isProfanity, score }`.
pub async fn classify_message(
    State(state): State<Arc<ServerState>>,
    headers: HeaderMap,
    body: Bytes,
) -> ServerResult<impl IntoResponse> {
    if !is_json_content_type(&headers) {
        return Err(ServerError::JsonBodyExpected);
    }

    let request: ClassifyRequest =
        serde_json::from_slice(&body).map_err(|_| ServerError::MessageRequired)?;
    let message = match request.message {
        Some(message) if !message.is_empty() => message,
        _ => return Err(ServerError::MessageRequired),
    };
    if message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(ServerError::MessageTooLong);
    }

    let verdict = state.classifier.classify(&message).await?;
    Ok(Json(verdict))
}

/// True when the declared media type is `application/json`, ignoring
/// parameters such as `charset`.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|media_type| media_type.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}
