use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types
///
/// The 4xx display strings double as the response bodies and are part of
/// the public API contract; they must not drift. Internal causes are logged
/// server-side and never exposed to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Request did not declare a JSON body.
    #[error("JSON Body expected")]
    JsonBodyExpected,

    /// `message` was missing, empty, or unreadable.
    #[error("Message argument is required")]
    MessageRequired,

    /// `message` exceeded the character limit.
    #[error("Message is too long, it can atmost be 1000 characters")]
    MessageTooLong,

    /// Classification failed (lookup failure or misconfiguration).
    #[error("classification failed: {0}")]
    Classify(#[from] classifier::ClassifyError),

    /// Configuration error at startup.
    #[error("configuration error: {0}")]
    Config(String),

    /// Not found
    #[error("Not found")]
    NotFound,
}

impl ServerError {
    /// Get HTTP status code for this error
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::JsonBodyExpected => StatusCode::NOT_ACCEPTABLE,
            ServerError::MessageRequired => StatusCode::BAD_REQUEST,
            ServerError::MessageTooLong => StatusCode::PAYLOAD_TOO_LARGE,
            ServerError::NotFound => StatusCode::NOT_FOUND,
            ServerError::Classify(_) | ServerError::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The message sent to the caller. Validation errors surface verbatim;
    /// anything internal collapses to a generic body.
    fn public_message(&self) -> String {
        match self {
            ServerError::JsonBodyExpected
            | ServerError::MessageRequired
            | ServerError::MessageTooLong
            | ServerError::NotFound => self.to_string(),
            ServerError::Classify(_) | ServerError::Config(_) => {
                "Internal Server Error".to_string()
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = Json(json!({ "error": self.public_message() }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similarity::SimilarityError;

    #[test]
    fn validation_errors_map_to_distinct_status_codes() {
        assert_eq!(
            ServerError::JsonBodyExpected.status_code(),
            StatusCode::NOT_ACCEPTABLE
        );
        assert_eq!(
            ServerError::MessageRequired.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServerError::MessageTooLong.status_code(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
    }

    #[test]
    fn validation_bodies_are_exact() {
        assert_eq!(
            ServerError::JsonBodyExpected.public_message(),
            "JSON Body expected"
        );
        assert_eq!(
            ServerError::MessageRequired.public_message(),
            "Message argument is required"
        );
        assert_eq!(
            ServerError::MessageTooLong.public_message(),
            "Message is too long, it can atmost be 1000 characters"
        );
    }

    #[test]
    fn internal_causes_are_not_exposed() {
        let err = ServerError::Classify(classifier::ClassifyError::Lookup(
            SimilarityError::Request("secret-host refused connection".into()),
        ));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Internal Server Error");
    }
}
