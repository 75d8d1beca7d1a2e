use thiserror::Error;

/// Errors surfaced by the similarity client.
#[derive(Debug, Error)]
pub enum SimilarityError {
    /// Configuration is inconsistent (e.g., missing URL or token).
    #[error("invalid similarity config: {0}")]
    InvalidConfig(String),
    /// The HTTP request could not be sent or timed out.
    #[error("index request failed: {0}")]
    Request(String),
    /// The index answered with a non-success status.
    #[error("index returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    /// The response body did not match the expected shape.
    #[error("malformed index response: {0}")]
    Response(String),
}

impl SimilarityError {
    /// Whether another attempt against the index may succeed.
    ///
    /// Network-level failures and throttling/server statuses are transient;
    /// bad configuration and malformed response shapes are not.
    pub fn is_transient(&self) -> bool {
        match self {
            SimilarityError::Request(_) => true,
            SimilarityError::Status { status, .. } => {
                matches!(status, 408 | 429 | 500 | 502 | 503 | 504)
            }
            SimilarityError::InvalidConfig(_) | SimilarityError::Response(_) => false,
        }
    }
}
