use similarity::SimilarityError;
use thiserror::Error;

/// Errors produced by the classification pipeline.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// Invalid classifier configuration.
    #[error("invalid classifier config: {0}")]
    InvalidConfig(String),
    /// A similarity lookup failed. The whole batch is abandoned: a partial
    /// result could under-report profanity.
    #[error("similarity lookup failed: {0}")]
    Lookup(#[from] SimilarityError),
}
