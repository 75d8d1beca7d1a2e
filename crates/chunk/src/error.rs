use thiserror::Error;

/// Errors produced by the chunking layer.
#[derive(Debug, Error)]
pub enum ChunkError {
    /// Invalid chunking configuration.
    #[error("invalid chunk config: {0}")]
    InvalidConfig(String),
}
