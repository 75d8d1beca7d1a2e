use serde::{Deserialize, Serialize};

use crate::error::ChunkError;

/// Controls how a normalized message is windowed for semantic lookup.
///
/// `ChunkConfig` is cheap to copy and serde-friendly so it can be embedded
/// in higher-level configs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChunkConfig {
    /// Window size in words for semantic chunks.
    #[serde(default = "ChunkConfig::default_window_words")]
    pub window_words: usize,
    /// Word overlap between consecutive windows. Keeping the tail of the
    /// previous window guarantees no phrase is split invisibly across a
    /// window boundary.
    #[serde(default = "ChunkConfig::default_overlap_words")]
    pub overlap_words: usize,
}

impl ChunkConfig {
    pub(crate) fn default_window_words() -> usize {
        25
    }

    pub(crate) fn default_overlap_words() -> usize {
        12
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ChunkError> {
        if self.window_words == 0 {
            return Err(ChunkError::InvalidConfig(
                "window_words must be greater than zero".into(),
            ));
        }
        if self.overlap_words >= self.window_words {
            return Err(ChunkError::InvalidConfig(
                "overlap_words must be smaller than window_words".into(),
            ));
        }
        Ok(())
    }
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            window_words: Self::default_window_words(),
            overlap_words: Self::default_overlap_words(),
        }
    }
}
