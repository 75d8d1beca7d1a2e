use chunk::ChunkConfig;
use serde::{Deserialize, Serialize};

use crate::error::ClassifyError;

/// Thresholds and windowing knobs for classification.
///
/// Cheap to clone and serde-friendly so it can be embedded in the server
/// configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassifierConfig {
    /// Minimum score (exclusive) for a single-word match to flag.
    #[serde(default = "ClassifierConfig::default_word_threshold")]
    pub word_threshold: f32,
    /// Minimum score (exclusive) for a semantic-window match to flag.
    /// Lower than the word threshold: a window may contain a flagged word
    /// embedded in an inoffensive context, so an isolated-word threshold
    /// would over-flag.
    #[serde(default = "ClassifierConfig::default_semantic_threshold")]
    pub semantic_threshold: f32,
    /// Window size and overlap for semantic chunking.
    #[serde(default)]
    pub chunk: ChunkConfig,
}

impl ClassifierConfig {
    pub(crate) fn default_word_threshold() -> f32 {
        0.95
    }

    pub(crate) fn default_semantic_threshold() -> f32 {
        0.88
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ClassifyError> {
        for (name, threshold) in [
            ("word_threshold", self.word_threshold),
            ("semantic_threshold", self.semantic_threshold),
        ] {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(ClassifyError::InvalidConfig(format!(
                    "{name} must be within [0.0, 1.0]"
                )));
            }
        }
        self.chunk
            .validate()
            .map_err(|e| ClassifyError::InvalidConfig(e.to_string()))
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            word_threshold: Self::default_word_threshold(),
            semantic_threshold: Self::default_semantic_threshold(),
            chunk: ChunkConfig::default(),
        }
    }
}
