use std::sync::Arc;

use futures::future::try_join_all;

use chunk::{normalize, semantic_windows, word_chunks, Chunk, Whitelist};
use similarity::{SimilarityLookup, SimilarityMatch};

use crate::config::ClassifierConfig;
use crate::decision::decide;
use crate::error::ClassifyError;
use crate::types::Classification;

#[cfg(test)]
mod tests;

/// Classifies messages by nearest-neighbor similarity against the
/// flagged-phrase corpus.
///
/// Holds only process-wide, read-only state (the lookup handle, the
/// whitelist, and thresholds); every request runs through [`classify`]
/// without touching shared mutable state, so one instance serves all
/// requests concurrently.
///
/// [`classify`]: Classifier::classify
pub struct Classifier {
    lookup: Arc<dyn SimilarityLookup>,
    whitelist: Whitelist,
    cfg: ClassifierConfig,
}

impl Classifier {
    /// Construct a classifier over any lookup implementation.
    pub fn new(
        lookup: Arc<dyn SimilarityLookup>,
        whitelist: Whitelist,
        cfg: ClassifierConfig,
    ) -> Result<Self, ClassifyError> {
        cfg.validate()?;
        Ok(Self {
            lookup,
            whitelist,
            cfg,
        })
    }

    /// Run the full pipeline: normalize → chunk → fan out → decide.
    ///
    /// A fully whitelisted message normalizes to an empty string, produces
    /// zero chunks, performs zero lookups, and comes back clean with score 0.
    pub async fn classify(&self, message: &str) -> Result<Classification, ClassifyError> {
        let normalized = normalize(message, &self.whitelist);

        let mut chunks = word_chunks(&normalized);
        chunks.extend(semantic_windows(&normalized, &self.cfg.chunk));
        tracing::debug!(chunks = chunks.len(), "classifying message");

        let results = self.query_all(&chunks).await?;
        Ok(decide(&chunks, &results, &self.cfg))
    }

    /// One top-1 lookup per chunk, all in flight at once.
    ///
    /// Result slots keep chunk input order so downstream tie-breaking is
    /// reproducible; the first failed lookup aborts the whole batch. Every
    /// chunk is always queried — the verdict needs the batch maximum, not
    /// the first hit.
    async fn query_all(
        &self,
        chunks: &[Chunk],
    ) -> Result<Vec<Option<SimilarityMatch>>, ClassifyError> {
        let lookups = chunks.iter().map(|chunk| self.lookup.nearest(&chunk.text));
        let results = try_join_all(lookups).await?;
        Ok(results)
    }
}
