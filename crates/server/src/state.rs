use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use chunk::Whitelist;
use classifier::Classifier;
use similarity::{SimilarityClient, SimilarityLookup};
use std::sync::Arc;

/// Shared application state
///
/// Everything here is read-only after startup; requests share it without
/// locking.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Classifier instance (shared across requests)
    pub classifier: Arc<Classifier>,
}

impl ServerState {
    /// Create state backed by the configured remote index
    pub fn new(config: ServerConfig) -> ServerResult<Self> {
        let client = SimilarityClient::new(config.index.clone())
            .map_err(|e| ServerError::Config(e.to_string()))?;
        Self::with_lookup(config, Arc::new(client))
    }

    /// Create state over any lookup implementation
    ///
    /// Integration tests use this to substitute a scripted index.
    pub fn with_lookup(
        config: ServerConfig,
        lookup: Arc<dyn SimilarityLookup>,
    ) -> ServerResult<Self> {
        let whitelist = Whitelist::new(&config.whitelist);
        let classifier = Classifier::new(lookup, whitelist, config.classifier.clone())
            .map_err(|e| ServerError::Config(e.to_string()))?;

        Ok(Self {
            config: Arc::new(config),
            classifier: Arc::new(classifier),
        })
    }
}
