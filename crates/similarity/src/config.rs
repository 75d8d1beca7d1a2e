use serde::{Deserialize, Serialize};

use crate::error::SimilarityError;
use crate::retry::RetryConfig;

/// Connection settings for the hosted similarity index.
///
/// The URL and token identify the index holding the flagged-phrase corpus;
/// both are process-wide, read-only configuration loaded once at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimilarityConfig {
    /// Base REST URL of the index.
    pub index_url: String,
    /// Bearer token for the index.
    pub index_token: String,
    /// Overall request timeout in seconds.
    #[serde(default = "SimilarityConfig::default_timeout_secs")]
    pub timeout_secs: u64,
    /// Connection timeout in seconds.
    #[serde(default = "SimilarityConfig::default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Retry configuration for lookups. `None` means a single attempt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry: Option<RetryConfig>,
}

impl SimilarityConfig {
    pub(crate) fn default_timeout_secs() -> u64 {
        30
    }

    pub(crate) fn default_connect_timeout_secs() -> u64 {
        10
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), SimilarityError> {
        if self.index_url.trim().is_empty() {
            return Err(SimilarityError::InvalidConfig(
                "index_url must not be empty".into(),
            ));
        }
        if self.index_token.trim().is_empty() {
            return Err(SimilarityError::InvalidConfig(
                "index_token must not be empty".into(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(SimilarityError::InvalidConfig(
                "timeout_secs must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            index_url: String::new(),
            index_token: String::new(),
            timeout_secs: Self::default_timeout_secs(),
            connect_timeout_secs: Self::default_connect_timeout_secs(),
            retry: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> SimilarityConfig {
        SimilarityConfig {
            index_url: "https://example-index.upstash.io".into(),
            index_token: "token".into(),
            ..SimilarityConfig::default()
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn missing_url_rejected() {
        let cfg = SimilarityConfig {
            index_url: "  ".into(),
            ..valid_config()
        };
        let err = cfg.validate().expect_err("config should be invalid");
        assert!(err.to_string().contains("index_url"));
    }

    #[test]
    fn missing_token_rejected() {
        let cfg = SimilarityConfig {
            index_token: String::new(),
            ..valid_config()
        };
        let err = cfg.validate().expect_err("config should be invalid");
        assert!(err.to_string().contains("index_token"));
    }

    #[test]
    fn default_timeouts() {
        let cfg = SimilarityConfig::default();
        assert_eq!(cfg.timeout_secs, 30);
        assert_eq!(cfg.connect_timeout_secs, 10);
        assert!(cfg.retry.is_none());
    }
}
