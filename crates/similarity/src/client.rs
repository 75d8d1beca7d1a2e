use std::time::Duration;

use async_trait::async_trait;

use crate::config::SimilarityConfig;
use crate::error::SimilarityError;
use crate::retry::{execute_with_retry_async, AttemptError};
use crate::types::{QueryRequest, QueryResponse, SimilarityMatch, UpsertEntry};

/// Top-1 nearest-neighbor lookup over the flagged-phrase corpus.
///
/// The classifier depends on this trait instead of the concrete client so
/// tests can script index behavior without a live backend.
#[async_trait]
pub trait SimilarityLookup: Send + Sync {
    /// Returns the single closest reference entry for `text`, or `None`
    /// when the index holds no neighbor at all.
    async fn nearest(&self, text: &str) -> Result<Option<SimilarityMatch>, SimilarityError>;
}

/// REST client for the hosted vector index.
///
/// The index embeds raw text server-side, so both lookups and upserts send
/// plain strings; no embedding happens in this process.
#[derive(Debug, Clone)]
pub struct SimilarityClient {
    http: reqwest::Client,
    cfg: SimilarityConfig,
}

impl SimilarityClient {
    /// Builds a client with pooled connections and the configured timeouts.
    pub fn new(cfg: SimilarityConfig) -> Result<Self, SimilarityError> {
        cfg.validate()?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
            .build()
            .map_err(|e| SimilarityError::InvalidConfig(format!("HTTP client: {e}")))?;

        Ok(Self { http, cfg })
    }

    /// Inserts a batch of reference phrases, embedding them index-side.
    pub async fn upsert(&self, entries: &[UpsertEntry]) -> Result<(), SimilarityError> {
        if entries.is_empty() {
            return Ok(());
        }

        let payload = serde_json::to_value(entries)
            .map_err(|e| SimilarityError::Request(format!("serialize upsert batch: {e}")))?;
        self.post_json("upsert-data", &payload).await?;
        Ok(())
    }

    /// One lookup attempt: `topK = 1` with metadata.
    async fn query_once(&self, text: &str) -> Result<Option<SimilarityMatch>, SimilarityError> {
        let request = QueryRequest {
            top_k: 1,
            data: text.to_string(),
            include_metadata: true,
        };
        let payload = serde_json::to_value(&request)
            .map_err(|e| SimilarityError::Request(format!("serialize query: {e}")))?;

        let value = self.post_json("query-data", &payload).await?;
        let response: QueryResponse = serde_json::from_value(value)
            .map_err(|e| SimilarityError::Response(format!("unexpected query shape: {e}")))?;

        match response.result.into_iter().next() {
            None => Ok(None),
            Some(hit) => {
                let text = hit
                    .metadata
                    .and_then(|metadata| metadata.text)
                    .ok_or_else(|| {
                        SimilarityError::Response("query hit is missing text metadata".into())
                    })?;
                Ok(Some(SimilarityMatch {
                    score: hit.score,
                    text,
                }))
            }
        }
    }

    async fn post_json(
        &self,
        endpoint: &str,
        payload: &serde_json::Value,
    ) -> Result<serde_json::Value, SimilarityError> {
        let url = endpoint_url(&self.cfg.index_url, endpoint);
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.cfg.index_token)
            .json(payload)
            .send()
            .await
            .map_err(|e| SimilarityError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(SimilarityError::Status { status, body });
        }

        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| SimilarityError::Response(format!("invalid JSON body: {e}")))
    }
}

#[async_trait]
impl SimilarityLookup for SimilarityClient {
    async fn nearest(&self, text: &str) -> Result<Option<SimilarityMatch>, SimilarityError> {
        let Some(retry_cfg) = self.cfg.retry else {
            return self.query_once(text).await;
        };

        let outcome = execute_with_retry_async(&retry_cfg, |attempt| {
            let client = self.clone();
            let text = text.to_string();
            async move {
                if attempt > 0 {
                    tracing::debug!(attempt, "retrying similarity lookup");
                }
                client.query_once(&text).await.map_err(|e| {
                    if e.is_transient() {
                        AttemptError::transient(e.to_string())
                    } else {
                        AttemptError::fatal(e.to_string())
                    }
                })
            }
        })
        .await;

        if outcome.attempts > 1 {
            tracing::debug!(attempts = outcome.attempts, "similarity lookup retried");
        }
        outcome.into_result().map_err(SimilarityError::Request)
    }
}

fn endpoint_url(base: &str, endpoint: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), endpoint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retry::RetryConfig;

    #[test]
    fn endpoint_url_handles_trailing_slash() {
        assert_eq!(
            endpoint_url("https://index.example.io/", "query-data"),
            "https://index.example.io/query-data"
        );
        assert_eq!(
            endpoint_url("https://index.example.io", "upsert-data"),
            "https://index.example.io/upsert-data"
        );
    }

    #[test]
    fn client_rejects_invalid_config() {
        let err = SimilarityClient::new(SimilarityConfig::default())
            .err()
            .expect("empty config must be rejected");
        assert!(matches!(err, SimilarityError::InvalidConfig(_)));
    }

    #[test]
    fn client_accepts_config_with_retry() {
        let cfg = SimilarityConfig {
            index_url: "https://index.example.io".into(),
            index_token: "token".into(),
            retry: Some(RetryConfig::default()),
            ..SimilarityConfig::default()
        };
        assert!(SimilarityClient::new(cfg).is_ok());
    }
}
