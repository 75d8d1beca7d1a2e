//! Async client for the hosted nearest-neighbor index.
//!
//! The index stores the flagged-phrase corpus as vectors it embeds
//! server-side; this crate only speaks its REST surface:
//!
//! - `POST {base}/query-data` — top-K nearest neighbors for a raw text,
//!   with stored metadata. The classifier always asks for the single
//!   closest match (`topK = 1`).
//! - `POST {base}/upsert-data` — batch insertion of reference phrases,
//!   used by the offline seed binary.
//!
//! ## Resilience
//!
//! Lookups can optionally retry transient failures (timeouts, connection
//! resets, 429/5xx) with exponential backoff and jitter. Retries are off by
//! default; when the budget is exhausted the failure propagates so callers
//! keep their fail-fast contract.
//!
//! ## The [`SimilarityLookup`] seam
//!
//! The classifier depends on the [`SimilarityLookup`] trait rather than the
//! concrete client, so tests can script index behavior without a live
//! backend.

mod client;
mod config;
mod error;
mod retry;
mod types;

pub use crate::client::{SimilarityClient, SimilarityLookup};
pub use crate::config::SimilarityConfig;
pub use crate::error::SimilarityError;
pub use crate::retry::{execute_with_retry_async, AttemptError, RetryConfig, RetryResult};
pub use crate::types::{SimilarityMatch, UpsertEntry, UpsertMetadata};
