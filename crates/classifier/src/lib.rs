//! # Profanity classifier (`classifier`)
//!
//! ## Purpose
//!
//! `classifier` sits on top of the chunking layer (`chunk`) and the index
//! client (`similarity`). It is responsible for turning a raw message into
//! word and semantic-window chunks, fanning one top-1 lookup per chunk out
//! to the index, and reducing the batch of results to a single verdict with
//! a confidence score and the matched reference phrase.
//!
//! ## Core Types
//!
//! - [`Classifier`]: the engine wiring normalize → chunk → fan-out → decide.
//! - [`ClassifierConfig`]: per-kind score thresholds plus windowing knobs.
//! - [`Classification`]: tagged verdict — `Profane` carries the matched
//!   phrase, `Clean` only the best score seen.
//!
//! ## Fan-out semantics
//!
//! Every chunk is looked up, all lookups run concurrently as one batch, and
//! result slots keep chunk input order. There is no early exit on the first
//! match (the reported score is the batch maximum), and the first failed
//! lookup abandons the whole batch: a partial result could under-report
//! profanity.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use chunk::Whitelist;
//! use classifier::{Classifier, ClassifierConfig};
//! use similarity::{SimilarityClient, SimilarityConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let index = SimilarityClient::new(SimilarityConfig {
//!     index_url: "https://example-index.upstash.io".into(),
//!     index_token: "secret".into(),
//!     ..SimilarityConfig::default()
//! })?;
//!
//! let classifier = Classifier::new(
//!     Arc::new(index),
//!     Whitelist::new(["swear"]),
//!     ClassifierConfig::default(),
//! )?;
//!
//! let verdict = classifier.classify("you eldritch horror").await?;
//! println!("profane={} score={}", verdict.is_profanity(), verdict.score());
//! # Ok(())
//! # }
//! ```

mod config;
mod decision;
mod engine;
mod error;
mod types;

pub use crate::config::ClassifierConfig;
pub use crate::engine::Classifier;
pub use crate::error::ClassifyError;
pub use crate::types::Classification;
