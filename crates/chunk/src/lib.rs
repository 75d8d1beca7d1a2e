//! Text normalization and chunking layer.
//!
//! This crate turns a raw user message into the units the classifier looks
//! up against the similarity index:
//!
//! - [`normalize`] strips whitelisted tokens (case-insensitively) and
//!   collapses whitespace to single spaces.
//! - [`word_chunks`] yields one chunk per whitespace-delimited token.
//! - [`semantic_windows`] yields overlapping multi-word windows so a flagged
//!   phrase can never be split invisibly across a window boundary.
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no OS/locale dependence. Same text and config,
//! same chunks, in the same order — downstream tie-breaking relies on this.

mod chunk;
mod config;
mod error;
mod normalize;
mod window;

pub use crate::chunk::{word_chunks, Chunk, ChunkKind};
pub use crate::config::ChunkConfig;
pub use crate::error::ChunkError;
pub use crate::normalize::{normalize, Whitelist};
pub use crate::window::semantic_windows;
