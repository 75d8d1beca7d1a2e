//! Profanity API server — HTTP surface over the similarity classifier.
//!
//! This crate wires the `chunk` → `similarity` → `classifier` pipeline into
//! a small REST API:
//!
//! - **Classification**: `POST /api` takes `{ "message": string }` and
//!   answers with a verdict, a confidence score, and (when profane) the
//!   matched reference phrase.
//! - **Health**: `GET /` (service info) and `GET /health` (liveness).
//! - **Middleware**: CORS, request timeout, compression, request ID
//!   tracking, structured logging.
//! - **Configuration**: environment variable and file-based configuration.
//! - **Graceful shutdown**: SIGTERM / Ctrl+C handling.
//!
//! The error bodies of `POST /api` are a published contract; see
//! [`error::ServerError`].
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
