//! Profanity API server binary
//!
//! Classifies short messages by nearest-neighbor similarity against a
//! hosted corpus of flagged phrases.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Load configuration
    let config = ServerConfig::load()?;

    // Start server
    server::start_server(config).await?;

    Ok(())
}
