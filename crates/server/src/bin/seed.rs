//! Seeds the similarity index with the flagged-phrase corpus.
//!
//! Reads a CSV with a `text` column, assigns each row a sequential numeric
//! identifier, attaches the original text as metadata, and upserts in
//! fixed-size batches. The index embeds the text server-side.
//!
//! Usage: `seed <corpus.csv>` with the same configuration sources as the
//! server (environment / `server.*` file).

use anyhow::{bail, Context};
use serde::Deserialize;
use server::ServerConfig;
use similarity::{SimilarityClient, UpsertEntry};

/// Entries per upsert request.
const SEED_BATCH_SIZE: usize = 30;

#[derive(Debug, Deserialize)]
struct Row {
    text: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_target(false)
        .init();

    let path = match std::env::args().nth(1) {
        Some(path) => path,
        None => bail!("usage: seed <corpus.csv>"),
    };

    let config = ServerConfig::load()?;
    let client =
        SimilarityClient::new(config.index.clone()).context("similarity client init failed")?;

    let mut reader = csv::Reader::from_path(&path).with_context(|| format!("open {path}"))?;
    let mut batch: Vec<UpsertEntry> = Vec::with_capacity(SEED_BATCH_SIZE);
    let mut total: usize = 0;

    for record in reader.deserialize() {
        let row: Row = record.context("malformed CSV row")?;
        batch.push(UpsertEntry::new(total, row.text));
        total += 1;

        if batch.len() == SEED_BATCH_SIZE {
            client.upsert(&batch).await.context("upsert batch failed")?;
            tracing::info!(loaded = total, "seeded batch");
            batch.clear();
        }
    }

    if !batch.is_empty() {
        client
            .upsert(&batch)
            .await
            .context("final upsert batch failed")?;
    }

    tracing::info!(total, "seeding complete");
    Ok(())
}
