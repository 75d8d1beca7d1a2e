use serde::{Deserialize, Serialize};

/// The two views of a normalized message submitted for similarity lookup.
///
/// Word chunks catch isolated flagged terms; semantic windows catch phrases
/// whose meaning only emerges across several words. The classifier applies a
/// different score threshold per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkKind {
    /// A single whitespace-delimited token.
    Word,
    /// An overlapping multi-word window.
    Semantic,
}

/// A unit of text submitted for similarity lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Which view of the message this chunk belongs to.
    pub kind: ChunkKind,
    /// The chunk text sent to the index.
    pub text: String,
}

impl Chunk {
    /// Builds a word chunk.
    pub fn word(text: impl Into<String>) -> Self {
        Self {
            kind: ChunkKind::Word,
            text: text.into(),
        }
    }

    /// Builds a semantic-window chunk.
    pub fn semantic(text: impl Into<String>) -> Self {
        Self {
            kind: ChunkKind::Semantic,
            text: text.into(),
        }
    }
}

/// Splits normalized text into word chunks, one per whitespace-delimited
/// token, in input order.
///
/// Runs of whitespace count as a single delimiter, so no empty chunks are
/// ever produced and whitespace-only input yields an empty sequence.
pub fn word_chunks(text: &str) -> Vec<Chunk> {
    text.split_whitespace().map(Chunk::word).collect()
}
