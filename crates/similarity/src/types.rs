use serde::{Deserialize, Serialize};

/// Best match returned by the index for a single chunk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimilarityMatch {
    /// Similarity score in [0, 1].
    pub score: f32,
    /// The matched reference phrase from the corpus.
    pub text: String,
}

/// Wire request for a nearest-neighbor lookup over raw text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QueryRequest {
    pub top_k: usize,
    pub data: String,
    pub include_metadata: bool,
}

/// Wire response envelope for `query-data`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct QueryResponse {
    #[serde(default)]
    pub result: Vec<QueryHit>,
}

/// A single ranked hit.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct QueryHit {
    pub score: f32,
    #[serde(default)]
    pub metadata: Option<QueryHitMetadata>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct QueryHitMetadata {
    #[serde(default)]
    pub text: Option<String>,
}

/// A reference phrase staged for insertion into the index.
///
/// The index embeds `data` server-side; the original text rides along as
/// metadata so query hits can report what was matched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpsertEntry {
    pub id: String,
    pub data: String,
    pub metadata: UpsertMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpsertMetadata {
    pub text: String,
}

impl UpsertEntry {
    /// Builds an entry with a numeric identifier and the text attached both
    /// as embedding input and as metadata.
    pub fn new(id: usize, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            id: id.to_string(),
            data: text.clone(),
            metadata: UpsertMetadata { text },
        }
    }
}
