use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored embedding of one catalog entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddingRecord {
    pub entity_id: String,
    pub embedding: Vec<f32>,
    /// Provider model that produced `embedding`.
    pub model: String,
    /// Entity text layout version at generation time.
    #[serde(default = "legacy_schema_version")]
    pub schema_version: u32,
    pub generated_at: DateTime<Utc>,
    /// Hash of the rendered entity text. Absent on records written before hashing.
    #[serde(default)]
    pub content_hash: Option<String>,
}

fn legacy_schema_version() -> u32 {
    1
}

impl EmbeddingRecord {
    pub fn dimension(&self) -> usize {
        self.embedding.len()
    }
}
