use async_trait::async_trait;

use super::EmbeddingProvider;
use super::error::EmbeddingError;
use crate::constants::DEFAULT_EMBEDDING_DIM;
use crate::hashing::hash_salted;

/// Deterministic bag-of-words embedder (signed feature hashing, L2-normalized).
///
/// Needs no network or model files. Texts sharing vocabulary land close together,
/// which is enough for local runs and tests. Changing the tokenization changes every
/// vector, so bump [`HashEmbeddingProvider::MODEL_ID`] along with it.
#[derive(Debug, Clone)]
pub struct HashEmbeddingProvider {
    dimension: usize,
}

impl HashEmbeddingProvider {
    pub const MODEL_ID: &'static str = "feature-hash-v1";

    pub fn new(dimension: usize) -> Self {
        Self {
            dimension: dimension.max(1),
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Synchronous core of [`EmbeddingProvider::embed`].
    pub fn embed_sync(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        if text.trim().is_empty() {
            return Err(EmbeddingError::EmptyInput);
        }

        let mut vector = vec![0.0f32; self.dimension];
        for token in tokenize(text) {
            let index = (hash_salted("index", &token) % self.dimension as u64) as usize;
            let sign = if hash_salted("sign", &token) % 2 == 0 {
                1.0
            } else {
                -1.0
            };
            vector[index] += sign;
        }

        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for v in &mut vector {
                *v /= norm;
            }
        }
        Ok(vector)
    }
}

impl Default for HashEmbeddingProvider {
    fn default() -> Self {
        Self::new(DEFAULT_EMBEDDING_DIM)
    }
}

#[async_trait]
impl EmbeddingProvider for HashEmbeddingProvider {
    fn model_id(&self) -> &str {
        Self::MODEL_ID
    }

    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.embed_sync(text)
    }
}

fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.len() > 1)
        .map(|t| t.to_lowercase())
}
