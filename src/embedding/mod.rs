//! Embedding providers.
//!
//! - [`HttpEmbeddingProvider`] calls an OpenAI-compatible `/embeddings` endpoint.
//! - [`HashEmbeddingProvider`] is an offline feature-hashing embedder used as stub mode
//!   when no endpoint is configured.
//! - `MockEmbeddingProvider` (tests / `mock` feature) counts calls and injects failures.

mod error;
pub mod hash;
pub mod http;
#[cfg(any(test, feature = "mock"))]
pub mod mock;


pub use error::EmbeddingError;
pub use hash::HashEmbeddingProvider;
pub use http::{HttpEmbeddingConfig, HttpEmbeddingProvider};
#[cfg(any(test, feature = "mock"))]
pub use mock::MockEmbeddingProvider;

use async_trait::async_trait;

#[async_trait]
/// Turns text into a fixed-length vector.
///
/// Implementations may be slow or fail; callers bound every call with a timeout and
/// decide how to degrade.
pub trait EmbeddingProvider: Send + Sync {
    /// Identifier stored alongside generated vectors.
    fn model_id(&self) -> &str;

    /// Embeds `text`. Empty text is rejected with [`EmbeddingError::EmptyInput`].
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;
}
