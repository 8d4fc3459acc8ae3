//! Embedding store: one [`EmbeddingRecord`] per entity id.
//!
//! The store is a mapping, not a log. `put` replaces any record with the same id.

pub mod error;
pub mod file;
pub mod memory;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
mod model;

#[cfg(test)]
mod tests;

pub use error::{StoreError, StoreResult};
pub use file::JsonFileEmbeddingStore;
pub use memory::InMemoryEmbeddingStore;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockEmbeddingStore;
pub use model::EmbeddingRecord;

use async_trait::async_trait;

#[async_trait]
/// Key/value persistence for entity embeddings.
pub trait EmbeddingStore: Send + Sync {
    async fn get(&self, entity_id: &str) -> StoreResult<Option<EmbeddingRecord>>;

    /// Inserts or replaces the record for `record.entity_id`.
    async fn put(&self, record: EmbeddingRecord) -> StoreResult<()>;

    /// Removes the record for `entity_id`. Returns `false` if there was none.
    async fn delete(&self, entity_id: &str) -> StoreResult<bool>;

    /// Every stored record, ordered by entity id.
    async fn list_all(&self) -> StoreResult<Vec<EmbeddingRecord>>;
}
