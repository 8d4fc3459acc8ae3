use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;

use super::EmbeddingStore;
use super::error::{StoreError, StoreResult};
use super::memory::InMemoryEmbeddingStore;
use super::model::EmbeddingRecord;

/// In-memory store that can be switched into failure mode and counts reads.
#[derive(Debug, Default)]
pub struct MockEmbeddingStore {
    inner: InMemoryEmbeddingStore,
    failing: AtomicBool,
    reads: AtomicUsize,
}

impl MockEmbeddingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn check(&self) -> StoreResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable {
                reason: "mock store set to fail".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl EmbeddingStore for MockEmbeddingStore {
    async fn get(&self, entity_id: &str) -> StoreResult<Option<EmbeddingRecord>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.inner.get(entity_id).await
    }

    async fn put(&self, record: EmbeddingRecord) -> StoreResult<()> {
        self.check()?;
        self.inner.put(record).await
    }

    async fn delete(&self, entity_id: &str) -> StoreResult<bool> {
        self.check()?;
        self.inner.delete(entity_id).await
    }

    async fn list_all(&self) -> StoreResult<Vec<EmbeddingRecord>> {
        self.check()?;
        self.inner.list_all().await
    }
}
