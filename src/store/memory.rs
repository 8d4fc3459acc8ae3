use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use super::EmbeddingStore;
use super::error::StoreResult;
use super::model::EmbeddingRecord;

/// Process-local store.
#[derive(Debug, Default)]
pub struct InMemoryEmbeddingStore {
    records: RwLock<HashMap<String, EmbeddingRecord>>,
}

impl InMemoryEmbeddingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    pub fn contains(&self, entity_id: &str) -> bool {
        self.records.read().contains_key(entity_id)
    }
}

#[async_trait]
impl EmbeddingStore for InMemoryEmbeddingStore {
    async fn get(&self, entity_id: &str) -> StoreResult<Option<EmbeddingRecord>> {
        Ok(self.records.read().get(entity_id).cloned())
    }

    async fn put(&self, record: EmbeddingRecord) -> StoreResult<()> {
        self.records
            .write()
            .insert(record.entity_id.clone(), record);
        Ok(())
    }

    async fn delete(&self, entity_id: &str) -> StoreResult<bool> {
        Ok(self.records.write().remove(entity_id).is_some())
    }

    async fn list_all(&self) -> StoreResult<Vec<EmbeddingRecord>> {
        let mut records: Vec<EmbeddingRecord> = self.records.read().values().cloned().collect();
        records.sort_by(|a, b| a.entity_id.cmp(&b.entity_id));
        Ok(records)
    }
}
