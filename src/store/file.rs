use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::EmbeddingStore;
use super::error::StoreResult;
use super::model::EmbeddingRecord;

/// Store backed by a JSON array of records.
///
/// The file is read on first use and rewritten in full (temp file + rename) after
/// every mutation. A missing file is an empty store.
#[derive(Debug)]
pub struct JsonFileEmbeddingStore {
    path: PathBuf,
    records: Mutex<Option<HashMap<String, EmbeddingRecord>>>,
}

impl JsonFileEmbeddingStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> StoreResult<HashMap<String, EmbeddingRecord>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No embedding file yet, starting empty");
                return Ok(HashMap::new());
            }
            Err(e) => return Err(e.into()),
        };

        let records: Vec<EmbeddingRecord> = serde_json::from_slice(&bytes)?;
        info!(path = %self.path.display(), count = records.len(), "Loaded embedding file");
        Ok(records
            .into_iter()
            .map(|r| (r.entity_id.clone(), r))
            .collect())
    }

    async fn persist(&self, records: &HashMap<String, EmbeddingRecord>) -> StoreResult<()> {
        let mut sorted: Vec<&EmbeddingRecord> = records.values().collect();
        sorted.sort_by(|a, b| a.entity_id.cmp(&b.entity_id));
        let bytes = serde_json::to_vec(&sorted)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl EmbeddingStore for JsonFileEmbeddingStore {
    async fn get(&self, entity_id: &str) -> StoreResult<Option<EmbeddingRecord>> {
        let mut guard = self.records.lock().await;
        if guard.is_none() {
            *guard = Some(self.load().await?);
        }
        Ok(guard.as_ref().and_then(|m| m.get(entity_id).cloned()))
    }

    async fn put(&self, record: EmbeddingRecord) -> StoreResult<()> {
        let mut guard = self.records.lock().await;
        if guard.is_none() {
            *guard = Some(self.load().await?);
        }
        let mut records = guard.clone().unwrap_or_default();
        records.insert(record.entity_id.clone(), record);

        // Cached map only advances once the file holds the change.
        self.persist(&records).await?;
        *guard = Some(records);
        Ok(())
    }

    async fn delete(&self, entity_id: &str) -> StoreResult<bool> {
        let mut guard = self.records.lock().await;
        if guard.is_none() {
            *guard = Some(self.load().await?);
        }
        let present = guard.as_ref().is_some_and(|m| m.contains_key(entity_id));
        if !present {
            return Ok(false);
        }

        let mut records = guard.clone().unwrap_or_default();
        records.remove(entity_id);
        self.persist(&records).await?;
        *guard = Some(records);
        Ok(true)
    }

    async fn list_all(&self) -> StoreResult<Vec<EmbeddingRecord>> {
        let mut guard = self.records.lock().await;
        if guard.is_none() {
            *guard = Some(self.load().await?);
        }
        let mut records: Vec<EmbeddingRecord> = guard
            .as_ref()
            .map(|m| m.values().cloned().collect())
            .unwrap_or_default();
        records.sort_by(|a, b| a.entity_id.cmp(&b.entity_id));
        Ok(records)
    }
}
