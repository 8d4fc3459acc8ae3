use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, instrument, warn};

use super::config::LifecycleConfig;
use super::error::LifecycleResult;
use super::task::{LifecycleTask, SyncReport};
use crate::catalog::Entity;
use crate::embedding::{EmbeddingError, EmbeddingProvider};
use crate::encoding::render_entity;
use crate::hashing::content_hash;
use crate::store::{EmbeddingRecord, EmbeddingStore};

/// Keeps the embedding store consistent with the approved catalog.
pub struct EmbeddingLifecycleManager {
    provider: Arc<dyn EmbeddingProvider>,
    store: Arc<dyn EmbeddingStore>,
    config: LifecycleConfig,
}

impl EmbeddingLifecycleManager {
    pub fn new(provider: Arc<dyn EmbeddingProvider>, store: Arc<dyn EmbeddingStore>) -> Self {
        Self::with_config(provider, store, LifecycleConfig::default())
    }

    pub fn with_config(
        provider: Arc<dyn EmbeddingProvider>,
        store: Arc<dyn EmbeddingStore>,
        config: LifecycleConfig,
    ) -> Self {
        Self {
            provider,
            store,
            config,
        }
    }

    pub fn config(&self) -> &LifecycleConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<dyn EmbeddingStore> {
        &self.store
    }

    /// Embeds the entity text. Does not touch the store.
    #[instrument(skip(self, entity), fields(entity_id = %entity.id))]
    pub async fn generate(&self, entity: &Entity) -> LifecycleResult<EmbeddingRecord> {
        let text = render_entity(entity);
        let timeout = self.config.provider_timeout;
        let embedding = tokio::time::timeout(timeout, self.provider.embed(&text))
            .await
            .map_err(|_| EmbeddingError::Timeout { after: timeout })??;

        debug!(dim = embedding.len(), "Generated entity embedding");
        Ok(EmbeddingRecord {
            entity_id: entity.id.clone(),
            embedding,
            model: self.provider.model_id().to_string(),
            schema_version: self.config.schema_version,
            generated_at: Utc::now(),
            content_hash: Some(content_hash(&text)),
        })
    }

    /// Generates and stores the embedding, replacing any previous record.
    pub async fn upsert(&self, entity: &Entity) -> LifecycleResult<EmbeddingRecord> {
        let record = self.generate(entity).await?;
        self.store.put(record.clone()).await?;
        Ok(record)
    }

    /// Deletes the stored embedding. Returns `false` if there was none.
    pub async fn remove(&self, entity_id: &str) -> LifecycleResult<bool> {
        let removed = self.store.delete(entity_id).await?;
        debug!(entity_id, removed, "Removed entity embedding");
        Ok(removed)
    }

    /// `false` when the record predates the current schema or its text has changed.
    ///
    /// Records without a content hash are trusted on schema version alone.
    pub fn is_up_to_date(&self, entity: &Entity, record: &EmbeddingRecord) -> bool {
        if record.schema_version != self.config.schema_version {
            return false;
        }
        match &record.content_hash {
            Some(stored) => *stored == content_hash(&render_entity(entity)),
            None => true,
        }
    }

    /// Runs one worker task.
    pub async fn apply(&self, task: &LifecycleTask) -> LifecycleResult<()> {
        match task {
            LifecycleTask::Upsert(entity) => self.upsert(entity).await.map(|_| ()),
            LifecycleTask::Remove { entity_id } => self.remove(entity_id).await.map(|_| ()),
        }
    }

    /// Converges the store with the approved subset of `entities`.
    ///
    /// Per-entity failures are counted and logged. Only a failure to list the store
    /// aborts the sweep.
    #[instrument(skip(self, entities), fields(candidates = entities.len()))]
    pub async fn sync(&self, entities: &[Entity]) -> LifecycleResult<SyncReport> {
        let mut report = SyncReport::default();
        let mut approved_ids = HashSet::new();

        for entity in entities.iter().filter(|e| e.is_approved()) {
            approved_ids.insert(entity.id.as_str());

            let current = match self.store.get(&entity.id).await {
                Ok(record) => record,
                Err(error) => {
                    warn!(entity_id = %entity.id, error = %error, "Store read failed during sync");
                    report.failed += 1;
                    continue;
                }
            };

            if current
                .as_ref()
                .is_some_and(|record| self.is_up_to_date(entity, record))
            {
                report.up_to_date += 1;
                continue;
            }

            match self.upsert(entity).await {
                Ok(_) => report.generated += 1,
                Err(error) => {
                    warn!(
                        entity_id = %entity.id,
                        error = %error,
                        "Embedding generation failed during sync"
                    );
                    report.failed += 1;
                }
            }
        }

        for record in self.store.list_all().await? {
            if approved_ids.contains(record.entity_id.as_str()) {
                continue;
            }
            match self.store.delete(&record.entity_id).await {
                Ok(true) => report.removed += 1,
                Ok(false) => {}
                Err(error) => {
                    warn!(
                        entity_id = %record.entity_id,
                        error = %error,
                        "Orphan removal failed during sync"
                    );
                    report.failed += 1;
                }
            }
        }

        info!(
            generated = report.generated,
            up_to_date = report.up_to_date,
            removed = report.removed,
            failed = report.failed,
            "Embedding sync finished"
        );
        Ok(report)
    }
}

impl std::fmt::Debug for EmbeddingLifecycleManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbeddingLifecycleManager")
            .field("model", &self.provider.model_id())
            .field("config", &self.config)
            .finish()
    }
}
