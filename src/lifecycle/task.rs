use serde::Serialize;

use crate::catalog::{CatalogEvent, Entity};

use super::error::LifecycleError;

#[derive(Debug, Clone, PartialEq)]
/// Unit of work for the lifecycle worker.
pub enum LifecycleTask {
    Upsert(Entity),
    Remove { entity_id: String },
}

impl LifecycleTask {
    /// Maps a catalog change to the store mutation it requires, if any.
    ///
    /// Entering the approved state or changing while approved regenerates the
    /// embedding. Leaving it, or deletion, removes the embedding.
    pub fn from_event(event: CatalogEvent) -> Option<Self> {
        match event {
            CatalogEvent::Created(entity) | CatalogEvent::Updated(entity) => {
                entity.is_approved().then(|| Self::Upsert(entity))
            }
            CatalogEvent::StatusChanged { previous, entity } => {
                match (previous.is_approved(), entity.is_approved()) {
                    (_, true) => Some(Self::Upsert(entity)),
                    (true, false) => Some(Self::Remove {
                        entity_id: entity.id,
                    }),
                    (false, false) => None,
                }
            }
            CatalogEvent::Deleted { entity_id } => Some(Self::Remove { entity_id }),
        }
    }

    pub fn entity_id(&self) -> &str {
        match self {
            Self::Upsert(entity) => &entity.id,
            Self::Remove { entity_id } => entity_id,
        }
    }

    pub fn action(&self) -> &'static str {
        match self {
            Self::Upsert(_) => "upsert",
            Self::Remove { .. } => "remove",
        }
    }
}

#[derive(Debug)]
/// A task the worker could not complete.
pub struct LifecycleFailure {
    pub task: LifecycleTask,
    pub error: LifecycleError,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
/// Outcome counts of [`super::EmbeddingLifecycleManager::sync`].
pub struct SyncReport {
    pub generated: usize,
    pub up_to_date: usize,
    pub removed: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Totals reported by a worker when it stops.
pub struct WorkerStats {
    pub processed: usize,
    pub failed: usize,
}
