use std::sync::Arc;
use std::time::Duration;

use super::*;
use crate::catalog::{CatalogEvent, Eligibility, Entity, EntityStatus, Restriction};
use crate::embedding::{EmbeddingError, MockEmbeddingProvider};
use crate::encoding::render_entity;
use crate::hashing::content_hash;
use crate::store::{EmbeddingStore, InMemoryEmbeddingStore, MockEmbeddingStore};

fn entity(id: &str) -> Entity {
    Entity {
        description: format!("Scholarship {id}"),
        eligibility: Eligibility {
            states: Restriction::restricted_to(["Kerala"]),
            ..Default::default()
        },
        ..Entity::new(id, format!("Grant {id}"))
    }
}

fn with_status(mut entity: Entity, status: EntityStatus) -> Entity {
    entity.status = status;
    entity
}

fn manager_with(
    provider: Arc<MockEmbeddingProvider>,
    store: Arc<dyn EmbeddingStore>,
) -> EmbeddingLifecycleManager {
    EmbeddingLifecycleManager::new(provider, store)
}

#[tokio::test]
async fn test_generate_stamps_metadata() {
    let provider = Arc::new(MockEmbeddingProvider::with_dimension(8));
    let manager = manager_with(provider.clone(), Arc::new(InMemoryEmbeddingStore::new()));
    let e = entity("a");

    let record = manager.generate(&e).await.unwrap();

    assert_eq!(record.entity_id, "a");
    assert_eq!(record.embedding.len(), 8);
    assert_eq!(record.model, MockEmbeddingProvider::MODEL_ID);
    assert_eq!(record.schema_version, crate::constants::EMBEDDING_SCHEMA_VERSION);
    assert_eq!(record.content_hash, Some(content_hash(&render_entity(&e))));
    assert!(manager.store().get("a").await.unwrap().is_none());
}

#[tokio::test]
async fn test_generate_propagates_provider_failure_without_retry() {
    let provider = Arc::new(MockEmbeddingProvider::new());
    provider.set_failing(true);
    let manager = manager_with(provider.clone(), Arc::new(InMemoryEmbeddingStore::new()));

    let err = manager.generate(&entity("a")).await.unwrap_err();

    assert!(matches!(
        err,
        LifecycleError::Provider(EmbeddingError::ProviderUnavailable { .. })
    ));
    assert_eq!(provider.call_count(), 1);
}

#[tokio::test]
async fn test_generate_times_out() {
    let provider = Arc::new(MockEmbeddingProvider::new());
    provider.set_delay(Some(Duration::from_millis(200)));
    let manager = EmbeddingLifecycleManager::with_config(
        provider,
        Arc::new(InMemoryEmbeddingStore::new()),
        LifecycleConfig::default().with_provider_timeout(Duration::from_millis(20)),
    );

    let err = manager.generate(&entity("a")).await.unwrap_err();
    assert!(matches!(
        err,
        LifecycleError::Provider(EmbeddingError::Timeout { .. })
    ));
}

#[tokio::test]
async fn test_upsert_replaces_existing_record() {
    let provider = Arc::new(MockEmbeddingProvider::new());
    let store = Arc::new(InMemoryEmbeddingStore::new());
    let manager = manager_with(provider, store.clone());

    let first = manager.upsert(&entity("a")).await.unwrap();
    let mut edited = entity("a");
    edited.description = "Completely different text".to_string();
    let second = manager.upsert(&edited).await.unwrap();

    assert_eq!(store.len(), 1);
    assert_ne!(first.content_hash, second.content_hash);
    assert_eq!(store.get("a").await.unwrap(), Some(second));
}

#[tokio::test]
async fn test_remove_is_idempotent() {
    let manager = manager_with(
        Arc::new(MockEmbeddingProvider::new()),
        Arc::new(InMemoryEmbeddingStore::new()),
    );
    manager.upsert(&entity("a")).await.unwrap();

    assert!(manager.remove("a").await.unwrap());
    assert!(!manager.remove("a").await.unwrap());
    assert!(!manager.remove("never-existed").await.unwrap());
}

#[tokio::test]
async fn test_is_up_to_date_rules() {
    let manager = manager_with(
        Arc::new(MockEmbeddingProvider::new()),
        Arc::new(InMemoryEmbeddingStore::new()),
    );
    let e = entity("a");
    let record = manager.generate(&e).await.unwrap();
    assert!(manager.is_up_to_date(&e, &record));

    let mut edited = e.clone();
    edited.benefits = "Rs 10,000".to_string();
    assert!(!manager.is_up_to_date(&edited, &record));

    let mut legacy = record.clone();
    legacy.content_hash = None;
    assert!(manager.is_up_to_date(&edited, &legacy));

    let bumped = EmbeddingLifecycleManager::with_config(
        Arc::new(MockEmbeddingProvider::new()),
        Arc::new(InMemoryEmbeddingStore::new()),
        LifecycleConfig::default().with_schema_version(record.schema_version + 1),
    );
    assert!(!bumped.is_up_to_date(&e, &record));
    assert!(!bumped.is_up_to_date(&e, &legacy));
}

#[test]
fn test_task_from_event_mapping() {
    let approved = entity("a");
    let pending = with_status(entity("a"), EntityStatus::Pending);

    assert_eq!(
        LifecycleTask::from_event(CatalogEvent::Created(approved.clone())),
        Some(LifecycleTask::Upsert(approved.clone()))
    );
    assert_eq!(LifecycleTask::from_event(CatalogEvent::Created(pending.clone())), None);
    assert_eq!(
        LifecycleTask::from_event(CatalogEvent::Updated(approved.clone())),
        Some(LifecycleTask::Upsert(approved.clone()))
    );
    assert_eq!(
        LifecycleTask::from_event(CatalogEvent::StatusChanged {
            previous: EntityStatus::Pending,
            entity: approved.clone(),
        }),
        Some(LifecycleTask::Upsert(approved.clone()))
    );
    assert_eq!(
        LifecycleTask::from_event(CatalogEvent::StatusChanged {
            previous: EntityStatus::Approved,
            entity: with_status(entity("a"), EntityStatus::Rejected),
        }),
        Some(LifecycleTask::Remove {
            entity_id: "a".to_string()
        })
    );
    assert_eq!(
        LifecycleTask::from_event(CatalogEvent::StatusChanged {
            previous: EntityStatus::Pending,
            entity: with_status(entity("a"), EntityStatus::Rejected),
        }),
        None
    );
    assert_eq!(
        LifecycleTask::from_event(CatalogEvent::Deleted {
            entity_id: "a".to_string()
        }),
        Some(LifecycleTask::Remove {
            entity_id: "a".to_string()
        })
    );
}

#[tokio::test]
async fn test_sync_converges_store() {
    let provider = Arc::new(MockEmbeddingProvider::new());
    let store = Arc::new(InMemoryEmbeddingStore::new());
    let manager = manager_with(provider.clone(), store.clone());

    manager.upsert(&entity("fresh")).await.unwrap();
    manager.upsert(&entity("stale")).await.unwrap();
    manager.upsert(&entity("orphan")).await.unwrap();
    let calls_before = provider.call_count();

    let mut stale = entity("stale");
    stale.description = "Rewritten".to_string();
    let catalog = vec![
        entity("fresh"),
        stale,
        entity("new"),
        with_status(entity("pending"), EntityStatus::Pending),
    ];

    let report = manager.sync(&catalog).await.unwrap();

    assert_eq!(
        report,
        SyncReport {
            generated: 2,
            up_to_date: 1,
            removed: 1,
            failed: 0,
        }
    );
    assert_eq!(provider.call_count() - calls_before, 2);
    assert!(store.contains("new"));
    assert!(!store.contains("orphan"));
    assert!(!store.contains("pending"));
}

#[tokio::test]
async fn test_sync_counts_failures_and_continues() {
    let provider = Arc::new(MockEmbeddingProvider::new());
    provider.set_failing(true);
    let store = Arc::new(InMemoryEmbeddingStore::new());
    let manager = manager_with(provider, store.clone());

    let report = manager
        .sync(&[entity("a"), entity("b")])
        .await
        .unwrap();

    assert_eq!(report.failed, 2);
    assert_eq!(report.generated, 0);
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_sync_fails_when_store_cannot_list() {
    let store = Arc::new(MockEmbeddingStore::new());
    store.set_failing(true);
    let manager = manager_with(Arc::new(MockEmbeddingProvider::new()), store);

    let err = manager.sync(&[entity("a")]).await.unwrap_err();
    assert!(matches!(err, LifecycleError::Store(_)));
}

#[tokio::test]
async fn test_worker_applies_tasks_in_order() {
    let store = Arc::new(InMemoryEmbeddingStore::new());
    let manager = Arc::new(manager_with(
        Arc::new(MockEmbeddingProvider::new()),
        store.clone(),
    ));
    let (handle, worker) = LifecycleWorker::spawn(manager);

    assert!(handle.notify(CatalogEvent::Created(entity("a"))).unwrap());
    assert!(handle.notify(CatalogEvent::Created(entity("b"))).unwrap());
    assert!(
        handle
            .notify(CatalogEvent::Deleted {
                entity_id: "a".to_string()
            })
            .unwrap()
    );
    assert!(
        !handle
            .notify(CatalogEvent::Created(with_status(
                entity("c"),
                EntityStatus::Pending
            )))
            .unwrap()
    );
    drop(handle);

    let stats = worker.join().await.unwrap();

    assert_eq!(stats, WorkerStats { processed: 3, failed: 0 });
    assert!(!store.contains("a"));
    assert!(store.contains("b"));
}

#[tokio::test]
async fn test_worker_reports_failures_on_channel() {
    let provider = Arc::new(MockEmbeddingProvider::new());
    provider.set_failing(true);
    let manager = Arc::new(manager_with(
        provider,
        Arc::new(InMemoryEmbeddingStore::new()),
    ));
    let (handle, mut worker) = LifecycleWorker::spawn(manager);

    handle.submit(LifecycleTask::Upsert(entity("a"))).unwrap();
    drop(handle);

    let failure = worker.next_failure().await.unwrap();
    assert_eq!(failure.task.entity_id(), "a");
    assert!(matches!(failure.error, LifecycleError::Provider(_)));
    assert!(worker.next_failure().await.is_none());

    let stats = worker.join().await.unwrap();
    assert_eq!(stats.failed, 1);
}

#[tokio::test]
async fn test_submit_reports_full_queue() {
    let provider = Arc::new(MockEmbeddingProvider::new());
    provider.set_delay(Some(Duration::from_millis(200)));
    let manager = Arc::new(EmbeddingLifecycleManager::with_config(
        provider,
        Arc::new(InMemoryEmbeddingStore::new()),
        LifecycleConfig::default().with_queue_capacity(1),
    ));
    let (handle, worker) = LifecycleWorker::spawn(manager);

    let results: Vec<_> = ["a", "b", "c"]
        .into_iter()
        .map(|id| handle.submit(LifecycleTask::Upsert(entity(id))))
        .collect();

    assert!(results[0].is_ok());
    assert!(
        results
            .iter()
            .any(|r| matches!(r, Err(LifecycleError::QueueFull { capacity: 1 })))
    );
    worker.abort().await;
}

#[tokio::test]
async fn test_submit_after_stop_reports_worker_stopped() {
    let manager = Arc::new(manager_with(
        Arc::new(MockEmbeddingProvider::new()),
        Arc::new(InMemoryEmbeddingStore::new()),
    ));
    let (handle, worker) = LifecycleWorker::spawn(manager);
    worker.abort().await;

    let err = handle
        .submit(LifecycleTask::Remove {
            entity_id: "a".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, LifecycleError::WorkerStopped));
}
