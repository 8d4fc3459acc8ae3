use super::*;
use chrono::Utc;
use tempfile::TempDir;

fn record(id: &str, embedding: Vec<f32>) -> EmbeddingRecord {
    EmbeddingRecord {
        entity_id: id.to_string(),
        embedding,
        model: "test-model".to_string(),
        schema_version: 2,
        generated_at: Utc::now(),
        content_hash: Some(format!("hash-{id}")),
    }
}

#[tokio::test]
async fn test_in_memory_put_replaces() {
    let store = InMemoryEmbeddingStore::new();
    store.put(record("a", vec![1.0, 0.0])).await.unwrap();
    store.put(record("a", vec![0.0, 1.0])).await.unwrap();

    assert_eq!(store.len(), 1);
    let got = store.get("a").await.unwrap().unwrap();
    assert_eq!(got.embedding, vec![0.0, 1.0]);
    assert_eq!(got.dimension(), 2);
}

#[tokio::test]
async fn test_in_memory_delete_reports_presence() {
    let store = InMemoryEmbeddingStore::new();
    store.put(record("a", vec![1.0])).await.unwrap();

    assert!(store.delete("a").await.unwrap());
    assert!(!store.delete("a").await.unwrap());
    assert!(store.get("a").await.unwrap().is_none());
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_in_memory_list_all_sorted() {
    let store = InMemoryEmbeddingStore::new();
    for id in ["c", "a", "b"] {
        store.put(record(id, vec![1.0])).await.unwrap();
    }
    let ids: Vec<String> = store
        .list_all()
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.entity_id)
        .collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[tokio::test]
async fn test_file_store_missing_file_is_empty() {
    let temp = TempDir::new().unwrap();
    let store = JsonFileEmbeddingStore::new(temp.path().join("embeddings.json"));

    assert!(store.get("a").await.unwrap().is_none());
    assert!(store.list_all().await.unwrap().is_empty());
    assert!(!store.delete("a").await.unwrap());
}

#[tokio::test]
async fn test_file_store_persists_across_instances() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("embeddings.json");

    let store = JsonFileEmbeddingStore::new(&path);
    store.put(record("a", vec![0.5, 0.5])).await.unwrap();
    store.put(record("b", vec![1.0, 0.0])).await.unwrap();
    assert!(store.delete("b").await.unwrap());

    let reopened = JsonFileEmbeddingStore::new(&path);
    let all = reopened.list_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].entity_id, "a");
    assert_eq!(all[0].embedding, vec![0.5, 0.5]);
    assert_eq!(all[0].content_hash.as_deref(), Some("hash-a"));
    assert!(!path.with_extension("json.tmp").exists());
}

#[tokio::test]
async fn test_file_store_reads_legacy_records() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("embeddings.json");
    let legacy = r#"[{
        "entityId": "old",
        "embedding": [0.1, 0.2],
        "model": "legacy-model",
        "generatedAt": "2024-01-01T00:00:00Z"
    }]"#;
    tokio::fs::write(&path, legacy).await.unwrap();

    let got = JsonFileEmbeddingStore::new(&path)
        .get("old")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(got.schema_version, 1);
    assert!(got.content_hash.is_none());
    assert_eq!(got.model, "legacy-model");
}

#[tokio::test]
async fn test_file_store_malformed() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("embeddings.json");
    tokio::fs::write(&path, b"[{").await.unwrap();

    let err = JsonFileEmbeddingStore::new(&path).get("a").await.unwrap_err();
    assert!(matches!(err, StoreError::Serialization(_)));
}

#[tokio::test]
async fn test_file_store_failed_put_leaves_cache_unchanged() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("embeddings.json");
    let tmp = path.with_extension("json.tmp");
    tokio::fs::create_dir(&tmp).await.unwrap();
    let store = JsonFileEmbeddingStore::new(&path);

    assert!(store.put(record("a", vec![1.0])).await.is_err());
    assert!(store.get("a").await.unwrap().is_none());
    assert!(store.list_all().await.unwrap().is_empty());
    assert!(JsonFileEmbeddingStore::new(&path).get("a").await.unwrap().is_none());

    tokio::fs::remove_dir(&tmp).await.unwrap();
    store.put(record("a", vec![1.0])).await.unwrap();
    assert!(JsonFileEmbeddingStore::new(&path).get("a").await.unwrap().is_some());
}

#[tokio::test]
async fn test_file_store_failed_delete_keeps_record() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("embeddings.json");
    let tmp = path.with_extension("json.tmp");
    let store = JsonFileEmbeddingStore::new(&path);
    store.put(record("a", vec![1.0])).await.unwrap();
    tokio::fs::create_dir(&tmp).await.unwrap();

    assert!(store.delete("a").await.is_err());
    assert!(store.get("a").await.unwrap().is_some());
    assert!(JsonFileEmbeddingStore::new(&path).get("a").await.unwrap().is_some());

    tokio::fs::remove_dir(&tmp).await.unwrap();
    assert!(store.delete("a").await.unwrap());
    assert!(JsonFileEmbeddingStore::new(&path).get("a").await.unwrap().is_none());
}

#[tokio::test]
async fn test_mock_store_failure_mode() {
    let store = MockEmbeddingStore::new();
    store.put(record("a", vec![1.0])).await.unwrap();
    store.set_failing(true);

    let err = store.get("a").await.unwrap_err();
    assert!(matches!(err, StoreError::Unavailable { .. }));
    assert_eq!(store.read_count(), 1);

    store.set_failing(false);
    assert!(store.get("a").await.unwrap().is_some());
}
