//! Integration tests for the shareable record stores.
//!
//! The JSON file backend is exercised against a temporary directory; the
//! same behavioural checks run against the in-memory backend.

use assert_matches::assert_matches;
use copyforge_core::blocks::CopyData;
use copyforge_core::brand::BrandProfile;
use copyforge_core::flow::{Flow, GeneratedEmail};
use copyforge_core::flow_type::FlowType;
use copyforge_core::records::{RecordKind, SavedCopy, StoredRecord};
use copyforge_core::strategy::build_strategy;
use copyforge_db::store::{of_kind, CopyStore, JsonFileStore, MemoryStore, StoreError};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn flow_record(id: &str) -> StoredRecord {
    let brand = BrandProfile {
        name: "Acme".into(),
        ..Default::default()
    };
    let strategy = build_strategy(FlowType::Welcome, 2, "10% off", &brand, vec![]).unwrap();
    let emails = strategy
        .email_strategies
        .iter()
        .map(|e| GeneratedEmail::generated(e, CopyData::fallback(e)))
        .collect();
    StoredRecord::Flow(Flow::assemble(
        id.to_string(),
        None,
        "Acme",
        strategy,
        emails,
        chrono::Utc::now(),
    ))
}

fn copy_record(id: &str) -> StoredRecord {
    let now = chrono::Utc::now();
    StoredRecord::Copy(SavedCopy {
        id: id.to_string(),
        client: "Acme".into(),
        campaign_name: "Spring Sale".into(),
        copy_data: CopyData::default(),
        airtable_record_id: None,
        created_at: now,
        updated_at: now,
    })
}

async fn exercise_store(store: &dyn CopyStore) {
    assert!(store.get("missing").await.unwrap().is_none());

    store.put("flow_a", flow_record("flow_a")).await.unwrap();
    store.put("copy_a", copy_record("copy_a")).await.unwrap();
    store.put("flow_b", flow_record("flow_b")).await.unwrap();

    let fetched = store.get("flow_a").await.unwrap().unwrap();
    assert_eq!(fetched.kind(), RecordKind::Flow);
    assert_eq!(fetched.id(), "flow_a");
    assert!(store.contains("copy_a").await.unwrap());

    let flows = store.list(&of_kind(RecordKind::Flow)).await.unwrap();
    let ids: Vec<&str> = flows.iter().map(StoredRecord::id).collect();
    assert_eq!(ids, ["flow_a", "flow_b"]);

    let copies = store.list(&of_kind(RecordKind::Copy)).await.unwrap();
    assert_eq!(copies.len(), 1);

    // Replacing under the same id keeps a single record.
    store.put("flow_a", flow_record("flow_a")).await.unwrap();
    assert_eq!(store.list(&|_| true).await.unwrap().len(), 3);
}

// ---------------------------------------------------------------------------
// JSON file backend
// ---------------------------------------------------------------------------

#[tokio::test]
async fn json_store_round_trips_records() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("saved-copies.json"));
    exercise_store(&store).await;
}

#[tokio::test]
async fn json_store_missing_file_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("absent.json"));
    assert!(store.list(&|_| true).await.unwrap().is_empty());
    assert!(store.get("anything").await.unwrap().is_none());
}

#[tokio::test]
async fn json_store_creates_parent_directory_on_write() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/data/saved-copies.json");
    let store = JsonFileStore::new(&path);
    store.put("copy_x", copy_record("copy_x")).await.unwrap();
    assert!(path.exists());
}

#[tokio::test]
async fn json_store_skips_malformed_entries_when_listing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saved-copies.json");
    let good = serde_json::to_value(copy_record("copy_ok")).unwrap();
    let raw = serde_json::json!({
        "copy_ok": good,
        "junk": {"type": "copy", "nothing": true},
    });
    std::fs::write(&path, raw.to_string()).unwrap();

    let store = JsonFileStore::new(&path);
    let listed = store.list(&|_| true).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_matches!(store.get("junk").await, Err(StoreError::Malformed { .. }));
}

#[tokio::test]
async fn json_store_concurrent_writes_are_not_lost() {
    let dir = tempfile::tempdir().unwrap();
    let store = std::sync::Arc::new(JsonFileStore::new(dir.path().join("saved-copies.json")));

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let store = std::sync::Arc::clone(&store);
            tokio::spawn(async move {
                let id = format!("copy_{i}");
                store.put(&id, copy_record(&id)).await.unwrap();
            })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(store.list(&|_| true).await.unwrap().len(), 10);
}

// ---------------------------------------------------------------------------
// In-memory backend
// ---------------------------------------------------------------------------

#[tokio::test]
async fn memory_store_round_trips_records() {
    let store = MemoryStore::new();
    exercise_store(&store).await;
    assert_eq!(store.len().await, 3);
}
