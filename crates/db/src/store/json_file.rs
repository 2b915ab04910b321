//! Flat JSON file backend: one object mapping ids to records.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use copyforge_core::records::StoredRecord;
use serde_json::Value;
use tokio::sync::Mutex;

use super::{CopyStore, RecordFilter, StoreError};

type RawStore = BTreeMap<String, Value>;

/// File-backed store.
///
/// Writes are serialized behind one mutex and land atomically via a
/// temporary file and rename, so readers never observe a half-written
/// file. A missing file reads as an empty store.
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<RawStore, StoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) if text.trim().is_empty() => Ok(RawStore::new()),
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(RawStore::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, store: &RawStore) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, serde_json::to_vec_pretty(store)?).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl CopyStore for JsonFileStore {
    async fn get(&self, id: &str) -> Result<Option<StoredRecord>, StoreError> {
        let mut store = self.load().await?;
        store
            .remove(id)
            .map(|value| {
                serde_json::from_value(value).map_err(|e| StoreError::Malformed {
                    id: id.to_string(),
                    reason: e.to_string(),
                })
            })
            .transpose()
    }

    async fn put(&self, id: &str, record: StoredRecord) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut store = self.load().await?;
        store.insert(id.to_string(), serde_json::to_value(&record)?);
        self.save(&store).await?;
        tracing::debug!(id, path = %self.path.display(), "Stored record");
        Ok(())
    }

    async fn list(&self, filter: RecordFilter<'_>) -> Result<Vec<StoredRecord>, StoreError> {
        let store = self.load().await?;
        let mut records = Vec::new();
        for (id, value) in store {
            match serde_json::from_value::<StoredRecord>(value) {
                Ok(record) if filter(&record) => records.push(record),
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(id = %id, error = %e, "Skipping malformed stored record");
                }
            }
        }
        Ok(records)
    }
}
