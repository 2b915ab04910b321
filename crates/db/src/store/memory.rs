//! In-memory backend, used by tests and local experiments.

use std::collections::BTreeMap;

use async_trait::async_trait;
use copyforge_core::records::StoredRecord;
use tokio::sync::RwLock;

use super::{CopyStore, RecordFilter, StoreError};

#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<BTreeMap<String, StoredRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl CopyStore for MemoryStore {
    async fn get(&self, id: &str) -> Result<Option<StoredRecord>, StoreError> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn put(&self, id: &str, record: StoredRecord) -> Result<(), StoreError> {
        self.records.write().await.insert(id.to_string(), record);
        Ok(())
    }

    async fn list(&self, filter: RecordFilter<'_>) -> Result<Vec<StoredRecord>, StoreError> {
        Ok(self
            .records
            .read()
            .await
            .values()
            .filter(|&r| filter(r))
            .cloned()
            .collect())
    }
}
