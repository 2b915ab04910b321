//! Shareable record storage.
//!
//! Copy and flow records are keyed by their opaque id. Handlers hold a
//! `dyn CopyStore`. [`JsonFileStore`] keeps the flat `saved-copies.json`
//! layout and [`MemoryStore`] backs tests.

mod json_file;
mod memory;

use async_trait::async_trait;
use copyforge_core::records::{RecordKind, StoredRecord};

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Errors from a copy store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// A record exists under the id but cannot be decoded.
    #[error("Stored record {id} is malformed: {reason}")]
    Malformed { id: String, reason: String },
}

/// Filter passed to [`CopyStore::list`].
pub type RecordFilter<'a> = &'a (dyn Fn(&StoredRecord) -> bool + Send + Sync);

/// Key-value storage for shareable records.
#[async_trait]
pub trait CopyStore: Send + Sync {
    async fn get(&self, id: &str) -> Result<Option<StoredRecord>, StoreError>;

    /// Insert or replace the record stored under `id`.
    async fn put(&self, id: &str, record: StoredRecord) -> Result<(), StoreError>;

    /// All records matching `filter`, in id order.
    async fn list(&self, filter: RecordFilter<'_>) -> Result<Vec<StoredRecord>, StoreError>;

    async fn contains(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.get(id).await?.is_some())
    }
}

/// Filter matching records of one kind.
pub fn of_kind(kind: RecordKind) -> impl Fn(&StoredRecord) -> bool + Send + Sync {
    move |record| record.kind() == kind
}
