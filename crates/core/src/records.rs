//! Records kept in the shareable copy store.
//!
//! Single-campaign copies and whole flows share one store and are told
//! apart by the `type` field.

use serde::{Deserialize, Serialize};

use crate::blocks::CopyData;
use crate::flow::Flow;
use crate::types::Timestamp;

/// A saved single-campaign draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedCopy {
    pub id: String,
    pub client: String,
    pub campaign_name: String,
    pub copy_data: CopyData,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airtable_record_id: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Discriminator of a [`StoredRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Copy,
    Flow,
}

/// Anything the copy store holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StoredRecord {
    Copy(SavedCopy),
    Flow(Flow),
}

impl StoredRecord {
    pub fn id(&self) -> &str {
        match self {
            StoredRecord::Copy(c) => &c.id,
            StoredRecord::Flow(f) => &f.id,
        }
    }

    pub fn kind(&self) -> RecordKind {
        match self {
            StoredRecord::Copy(_) => RecordKind::Copy,
            StoredRecord::Flow(_) => RecordKind::Flow,
        }
    }

    pub fn created_at(&self) -> Timestamp {
        match self {
            StoredRecord::Copy(c) => c.created_at,
            StoredRecord::Flow(f) => f.created_at,
        }
    }

    pub fn into_flow(self) -> Option<Flow> {
        match self {
            StoredRecord::Flow(f) => Some(f),
            StoredRecord::Copy(_) => None,
        }
    }

    pub fn into_copy(self) -> Option<SavedCopy> {
        match self {
            StoredRecord::Copy(c) => Some(c),
            StoredRecord::Flow(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_record_is_tagged() {
        let now = chrono::Utc::now();
        let record = StoredRecord::Copy(SavedCopy {
            id: "copy_1".into(),
            client: "Acme".into(),
            campaign_name: "Spring Sale".into(),
            copy_data: CopyData::default(),
            airtable_record_id: None,
            created_at: now,
            updated_at: now,
        });
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "copy");
        assert_eq!(json["campaign_name"], "Spring Sale");

        let back: StoredRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back.kind(), RecordKind::Copy);
        assert_eq!(back.id(), "copy_1");
    }
}
