//! Packages finished drafts into shareable stored records.

use std::sync::Arc;

use copyforge_core::blocks::CopyData;
use copyforge_core::error::CoreError;
use copyforge_core::flow::{Flow, GeneratedEmail};
use copyforge_core::ids::generate_record_id;
use copyforge_core::records::{SavedCopy, StoredRecord};
use copyforge_core::strategy::FlowStrategy;
use copyforge_db::store::{CopyStore, StoreError};
use serde::Deserialize;

/// Attempts at drawing an unused id before giving up.
const MAX_ID_ATTEMPTS: usize = 5;

/// Errors from finalizing a record.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A persisted flow plus its shareable link.
#[derive(Debug, Clone)]
pub struct FinalizedFlow {
    pub flow: Flow,
    pub shareable_url: String,
}

/// A persisted copy plus its shareable link.
#[derive(Debug, Clone)]
pub struct FinalizedCopy {
    pub copy: SavedCopy,
    pub shareable_url: String,
}

/// Inputs for [`FlowRecordBuilder::finalize_flow`].
#[derive(Debug, Clone)]
pub struct FlowDraft {
    /// Reusing an id replaces the stored record, making retries idempotent.
    pub id: Option<String>,
    pub flow_name: Option<String>,
    pub strategy: FlowStrategy,
    pub emails: Vec<GeneratedEmail>,
}

/// Editable parts of a stored flow.
#[derive(Debug, Clone, Deserialize)]
pub struct FlowEdit {
    #[serde(default, alias = "flowName")]
    pub flow_name: Option<String>,
    pub emails: Vec<GeneratedEmail>,
}

/// Emails must pair one-to-one with the strategy entries, in send order.
fn check_emails(strategy: &FlowStrategy, emails: &[GeneratedEmail]) -> Result<(), CoreError> {
    if emails.is_empty() {
        return Err(CoreError::Validation("flow has no emails".to_string()));
    }
    if emails.len() != strategy.email_strategies.len() {
        return Err(CoreError::Validation(format!(
            "flow has {} emails but its strategy plans {}",
            emails.len(),
            strategy.email_strategies.len()
        )));
    }
    for (email, entry) in emails.iter().zip(&strategy.email_strategies) {
        if email.email_number != entry.email_number {
            return Err(CoreError::Validation(format!(
                "email at position {} is numbered {}",
                entry.email_number, email.email_number
            )));
        }
    }
    Ok(())
}

pub struct FlowRecordBuilder {
    store: Arc<dyn CopyStore>,
    share_base_url: String,
}

impl FlowRecordBuilder {
    pub fn new(store: Arc<dyn CopyStore>, share_base_url: impl Into<String>) -> Self {
        Self {
            store,
            share_base_url: share_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn flow_url(&self, id: &str) -> String {
        format!("{}/flows/copy/{id}", self.share_base_url)
    }

    pub fn copy_url(&self, id: &str) -> String {
        format!("{}/copy/{id}", self.share_base_url)
    }

    /// Draw a fresh id that is not yet in the store.
    async fn fresh_id(&self, prefix: &str) -> Result<String, RecordError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = generate_record_id(prefix);
            if !self.store.contains(&id).await? {
                return Ok(id);
            }
            tracing::warn!(id = %id, "Generated record id already exists, drawing again");
        }
        Err(CoreError::Conflict("could not allocate an unused record id".to_string()).into())
    }

    async fn resolve_id(&self, id: Option<String>, prefix: &str) -> Result<String, RecordError> {
        match id.map(|i| i.trim().to_string()).filter(|i| !i.is_empty()) {
            Some(id) => Ok(id),
            None => self.fresh_id(prefix).await,
        }
    }

    /// Persist a completed flow generation.
    pub async fn finalize_flow(
        &self,
        draft: FlowDraft,
        client: &str,
    ) -> Result<FinalizedFlow, RecordError> {
        draft.strategy.validate()?;
        check_emails(&draft.strategy, &draft.emails)?;

        let reused = draft.id.is_some();
        let id = self.resolve_id(draft.id, "flow").await?;
        let now = chrono::Utc::now();

        let created_at = if reused {
            match self.store.get(&id).await? {
                Some(StoredRecord::Flow(existing)) => Some(existing.created_at),
                Some(StoredRecord::Copy(_)) => {
                    return Err(CoreError::Conflict(format!(
                        "record {id} is a saved copy, not a flow"
                    ))
                    .into());
                }
                None => None,
            }
        } else {
            None
        };

        let mut flow = Flow::assemble(
            id.clone(),
            draft.flow_name,
            client,
            draft.strategy,
            draft.emails,
            now,
        );
        if let Some(created_at) = created_at {
            flow.created_at = created_at;
        }

        self.store.put(&id, StoredRecord::Flow(flow.clone())).await?;
        tracing::info!(
            flow_id = %id,
            emails = flow.email_count,
            fallbacks = flow.fallback_count(),
            "Flow finalized"
        );

        Ok(FinalizedFlow {
            shareable_url: self.flow_url(&id),
            flow,
        })
    }

    /// Apply an operator edit to a stored flow, keeping its identity,
    /// strategy and creation time.
    pub async fn update_flow(&self, id: &str, edit: FlowEdit) -> Result<Flow, RecordError> {
        let mut flow = self
            .store
            .get(id)
            .await?
            .and_then(StoredRecord::into_flow)
            .ok_or_else(|| CoreError::NotFound {
                entity: "Flow",
                id: id.to_string(),
            })?;

        check_emails(&flow.strategy, &edit.emails)?;

        if let Some(name) = edit.flow_name.filter(|n| !n.trim().is_empty()) {
            flow.flow_name = name;
        }
        flow.emails = edit.emails;
        flow.updated_at = chrono::Utc::now();

        self.store.put(id, StoredRecord::Flow(flow.clone())).await?;
        tracing::info!(flow_id = %id, "Flow updated");
        Ok(flow)
    }

    /// Persist a single-campaign draft.
    pub async fn save_copy(
        &self,
        copy_data: CopyData,
        client: &str,
        campaign_name: &str,
        airtable_record_id: Option<String>,
    ) -> Result<FinalizedCopy, RecordError> {
        if copy_data.subject_lines.is_empty() && copy_data.email_blocks.is_empty() {
            return Err(CoreError::Validation("copy has no content".to_string()).into());
        }
        let id = self.fresh_id("copy").await?;
        let now = chrono::Utc::now();
        let copy = SavedCopy {
            id: id.clone(),
            client: client.to_string(),
            campaign_name: campaign_name.to_string(),
            copy_data,
            airtable_record_id,
            created_at: now,
            updated_at: now,
        };
        self.store.put(&id, StoredRecord::Copy(copy.clone())).await?;
        tracing::info!(copy_id = %id, client, "Copy saved");
        Ok(FinalizedCopy {
            shareable_url: self.copy_url(&id),
            copy,
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use copyforge_core::brand::BrandProfile;
    use copyforge_core::flow_type::FlowType;
    use copyforge_core::records::RecordKind;
    use copyforge_core::strategy::build_strategy;
    use copyforge_db::store::{of_kind, MemoryStore};

    use super::*;

    fn draft(id: Option<&str>) -> FlowDraft {
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
        FlowDraft {
            id: id.map(str::to_string),
            flow_name: None,
            strategy,
            emails,
        }
    }

    fn builder(store: Arc<MemoryStore>) -> FlowRecordBuilder {
        FlowRecordBuilder::new(store, "https://copy.example.com/")
    }

    #[tokio::test]
    async fn finalize_stores_flow_and_builds_url() {
        let store = Arc::new(MemoryStore::new());
        let done = builder(Arc::clone(&store))
            .finalize_flow(draft(None), "Acme")
            .await
            .unwrap();

        assert!(done.flow.id.starts_with("flow_"));
        assert_eq!(
            done.shareable_url,
            format!("https://copy.example.com/flows/copy/{}", done.flow.id)
        );
        assert_eq!(done.flow.flow_name, "Acme - Welcome Series");
        assert!(store.get(&done.flow.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn distinct_ids_produce_distinct_records() {
        let store = Arc::new(MemoryStore::new());
        let b = builder(Arc::clone(&store));
        let first = b.finalize_flow(draft(None), "Acme").await.unwrap();
        let second = b.finalize_flow(draft(None), "Acme").await.unwrap();
        assert_ne!(first.flow.id, second.flow.id);
        assert_eq!(store.list(&of_kind(RecordKind::Flow)).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn same_id_is_idempotent() {
        let store = Arc::new(MemoryStore::new());
        let b = builder(Arc::clone(&store));
        let first = b.finalize_flow(draft(Some("flow_fixed")), "Acme").await.unwrap();
        let second = b.finalize_flow(draft(Some("flow_fixed")), "Acme").await.unwrap();
        assert_eq!(store.len().await, 1);
        assert_eq!(first.flow.created_at, second.flow.created_at);
    }

    #[tokio::test]
    async fn email_count_mismatch_rejected() {
        let store = Arc::new(MemoryStore::new());
        let mut d = draft(None);
        d.emails.pop();
        let err = builder(store).finalize_flow(d, "Acme").await.unwrap_err();
        assert_matches!(err, RecordError::Core(CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn out_of_order_emails_rejected() {
        let store = Arc::new(MemoryStore::new());
        let mut d = draft(None);
        d.emails.swap(0, 1);
        let err = builder(Arc::clone(&store)).finalize_flow(d, "Acme").await.unwrap_err();
        assert_matches!(err, RecordError::Core(CoreError::Validation(_)));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn reused_copy_id_is_a_conflict() {
        let store = Arc::new(MemoryStore::new());
        let b = builder(Arc::clone(&store));
        let saved = b
            .save_copy(
                CopyData {
                    subject_lines: vec!["Hi".into()],
                    ..Default::default()
                },
                "Acme",
                "Spring Sale",
                None,
            )
            .await
            .unwrap();

        let err = b
            .finalize_flow(draft(Some(saved.copy.id.as_str())), "Acme")
            .await
            .unwrap_err();
        assert_matches!(err, RecordError::Core(CoreError::Conflict(_)));

        let kept = store.get(&saved.copy.id).await.unwrap().unwrap();
        assert_eq!(kept.kind(), RecordKind::Copy);
    }

    #[tokio::test]
    async fn update_must_keep_strategy_shape() {
        let store = Arc::new(MemoryStore::new());
        let b = builder(Arc::clone(&store));
        let done = b.finalize_flow(draft(None), "Acme").await.unwrap();

        let mut fewer = done.flow.emails.clone();
        fewer.pop();
        let err = b
            .update_flow(&done.flow.id, FlowEdit { flow_name: None, emails: fewer })
            .await
            .unwrap_err();
        assert_matches!(err, RecordError::Core(CoreError::Validation(_)));

        let mut swapped = done.flow.emails.clone();
        swapped.swap(0, 1);
        let err = b
            .update_flow(&done.flow.id, FlowEdit { flow_name: None, emails: swapped })
            .await
            .unwrap_err();
        assert_matches!(err, RecordError::Core(CoreError::Validation(_)));

        let stored = store.get(&done.flow.id).await.unwrap().unwrap().into_flow().unwrap();
        assert_eq!(stored.emails, done.flow.emails);
    }

    #[tokio::test]
    async fn update_missing_flow_is_not_found() {
        let store = Arc::new(MemoryStore::new());
        let b = builder(Arc::clone(&store));
        let done = b.finalize_flow(draft(None), "Acme").await.unwrap();
        let edit = FlowEdit {
            flow_name: None,
            emails: done.flow.emails,
        };
        let err = b.update_flow("flow_missing", edit).await.unwrap_err();
        assert_matches!(err, RecordError::Core(CoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn update_keeps_identity_and_replaces_emails() {
        let store = Arc::new(MemoryStore::new());
        let b = builder(Arc::clone(&store));
        let done = b.finalize_flow(draft(None), "Acme").await.unwrap();

        let mut emails = done.flow.emails.clone();
        emails[0].copy_data.subject_lines = vec!["Edited subject".into()];
        let edit = FlowEdit {
            flow_name: Some("Renamed".into()),
            emails,
        };

        let updated = b.update_flow(&done.flow.id, edit).await.unwrap();
        assert_eq!(updated.flow_name, "Renamed");
        assert_eq!(updated.client, "Acme");
        assert_eq!(updated.created_at, done.flow.created_at);
        assert_eq!(updated.emails[0].copy_data.subject_lines, ["Edited subject"]);
    }

    #[tokio::test]
    async fn save_copy_is_listed_as_copy() {
        let store = Arc::new(MemoryStore::new());
        let saved = builder(Arc::clone(&store))
            .save_copy(
                CopyData {
                    subject_lines: vec!["Hi".into()],
                    ..Default::default()
                },
                "Acme",
                "Spring Sale",
                None,
            )
            .await
            .unwrap();
        assert!(saved.shareable_url.ends_with(&format!("/copy/{}", saved.copy.id)));
        assert_eq!(store.list(&of_kind(RecordKind::Copy)).await.unwrap().len(), 1);
    }
}
