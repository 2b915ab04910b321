//! Generated emails and the persisted flow aggregate.

use serde::{Deserialize, Serialize};

use crate::blocks::CopyData;
use crate::flow_type::FlowType;
use crate::strategy::{EmailStrategy, FlowStrategy};
use crate::types::Timestamp;

/// One email of a generated flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedEmail {
    pub email_number: u32,
    pub day: u32,
    pub theme: String,
    pub strategy: EmailStrategy,
    pub copy_data: CopyData,
    pub has_offer: bool,
    /// Set when the draft is a fallback substituted for a failed generation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GeneratedEmail {
    pub fn generated(strategy: &EmailStrategy, copy_data: CopyData) -> Self {
        Self {
            email_number: strategy.email_number,
            day: strategy.day,
            theme: strategy.theme.clone(),
            strategy: strategy.clone(),
            copy_data,
            has_offer: strategy.has_offer,
            error: None,
        }
    }

    /// Deterministic stand-in for an email whose generation failed.
    pub fn fallback(strategy: &EmailStrategy, error: impl Into<String>) -> Self {
        let mut error = error.into();
        if error.trim().is_empty() {
            error = "generation failed".to_string();
        }
        Self {
            error: Some(error),
            ..Self::generated(strategy, CopyData::fallback(strategy))
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.error.is_some()
    }
}

/// Progress of a running flow generation, reported after each email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowProgress {
    pub completed: u32,
    pub total: u32,
    pub email_number: u32,
    pub fallback: bool,
}

/// A persisted, shareable flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flow {
    pub id: String,
    pub flow_name: String,
    /// Client display name; not a live relationship.
    pub client: String,
    pub flow_type: FlowType,
    pub email_count: u32,
    pub offer: String,
    pub emails: Vec<GeneratedEmail>,
    pub strategy: FlowStrategy,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Flow {
    /// Default name, e.g. `"Acme - Welcome Series"`.
    pub fn default_name(client: &str, flow_type: FlowType) -> String {
        format!("{client} - {}", flow_type.label())
    }

    /// Assemble a flow from a completed generation run.
    pub fn assemble(
        id: String,
        flow_name: Option<String>,
        client: &str,
        strategy: FlowStrategy,
        emails: Vec<GeneratedEmail>,
        now: Timestamp,
    ) -> Self {
        let flow_name = flow_name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| Self::default_name(client, strategy.flow_type));
        Self {
            id,
            flow_name,
            client: client.to_string(),
            flow_type: strategy.flow_type,
            email_count: emails.len() as u32,
            offer: strategy.offer.clone(),
            emails,
            strategy,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn fallback_count(&self) -> usize {
        self.emails.iter().filter(|e| e.is_fallback()).count()
    }
}
