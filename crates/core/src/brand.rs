//! Client brand data as seen by the generation pipeline.
//!
//! The pipeline never holds a live relationship to a client row. Requests
//! carry a [`BrandProfile`] snapshot, and persisted flows keep only the
//! display name.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// Brand facts injected into generation prompts.
///
/// Every field is optional on the wire because the UI may send a partial
/// client record; handlers reject a profile without a name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandProfile {
    #[serde(default)]
    pub id: Option<DbId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default, alias = "brand_voice")]
    pub brand_voice: Option<String>,
    #[serde(default, alias = "target_audience")]
    pub target_audience: Option<String>,
    #[serde(default, alias = "key_products")]
    pub key_products: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl BrandProfile {
    /// Name shown to readers: the company when set, otherwise the client name.
    pub fn display_name(&self) -> &str {
        self.company
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(&self.name)
    }

    pub fn summary(&self) -> ClientSummary {
        ClientSummary {
            id: self.id,
            name: self.name.clone(),
            company: self.company.clone(),
        }
    }
}

/// Display-only reference to a client, embedded in a strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientSummary {
    #[serde(default)]
    pub id: Option<DbId>,
    pub name: String,
    #[serde(default)]
    pub company: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_prefers_company() {
        let brand = BrandProfile {
            name: "Jane Doe".into(),
            company: Some("Acme Outdoors".into()),
            ..Default::default()
        };
        assert_eq!(brand.display_name(), "Acme Outdoors");
    }

    #[test]
    fn blank_company_falls_back_to_name() {
        let brand = BrandProfile {
            name: "Acme".into(),
            company: Some("  ".into()),
            ..Default::default()
        };
        assert_eq!(brand.display_name(), "Acme");
    }

    #[test]
    fn accepts_partial_snake_case_client_rows() {
        let brand: BrandProfile = serde_json::from_value(serde_json::json!({
            "name": "Acme",
            "brand_voice": "playful",
        }))
        .unwrap();
        assert_eq!(brand.brand_voice.as_deref(), Some("playful"));
        assert!(brand.website.is_none());
    }
}
