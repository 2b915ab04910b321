//! Flow strategy: the editable plan of a flow before any copy is generated.

use serde::{Deserialize, Serialize};

use crate::brand::{BrandProfile, ClientSummary};
use crate::error::CoreError;
use crate::flow_type::FlowType;

/// Maximum length of the operator-supplied offer text.
pub const MAX_OFFER_LENGTH: usize = 500;

/// The plan for one email of a flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailStrategy {
    pub email_number: u32,
    pub day: u32,
    pub theme: String,
    pub focus: String,
    pub key_message: String,
    #[serde(default)]
    pub products: String,
    pub has_offer: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer_type: Option<String>,
}

/// The plan for a whole flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowStrategy {
    pub flow_type: FlowType,
    pub email_count: u32,
    pub offer: String,
    pub client: ClientSummary,
    #[serde(default)]
    pub scraped_insights: Vec<String>,
    pub email_strategies: Vec<EmailStrategy>,
}

/// Build a strategy from operator inputs.
///
/// `email_count` is capped at the size of the flow type's catalogue; a
/// request for zero emails is rejected.
pub fn build_strategy(
    flow_type: FlowType,
    email_count: u32,
    offer: &str,
    client: &BrandProfile,
    insights: Vec<String>,
) -> Result<FlowStrategy, CoreError> {
    if email_count == 0 {
        return Err(CoreError::Validation(
            "emailCount must be at least 1".to_string(),
        ));
    }
    validate_offer(offer)?;

    let templates = flow_type.templates();
    let count = (email_count as usize).min(templates.len());
    let brand = client.display_name();

    let email_strategies: Vec<EmailStrategy> = templates[..count]
        .iter()
        .zip(1u32..)
        .map(|(template, number)| template.render(number, brand, offer.trim()))
        .collect();

    Ok(FlowStrategy {
        flow_type,
        email_count: email_strategies.len() as u32,
        offer: offer.trim().to_string(),
        client: client.summary(),
        scraped_insights: insights,
        email_strategies,
    })
}

/// Build a strategy from a wire tag; the tag is checked before anything else.
pub fn build_strategy_from_tag(
    flow_type: &str,
    email_count: u32,
    offer: &str,
    client: &BrandProfile,
    insights: Vec<String>,
) -> Result<FlowStrategy, CoreError> {
    let flow_type: FlowType = flow_type.parse()?;
    build_strategy(flow_type, email_count, offer, client, insights)
}

fn validate_offer(offer: &str) -> Result<(), CoreError> {
    if offer.trim().is_empty() {
        return Err(CoreError::Validation("offer must not be empty".to_string()));
    }
    if offer.len() > MAX_OFFER_LENGTH {
        return Err(CoreError::Validation(format!(
            "offer exceeds maximum length of {MAX_OFFER_LENGTH} characters (got {})",
            offer.len()
        )));
    }
    Ok(())
}

impl FlowStrategy {
    /// Check a strategy that came back from the operator.
    ///
    /// Operators may edit themes and focuses but the numbering must stay
    /// contiguous and 1-based, and the count must not exceed the catalogue.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.email_strategies.is_empty() {
            return Err(CoreError::Validation(
                "strategy must contain at least one email".to_string(),
            ));
        }
        if self.email_strategies.len() > self.flow_type.templates().len() {
            return Err(CoreError::Validation(format!(
                "{} flows have at most {} emails (got {})",
                self.flow_type,
                self.flow_type.templates().len(),
                self.email_strategies.len()
            )));
        }
        if self.email_count as usize != self.email_strategies.len() {
            return Err(CoreError::Validation(format!(
                "emailCount {} does not match {} email strategies",
                self.email_count,
                self.email_strategies.len()
            )));
        }
        for (index, entry) in self.email_strategies.iter().enumerate() {
            if entry.email_number as usize != index + 1 {
                return Err(CoreError::Validation(format!(
                    "email at position {} is numbered {}",
                    index + 1,
                    entry.email_number
                )));
            }
            if entry.theme.trim().is_empty() || entry.focus.trim().is_empty() {
                return Err(CoreError::Validation(format!(
                    "email {} needs a theme and a focus",
                    entry.email_number
                )));
            }
        }
        validate_offer(&self.offer)
    }
}
