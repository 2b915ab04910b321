//! The closed set of marketing flow types.
//!
//! Flow types arrive as strings in request bodies; [`FlowType::from_str`]
//! is the single place where an unsupported tag is rejected. Everything
//! downstream matches exhaustively on the enum.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A multi-email drip sequence kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowType {
    Welcome,
    AbandonedCheckout,
    BrowseAbandonment,
    PostPurchase,
    Winback,
}

impl FlowType {
    /// Every supported flow type, in picker order.
    pub const ALL: [FlowType; 5] = [
        FlowType::Welcome,
        FlowType::AbandonedCheckout,
        FlowType::BrowseAbandonment,
        FlowType::PostPurchase,
        FlowType::Winback,
    ];

    /// Wire tag, e.g. `"abandoned_checkout"`.
    pub fn as_str(self) -> &'static str {
        match self {
            FlowType::Welcome => "welcome",
            FlowType::AbandonedCheckout => "abandoned_checkout",
            FlowType::BrowseAbandonment => "browse_abandonment",
            FlowType::PostPurchase => "post_purchase",
            FlowType::Winback => "winback",
        }
    }

    /// Human-readable label used in flow names and prompts.
    pub fn label(self) -> &'static str {
        match self {
            FlowType::Welcome => "Welcome Series",
            FlowType::AbandonedCheckout => "Abandoned Checkout",
            FlowType::BrowseAbandonment => "Browse Abandonment",
            FlowType::PostPurchase => "Post-Purchase",
            FlowType::Winback => "Winback",
        }
    }
}

impl fmt::Display for FlowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlowType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FlowType::ALL
            .into_iter()
            .find(|t| t.as_str() == s.trim())
            .ok_or_else(|| CoreError::UnknownFlowType(s.to_string()))
    }
}
