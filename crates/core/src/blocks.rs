//! Email content blocks and the generated copy draft.

use serde::{Deserialize, Serialize};

use crate::strategy::EmailStrategy;

/// Call to action used by fallback drafts.
pub const FALLBACK_CTA: &str = "Shop Now";

/// A text-bearing block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl TextBlock {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Default::default()
        }
    }
}

/// One product inside a collection block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionProduct {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// A block that groups several products.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionBlock {
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default)]
    pub products: Vec<CollectionProduct>,
}

/// A typed content unit. Order inside a draft is significant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EmailBlock {
    Header(TextBlock),
    Subheader(TextBlock),
    Body(TextBlock),
    Pic(TextBlock),
    Cta(TextBlock),
    Product(TextBlock),
    Collection(CollectionBlock),
}

impl EmailBlock {
    /// The wire tag of the block.
    pub fn kind(&self) -> &'static str {
        match self {
            EmailBlock::Header(_) => "header",
            EmailBlock::Subheader(_) => "subheader",
            EmailBlock::Body(_) => "body",
            EmailBlock::Pic(_) => "pic",
            EmailBlock::Cta(_) => "cta",
            EmailBlock::Product(_) => "product",
            EmailBlock::Collection(_) => "collection",
        }
    }

    pub fn content(&self) -> &str {
        match self {
            EmailBlock::Header(b)
            | EmailBlock::Subheader(b)
            | EmailBlock::Body(b)
            | EmailBlock::Pic(b)
            | EmailBlock::Cta(b)
            | EmailBlock::Product(b) => &b.content,
            EmailBlock::Collection(c) => &c.content,
        }
    }
}

/// A generated email draft.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CopyData {
    pub subject_lines: Vec<String>,
    pub preview_text: Vec<String>,
    pub email_blocks: Vec<EmailBlock>,
}

impl CopyData {
    /// Minimal three-block draft derived from an email plan.
    pub fn fallback(strategy: &EmailStrategy) -> Self {
        Self {
            subject_lines: vec![strategy.theme.clone()],
            preview_text: vec![strategy.focus.clone()],
            email_blocks: vec![
                EmailBlock::Header(TextBlock::new(strategy.theme.clone())),
                EmailBlock::Body(TextBlock::new(format!(
                    "{}. {}",
                    strategy.focus, strategy.key_message
                ))),
                EmailBlock::Cta(TextBlock::new(FALLBACK_CTA)),
            ],
        }
    }
}
