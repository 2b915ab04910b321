//! The generation step: one language model call per draft.

use std::sync::Arc;

use copyforge_core::blocks::CopyData;
use copyforge_core::brand::BrandProfile;
use copyforge_core::context::FlowContext;
use copyforge_core::flow::GeneratedEmail;
use copyforge_core::strategy::EmailStrategy;
use copyforge_llm::{CompletionRequest, TextGenerator};
use serde::Deserialize;

use crate::error::GenerationError;
use crate::parse::parse_copy_draft;
use crate::prompt;

/// Brief for a standalone campaign email.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignBrief {
    pub name: String,
    #[serde(default)]
    pub campaign_type: Option<String>,
    #[serde(default)]
    pub offer: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub send_date: Option<String>,
}

/// Issues generation requests and parses the drafts they return.
///
/// Errors propagate to the caller; fallback substitution is the
/// sequencer's job.
#[derive(Clone)]
pub struct CopyGenerator {
    generator: Arc<dyn TextGenerator>,
}

impl CopyGenerator {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    async fn draft(&self, prompt: String) -> Result<CopyData, GenerationError> {
        let request = CompletionRequest::new(prompt).with_system(prompt::SYSTEM_PROMPT);
        let text = self.generator.complete(&request).await?;
        parse_copy_draft(&text)
    }

    /// Draft one email of a flow.
    pub async fn generate_flow_email(
        &self,
        entry: &EmailStrategy,
        context: &FlowContext,
        brand: &BrandProfile,
        offer: &str,
        insights: &[String],
    ) -> Result<CopyData, GenerationError> {
        self.draft(prompt::flow_email_prompt(entry, context, brand, offer, insights))
            .await
    }

    /// Draft a standalone campaign email.
    pub async fn generate_campaign(
        &self,
        brief: &CampaignBrief,
        brand: &BrandProfile,
        insights: &[String],
    ) -> Result<CopyData, GenerationError> {
        self.draft(prompt::campaign_prompt(brief, brand, insights))
            .await
    }

    /// Regenerate one email of a flow, replacing only its copy.
    pub async fn revise_email(
        &self,
        email: &GeneratedEmail,
        context: &FlowContext,
        brand: &BrandProfile,
        offer: &str,
        insights: &[String],
        feedback: Option<&str>,
    ) -> Result<GeneratedEmail, GenerationError> {
        let copy_data = self
            .draft(prompt::revision_prompt(
                email, context, brand, offer, insights, feedback,
            ))
            .await?;
        Ok(GeneratedEmail {
            copy_data,
            error: None,
            ..email.clone()
        })
    }
}
