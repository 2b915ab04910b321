//! Text generation collaborator.
//!
//! The pipeline sees the hosted language model only through
//! [`TextGenerator`]: one prompt in, one text document out. No streaming
//! and no tool calls. [`MessagesClient`] is the production implementation.

pub mod client;
pub mod config;

use async_trait::async_trait;

pub use client::MessagesClient;
pub use config::LlmConfig;

/// Errors from a text generation backend.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service returned a non-2xx status code.
    #[error("Language model API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The service answered but produced no text.
    #[error("Language model returned no text content")]
    EmptyResponse,

    /// No credential is configured.
    #[error("Language model API key is not configured")]
    NotConfigured,
}

/// A single completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub system: Option<String>,
    pub prompt: String,
    /// Overrides the configured completion limit when set.
    pub max_tokens: Option<u32>,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            system: None,
            prompt: prompt.into(),
            max_tokens: None,
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }
}

/// One-shot text completion.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError>;
}
