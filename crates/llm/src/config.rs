use std::time::Duration;

const DEFAULT_API_URL: &str = "https://api.anthropic.com/v1/messages";
const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
const DEFAULT_MAX_TOKENS: u32 = 4000;
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Language model client configuration.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_url: String,
    /// Empty when unset; requests then fail with `LlmError::NotConfigured`.
    pub api_key: String,
    pub model: String,
    pub max_tokens: u32,
    /// Per-call timeout.
    pub timeout: Duration,
}

impl LlmConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var            | Default                                  |
    /// |--------------------|------------------------------------------|
    /// | `LLM_API_URL`      | `https://api.anthropic.com/v1/messages`  |
    /// | `LLM_API_KEY`      | empty                                    |
    /// | `LLM_MODEL`        | `claude-sonnet-4-20250514`               |
    /// | `LLM_MAX_TOKENS`   | `4000`                                   |
    /// | `LLM_TIMEOUT_SECS` | `120`                                    |
    pub fn from_env() -> Self {
        Self {
            api_url: std::env::var("LLM_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into()),
            api_key: std::env::var("LLM_API_KEY").unwrap_or_default(),
            model: std::env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into()),
            max_tokens: std::env::var("LLM_MAX_TOKENS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_TOKENS),
            timeout: Duration::from_secs(
                std::env::var("LLM_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            api_key: String::new(),
            model: DEFAULT_MODEL.into(),
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
