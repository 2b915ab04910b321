use std::path::PathBuf;
use std::time::Duration;

use copyforge_airtable::AirtableConfig;
use copyforge_llm::LlmConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// Timeout in seconds for routes that never call the language model
    /// (default: `30`).
    pub request_timeout_secs: u64,
    /// Timeout in seconds for model-bound routes (default: `300`). A flow
    /// makes one model call per email, so this sits well above
    /// `LLM_TIMEOUT_SECS`.
    pub generation_timeout_secs: u64,
    /// Location of the shareable record file.
    pub copy_store_path: PathBuf,
    /// Prefix for shareable links handed back to the operator.
    pub share_base_url: String,
    /// Generation calls in flight per flow (default: `3`).
    pub generation_concurrency: usize,
    /// Timeout for fetching a client website.
    pub scrape_timeout: Duration,
    /// Language model client settings.
    pub llm: LlmConfig,
    /// Campaign tracker settings; `None` disables the integration.
    pub airtable: Option<AirtableConfig>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                  |
    /// |--------------------------|--------------------------|
    /// | `HOST`                   | `0.0.0.0`                |
    /// | `PORT`                   | `3000`                   |
    /// | `CORS_ORIGINS`           | `http://localhost:5173`  |
    /// | `REQUEST_TIMEOUT_SECS`   | `30`                     |
    /// | `GENERATION_TIMEOUT_SECS`| `300`                    |
    /// | `COPY_STORE_PATH`        | `data/saved-copies.json` |
    /// | `SHARE_BASE_URL`         | `http://localhost:5173`  |
    /// | `GENERATION_CONCURRENCY` | `3`                      |
    /// | `SCRAPE_TIMEOUT_SECS`    | `15`                     |
    ///
    /// `LLM_*` and `AIRTABLE_*` variables are read by [`LlmConfig::from_env`]
    /// and [`AirtableConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let generation_timeout_secs: u64 = std::env::var("GENERATION_TIMEOUT_SECS")
            .unwrap_or_else(|_| "300".into())
            .parse()
            .expect("GENERATION_TIMEOUT_SECS must be a valid u64");

        let copy_store_path = PathBuf::from(
            std::env::var("COPY_STORE_PATH").unwrap_or_else(|_| "data/saved-copies.json".into()),
        );

        let share_base_url = std::env::var("SHARE_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:5173".into());

        let generation_concurrency: usize = std::env::var("GENERATION_CONCURRENCY")
            .unwrap_or_else(|_| "3".into())
            .parse()
            .expect("GENERATION_CONCURRENCY must be a valid usize");

        let scrape_timeout_secs: u64 = std::env::var("SCRAPE_TIMEOUT_SECS")
            .unwrap_or_else(|_| "15".into())
            .parse()
            .expect("SCRAPE_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            generation_timeout_secs,
            copy_store_path,
            share_base_url,
            generation_concurrency,
            scrape_timeout: Duration::from_secs(scrape_timeout_secs),
            llm: LlmConfig::from_env(),
            airtable: AirtableConfig::from_env(),
        }
    }
}
