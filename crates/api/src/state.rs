use std::sync::Arc;

use copyforge_airtable::AirtableApi;
use copyforge_db::store::CopyStore;
use copyforge_llm::TextGenerator;
use copyforge_pipeline::{CopyGenerator, FlowRecordBuilder, ScrapeError, Sequencer, WebsiteScraper};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: inner data is behind `Arc` or is already `Clone`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: copyforge_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Shareable copy and flow records.
    pub store: Arc<dyn CopyStore>,
    /// Single-draft generation (campaign copy, revisions).
    pub generator: CopyGenerator,
    /// Whole-flow generation.
    pub sequencer: Arc<Sequencer>,
    /// Persists finished flows and copies.
    pub records: Arc<FlowRecordBuilder>,
    /// Campaign tracker client; `None` when not configured.
    pub airtable: Option<Arc<AirtableApi>>,
    /// Client website fetcher.
    pub scraper: Arc<WebsiteScraper>,
}

impl AppState {
    /// Wire the pipeline services around the given collaborators.
    pub fn new(
        pool: copyforge_db::DbPool,
        config: ServerConfig,
        store: Arc<dyn CopyStore>,
        text_generator: Arc<dyn TextGenerator>,
    ) -> Result<Self, ScrapeError> {
        let generator = CopyGenerator::new(text_generator);
        let sequencer = Sequencer::new(generator.clone(), config.generation_concurrency);
        let records = FlowRecordBuilder::new(Arc::clone(&store), config.share_base_url.clone());
        let airtable = config
            .airtable
            .clone()
            .map(|c| Arc::new(AirtableApi::new(c)));
        let scraper = WebsiteScraper::new(config.scrape_timeout)?;

        Ok(Self {
            pool,
            config: Arc::new(config),
            store,
            generator,
            sequencer: Arc::new(sequencer),
            records: Arc::new(records),
            airtable,
            scraper: Arc::new(scraper),
        })
    }

    /// Tracker client, or a 503-class error when the integration is disabled.
    pub fn airtable(&self) -> Result<&AirtableApi, crate::error::AppError> {
        self.airtable
            .as_deref()
            .ok_or(crate::error::AppError::NotConfigured("Airtable"))
    }
}
