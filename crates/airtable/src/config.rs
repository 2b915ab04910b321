const DEFAULT_API_URL: &str = "https://api.airtable.com/v0";
const DEFAULT_TABLE: &str = "Campaigns";
const DEFAULT_COPY_LINK_FIELD: &str = "Copy Link";

/// Airtable connection settings.
#[derive(Debug, Clone)]
pub struct AirtableConfig {
    pub api_url: String,
    pub api_key: String,
    pub base_id: String,
    pub table: String,
    /// Field that receives the shareable copy URL.
    pub copy_link_field: String,
}

impl AirtableConfig {
    /// Load from `AIRTABLE_*` environment variables.
    ///
    /// Returns `None` unless both `AIRTABLE_API_KEY` and `AIRTABLE_BASE_ID`
    /// are set.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("AIRTABLE_API_KEY").ok().filter(|v| !v.is_empty())?;
        let base_id = std::env::var("AIRTABLE_BASE_ID").ok().filter(|v| !v.is_empty())?;
        Some(Self {
            api_url: std::env::var("AIRTABLE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into()),
            api_key,
            base_id,
            table: std::env::var("AIRTABLE_TABLE").unwrap_or_else(|_| DEFAULT_TABLE.into()),
            copy_link_field: std::env::var("AIRTABLE_COPY_LINK_FIELD")
                .unwrap_or_else(|_| DEFAULT_COPY_LINK_FIELD.into()),
        })
    }

    /// Base URL of the configured table.
    pub fn table_url(&self) -> String {
        format!("{}/{}/{}", self.api_url, self.base_id, self.table)
    }
}
