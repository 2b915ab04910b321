//! REST API client for the Airtable records endpoints.
//!
//! Wraps listing (with offset pagination), single-record retrieval and
//! single-field updates using [`reqwest`].

use serde::{Deserialize, Serialize};

use crate::config::AirtableConfig;

/// HTTP client for one Airtable table.
pub struct AirtableApi {
    client: reqwest::Client,
    config: AirtableConfig,
}

/// A row of the campaign table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirtableRecord {
    pub id: String,
    #[serde(default)]
    pub fields: serde_json::Map<String, serde_json::Value>,
    #[serde(rename = "createdTime", default, skip_serializing_if = "Option::is_none")]
    pub created_time: Option<String>,
}

/// One page of the list endpoint.
#[derive(Debug, Deserialize)]
struct ListPage {
    records: Vec<AirtableRecord>,
    /// Present while more pages remain.
    #[serde(default)]
    offset: Option<String>,
}

/// Errors from the Airtable REST API layer.
#[derive(Debug, thiserror::Error)]
pub enum AirtableApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Airtable returned a non-2xx status code.
    #[error("Airtable API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// Guard against a server that keeps returning an offset.
const MAX_PAGES: usize = 50;

impl AirtableApi {
    pub fn new(config: AirtableConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: AirtableConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &AirtableConfig {
        &self.config
    }

    /// List every record of the table, following pagination offsets.
    pub async fn list_records(&self) -> Result<Vec<AirtableRecord>, AirtableApiError> {
        let mut records = Vec::new();
        let mut offset: Option<String> = None;

        for _ in 0..MAX_PAGES {
            let mut request = self
                .client
                .get(self.config.table_url())
                .bearer_auth(&self.config.api_key);
            if let Some(offset) = &offset {
                request = request.query(&[("offset", offset)]);
            }

            let page: ListPage = Self::parse_response(request.send().await?).await?;
            records.extend(page.records);

            match page.offset {
                Some(next) => offset = Some(next),
                None => return Ok(records),
            }
        }

        tracing::warn!(
            pages = MAX_PAGES,
            records = records.len(),
            "Airtable pagination limit reached, returning partial list"
        );
        Ok(records)
    }

    /// Fetch a single record by id.
    pub async fn get_record(&self, record_id: &str) -> Result<AirtableRecord, AirtableApiError> {
        let response = self
            .client
            .get(format!("{}/{}", self.config.table_url(), record_id))
            .bearer_auth(&self.config.api_key)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Set one field on a record, leaving the others untouched.
    pub async fn update_field(
        &self,
        record_id: &str,
        field: &str,
        value: serde_json::Value,
    ) -> Result<AirtableRecord, AirtableApiError> {
        let mut fields = serde_json::Map::new();
        fields.insert(field.to_string(), value);

        let response = self
            .client
            .patch(format!("{}/{}", self.config.table_url(), record_id))
            .bearer_auth(&self.config.api_key)
            .json(&serde_json::json!({ "fields": fields }))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Write the shareable copy URL into the configured link field.
    pub async fn set_copy_link(
        &self,
        record_id: &str,
        url: &str,
    ) -> Result<AirtableRecord, AirtableApiError> {
        let field = self.config.copy_link_field.clone();
        self.update_field(record_id, &field, serde_json::Value::String(url.to_string()))
            .await
    }

    // ---- private helpers ----

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, AirtableApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(AirtableApiError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json::<T>().await?)
    }
}
