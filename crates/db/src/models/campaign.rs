//! Campaign entity model and DTOs.

use chrono::NaiveDate;
use copyforge_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A campaign row from the `campaigns` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Campaign {
    pub id: DbId,
    pub client_id: DbId,
    pub name: String,
    pub campaign_type: Option<String>,
    pub status: String,
    pub send_date: Option<NaiveDate>,
    pub offer: Option<String>,
    pub details: Option<String>,
    pub airtable_record_id: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a campaign. `client_id` comes from the URL path.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCampaign {
    pub name: String,
    pub campaign_type: Option<String>,
    /// Defaults to `draft` if omitted.
    pub status: Option<String>,
    pub send_date: Option<NaiveDate>,
    pub offer: Option<String>,
    pub details: Option<String>,
    pub airtable_record_id: Option<String>,
}

/// DTO for updating an existing campaign. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCampaign {
    pub name: Option<String>,
    pub campaign_type: Option<String>,
    pub status: Option<String>,
    pub send_date: Option<NaiveDate>,
    pub offer: Option<String>,
    pub details: Option<String>,
    pub airtable_record_id: Option<String>,
}
