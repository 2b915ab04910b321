//! Client entity model and DTOs.

use copyforge_core::brand::BrandProfile;
use copyforge_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A client row from the `clients` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Client {
    pub id: DbId,
    pub name: String,
    pub company: Option<String>,
    pub website: Option<String>,
    pub industry: Option<String>,
    pub brand_voice: Option<String>,
    pub target_audience: Option<String>,
    pub key_products: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Client {
    /// Snapshot of the brand facts used by the generation pipeline.
    pub fn brand_profile(&self) -> BrandProfile {
        BrandProfile {
            id: Some(self.id),
            name: self.name.clone(),
            company: self.company.clone(),
            website: self.website.clone(),
            industry: self.industry.clone(),
            brand_voice: self.brand_voice.clone(),
            target_audience: self.target_audience.clone(),
            key_products: self.key_products.clone(),
            notes: self.notes.clone(),
        }
    }
}

/// DTO for creating a new client.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateClient {
    pub name: String,
    pub company: Option<String>,
    pub website: Option<String>,
    pub industry: Option<String>,
    pub brand_voice: Option<String>,
    pub target_audience: Option<String>,
    pub key_products: Option<String>,
    pub notes: Option<String>,
}

/// DTO for updating an existing client. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateClient {
    pub name: Option<String>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub industry: Option<String>,
    pub brand_voice: Option<String>,
    pub target_audience: Option<String>,
    pub key_products: Option<String>,
    pub notes: Option<String>,
}
