//! Client note model and DTO.

use copyforge_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A note row from the `notes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Note {
    pub id: DbId,
    pub client_id: DbId,
    pub campaign_id: Option<DbId>,
    pub content: String,
    pub created_at: Timestamp,
}

/// DTO for creating a note. `client_id` comes from the URL path.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateNote {
    pub campaign_id: Option<DbId>,
    pub content: String,
}
