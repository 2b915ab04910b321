//! Handlers for single-campaign copy: generation and shareable records.

use axum::extract::{Path, State};
use axum::Json;
use copyforge_core::blocks::CopyData;
use copyforge_core::brand::BrandProfile;
use copyforge_core::error::CoreError;
use copyforge_core::records::{RecordKind, SavedCopy, StoredRecord};
use copyforge_core::validation::validate_name;
use copyforge_db::store::of_kind;
use copyforge_pipeline::generation::CampaignBrief;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::handlers::flow::{required, resolve_brand, website_insights};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateCopyRequest {
    pub client: Option<BrandProfile>,
    pub campaign: Option<serde_json::Value>,
    pub website_url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveCopyRequest {
    pub copy_data: Option<serde_json::Value>,
    pub client: Option<String>,
    pub campaign_name: Option<String>,
    pub airtable_record_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveCopyResponse {
    pub success: bool,
    pub shareable_url: String,
    pub copy_id: String,
    /// Whether the link was written back to the campaign tracker.
    pub airtable_updated: bool,
}

/// POST /api/v1/copy/generate
pub async fn generate(
    State(state): State<AppState>,
    AppJson(input): AppJson<GenerateCopyRequest>,
) -> AppResult<Json<DataResponse<CopyData>>> {
    let brief: CampaignBrief = required(input.campaign, "campaign")?;
    validate_name("campaign name", &brief.name)?;
    let brand = resolve_brand(&state, input.client).await?;

    let insights = website_insights(&state, input.website_url.as_deref(), &brand).await;
    let copy = state
        .generator
        .generate_campaign(&brief, &brand, &insights)
        .await?;

    tracing::info!(
        campaign = %brief.name,
        client = %brand.display_name(),
        blocks = copy.email_blocks.len(),
        "Campaign copy generated"
    );
    Ok(Json(DataResponse::new(copy)))
}

/// POST /api/v1/copy/save
///
/// When a tracker record id is given, the shareable link is written back to
/// it. A failed write-back does not fail the save.
pub async fn save(
    State(state): State<AppState>,
    AppJson(input): AppJson<SaveCopyRequest>,
) -> AppResult<Json<SaveCopyResponse>> {
    let copy_data: CopyData = required(input.copy_data, "copyData")?;
    let client = input
        .client
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("client is required".into()))?;
    let campaign_name = input
        .campaign_name
        .ok_or_else(|| AppError::BadRequest("campaignName is required".into()))?;
    validate_name("campaignName", &campaign_name)?;
    let airtable_record_id = input
        .airtable_record_id
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty());

    let saved = state
        .records
        .save_copy(
            copy_data,
            client.trim(),
            campaign_name.trim(),
            airtable_record_id.clone(),
        )
        .await?;

    let mut airtable_updated = false;
    if let Some(record_id) = airtable_record_id.as_deref() {
        match state.airtable.as_deref() {
            Some(api) => match api.set_copy_link(record_id, &saved.shareable_url).await {
                Ok(_) => airtable_updated = true,
                Err(e) => tracing::warn!(
                    record_id,
                    copy_id = %saved.copy.id,
                    error = %e,
                    "Failed to write copy link back to Airtable"
                ),
            },
            None => tracing::debug!(record_id, "Airtable not configured, skipping write-back"),
        }
    }

    Ok(Json(SaveCopyResponse {
        success: true,
        shareable_url: saved.shareable_url,
        copy_id: saved.copy.id,
        airtable_updated,
    }))
}

/// GET /api/v1/copy/saved
///
/// Newest first.
pub async fn list_saved(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<SavedCopy>>>> {
    let mut copies: Vec<SavedCopy> = state
        .store
        .list(&of_kind(RecordKind::Copy))
        .await?
        .into_iter()
        .filter_map(StoredRecord::into_copy)
        .collect();
    copies.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(Json(DataResponse::new(copies)))
}

/// GET /api/v1/copy/{id}
///
/// Returns the stored copy itself, without an envelope.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<SavedCopy>> {
    let copy = state
        .store
        .get(&id)
        .await?
        .and_then(StoredRecord::into_copy)
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Copy",
                id: id.clone(),
            })
        })?;
    Ok(Json(copy))
}
