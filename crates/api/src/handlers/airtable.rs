//! Handlers for the campaign tracker integration.

use axum::extract::{Path, State};
use axum::Json;
use copyforge_airtable::AirtableRecord;
use copyforge_core::validation::validate_url;
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CopyLinkRequest {
    pub url: String,
}

/// GET /api/v1/airtable/campaigns
pub async fn list_campaigns(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<AirtableRecord>>>> {
    let records = state.airtable()?.list_records().await?;
    Ok(Json(DataResponse::new(records)))
}

/// GET /api/v1/airtable/campaigns/{record_id}
pub async fn get_campaign(
    State(state): State<AppState>,
    Path(record_id): Path<String>,
) -> AppResult<Json<DataResponse<AirtableRecord>>> {
    let record = state.airtable()?.get_record(&record_id).await?;
    Ok(Json(DataResponse::new(record)))
}

/// PATCH /api/v1/airtable/campaigns/{record_id}/copy-link
pub async fn set_copy_link(
    State(state): State<AppState>,
    Path(record_id): Path<String>,
    AppJson(input): AppJson<CopyLinkRequest>,
) -> AppResult<Json<DataResponse<AirtableRecord>>> {
    let api = state.airtable()?;
    validate_url("url", &input.url)?;
    let record = api.set_copy_link(&record_id, input.url.trim()).await?;
    tracing::info!(record_id = %record_id, "Copy link written to Airtable");
    Ok(Json(DataResponse::new(record)))
}
