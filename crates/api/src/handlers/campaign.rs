//! Handlers for campaigns, nested under clients and addressed directly.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use copyforge_core::error::CoreError;
use copyforge_core::types::DbId;
use copyforge_core::validation::{validate_name, validate_optional_name};
use copyforge_db::models::campaign::{Campaign, CreateCampaign, UpdateCampaign};
use copyforge_db::repositories::CampaignRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::handlers::client;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Campaign",
        id: id.to_string(),
    })
}

/// GET /api/v1/clients/{id}/campaigns
pub async fn list_by_client(
    State(state): State<AppState>,
    Path(client_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Campaign>>>> {
    client::load(&state, client_id).await?;
    let campaigns = CampaignRepo::list_by_client(&state.pool, client_id).await?;
    Ok(Json(DataResponse::new(campaigns)))
}

/// POST /api/v1/clients/{id}/campaigns
pub async fn create(
    State(state): State<AppState>,
    Path(client_id): Path<DbId>,
    AppJson(input): AppJson<CreateCampaign>,
) -> AppResult<(StatusCode, Json<DataResponse<Campaign>>)> {
    validate_name("name", &input.name)?;
    client::load(&state, client_id).await?;

    let campaign = CampaignRepo::create(&state.pool, client_id, &input).await?;
    tracing::info!(campaign_id = campaign.id, client_id, "Campaign created");
    Ok((StatusCode::CREATED, Json(DataResponse::new(campaign))))
}

/// GET /api/v1/campaigns/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Campaign>>> {
    let campaign = CampaignRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse::new(campaign)))
}

/// PUT /api/v1/campaigns/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateCampaign>,
) -> AppResult<Json<DataResponse<Campaign>>> {
    validate_optional_name("name", input.name.as_deref())?;
    let campaign = CampaignRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse::new(campaign)))
}

/// DELETE /api/v1/campaigns/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if CampaignRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
