//! Handlers for the `/clients` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use copyforge_core::error::CoreError;
use copyforge_core::types::DbId;
use copyforge_core::validation::{validate_name, validate_optional_name, validate_url};
use copyforge_db::models::client::{Client, CreateClient, UpdateClient};
use copyforge_db::repositories::ClientRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Client",
        id: id.to_string(),
    })
}

fn validate_website(website: Option<&str>) -> Result<(), CoreError> {
    match website.map(str::trim).filter(|w| !w.is_empty()) {
        Some(w) => validate_url("website", w),
        None => Ok(()),
    }
}

/// Load a client or fail with 404.
pub(crate) async fn load(state: &AppState, id: DbId) -> AppResult<Client> {
    ClientRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// POST /api/v1/clients
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateClient>,
) -> AppResult<(StatusCode, Json<DataResponse<Client>>)> {
    validate_name("name", &input.name)?;
    validate_optional_name("company", input.company.as_deref())?;
    validate_website(input.website.as_deref())?;

    let client = ClientRepo::create(&state.pool, &input).await?;
    tracing::info!(client_id = client.id, name = %client.name, "Client created");
    Ok((StatusCode::CREATED, Json(DataResponse::new(client))))
}

/// GET /api/v1/clients
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Client>>>> {
    let clients = ClientRepo::list(&state.pool).await?;
    Ok(Json(DataResponse::new(clients)))
}

/// GET /api/v1/clients/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Client>>> {
    let client = load(&state, id).await?;
    Ok(Json(DataResponse::new(client)))
}

/// PUT /api/v1/clients/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateClient>,
) -> AppResult<Json<DataResponse<Client>>> {
    validate_optional_name("name", input.name.as_deref())?;
    validate_optional_name("company", input.company.as_deref())?;
    validate_website(input.website.as_deref())?;

    let client = ClientRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(DataResponse::new(client)))
}

/// DELETE /api/v1/clients/{id}
///
/// Cascades to the client's campaigns and notes.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if ClientRepo::delete(&state.pool, id).await? {
        tracing::info!(client_id = id, "Client deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
