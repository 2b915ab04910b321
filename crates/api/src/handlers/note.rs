//! Handlers for client notes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use copyforge_core::error::CoreError;
use copyforge_core::types::DbId;
use copyforge_core::validation::validate_note;
use copyforge_db::models::note::{CreateNote, Note};
use copyforge_db::repositories::NoteRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::handlers::client;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/clients/{id}/notes
pub async fn list_by_client(
    State(state): State<AppState>,
    Path(client_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Note>>>> {
    client::load(&state, client_id).await?;
    let notes = NoteRepo::list_by_client(&state.pool, client_id).await?;
    Ok(Json(DataResponse::new(notes)))
}

/// POST /api/v1/clients/{id}/notes
pub async fn create(
    State(state): State<AppState>,
    Path(client_id): Path<DbId>,
    AppJson(input): AppJson<CreateNote>,
) -> AppResult<(StatusCode, Json<DataResponse<Note>>)> {
    validate_note(&input.content)?;
    client::load(&state, client_id).await?;
    let note = NoteRepo::create(&state.pool, client_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(note))))
}

/// DELETE /api/v1/notes/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if NoteRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Note",
            id: id.to_string(),
        }))
    }
}
