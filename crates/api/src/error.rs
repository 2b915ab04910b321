use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use copyforge_airtable::AirtableApiError;
use copyforge_core::error::CoreError;
use copyforge_db::store::StoreError;
use copyforge_pipeline::{GenerationError, RecordError};
use serde::Serialize;
use serde_json::json;

/// Machine-readable error kind carried in every error body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ValidationError,
    NotFound,
    CollaboratorUnavailable,
    StorageError,
    Conflict,
    InternalError,
}

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors plus the collaborator errors, and
/// implements [`IntoResponse`] to produce the
/// `{ "success": false, "error": ..., "code": ... }` envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `copyforge_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The shareable record store failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A language model call failed outside the per-email fallback path.
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// The campaign tracker failed.
    #[error(transparent)]
    Airtable(#[from] AirtableApiError),

    /// An optional collaborator is not configured.
    #[error("{0} is not configured")]
    NotConfigured(&'static str),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<RecordError> for AppError {
    fn from(err: RecordError) -> Self {
        match err {
            RecordError::Core(e) => AppError::Core(e),
            RecordError::Store(e) => AppError::Store(e),
        }
    }
}

const INTERNAL_MESSAGE: &str = "An internal error occurred";
const STORAGE_MESSAGE: &str = "A storage error occurred";

impl AppError {
    fn classify(&self) -> (StatusCode, ErrorCode, String) {
        match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, .. } => (
                    StatusCode::NOT_FOUND,
                    ErrorCode::NotFound,
                    format!("{entity} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, ErrorCode::ValidationError, msg.clone())
                }
                CoreError::UnknownFlowType(_) => (
                    StatusCode::BAD_REQUEST,
                    ErrorCode::ValidationError,
                    core.to_string(),
                ),
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, ErrorCode::Conflict, msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ErrorCode::InternalError,
                        INTERNAL_MESSAGE.to_string(),
                    )
                }
            },

            // --- Storage ---
            AppError::Database(err) => classify_sqlx_error(err),
            AppError::Store(err) => {
                tracing::error!(error = %err, "Copy store error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::StorageError,
                    STORAGE_MESSAGE.to_string(),
                )
            }

            // --- Collaborators ---
            AppError::Generation(err) => {
                tracing::warn!(error = %err, "Generation failed");
                (
                    StatusCode::BAD_GATEWAY,
                    ErrorCode::CollaboratorUnavailable,
                    err.to_string(),
                )
            }
            AppError::Airtable(err) => {
                tracing::warn!(error = %err, "Airtable request failed");
                let status = match err {
                    AirtableApiError::ApiError { status: 404, .. } => StatusCode::NOT_FOUND,
                    _ => StatusCode::BAD_GATEWAY,
                };
                let code = if status == StatusCode::NOT_FOUND {
                    ErrorCode::NotFound
                } else {
                    ErrorCode::CollaboratorUnavailable
                };
                (status, code, err.to_string())
            }
            AppError::NotConfigured(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorCode::CollaboratorUnavailable,
                self.to_string(),
            ),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::ValidationError, msg.clone())
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::InternalError,
                    INTERNAL_MESSAGE.to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.classify();

        let body = json!({
            "success": false,
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations map to 409.
/// - Foreign key violations map to 400 (the referenced row does not exist).
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, ErrorCode, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            ErrorCode::NotFound,
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            // PostgreSQL unique_violation
            Some("23505") => (
                StatusCode::CONFLICT,
                ErrorCode::Conflict,
                format!(
                    "Duplicate value violates unique constraint: {}",
                    db_err.constraint().unwrap_or("unknown")
                ),
            ),
            // PostgreSQL foreign_key_violation
            Some("23503") => (
                StatusCode::BAD_REQUEST,
                ErrorCode::ValidationError,
                "Referenced record does not exist".to_string(),
            ),
            _ => {
                tracing::error!(error = %db_err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::StorageError,
                    STORAGE_MESSAGE.to_string(),
                )
            }
        },
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::StorageError,
                STORAGE_MESSAGE.to_string(),
            )
        }
    }
}
