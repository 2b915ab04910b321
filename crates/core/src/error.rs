/// Domain errors shared by every crate in the workspace.
///
/// HTTP mapping lives in `copyforge_api::error`; this type stays free of
/// transport concerns.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unknown flow type: {0}")]
    UnknownFlowType(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
