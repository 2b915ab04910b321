//! Field validation shared by the CRUD handlers.

use crate::error::CoreError;

/// Maximum length of entity names (clients, campaigns).
pub const MAX_NAME_LENGTH: usize = 200;

/// Maximum length of a note body.
pub const MAX_NOTE_LENGTH: usize = 10_000;

/// A name must be non-blank and within [`MAX_NAME_LENGTH`].
pub fn validate_name(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    if value.len() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "{field} exceeds maximum length of {MAX_NAME_LENGTH} characters (got {})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate an optional name from a partial update.
pub fn validate_optional_name(field: &str, value: Option<&str>) -> Result<(), CoreError> {
    value.map_or(Ok(()), |v| validate_name(field, v))
}

pub fn validate_note(content: &str) -> Result<(), CoreError> {
    if content.trim().is_empty() {
        return Err(CoreError::Validation(
            "Note content must not be empty".to_string(),
        ));
    }
    if content.len() > MAX_NOTE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Note exceeds maximum length of {MAX_NOTE_LENGTH} characters (got {})",
            content.len()
        )));
    }
    Ok(())
}

/// A URL must be absolute http(s).
pub fn validate_url(field: &str, value: &str) -> Result<(), CoreError> {
    let v = value.trim();
    if v.starts_with("http://") || v.starts_with("https://") {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "{field} must be an http(s) URL"
        )))
    }
}
