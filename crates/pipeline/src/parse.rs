//! Strict parsing of model output into a [`CopyData`] draft.
//!
//! The only leniency is stripping one surrounding markdown code fence and
//! accepting a bare string where a list of strings is expected. Anything
//! else that does not match the draft schema is an error.

use copyforge_core::blocks::{CopyData, EmailBlock};
use serde::Deserialize;

use crate::error::GenerationError;

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    fn into_vec(self) -> Vec<String> {
        let items = match self {
            OneOrMany::One(s) => vec![s],
            OneOrMany::Many(v) => v,
        };
        items
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

#[derive(Deserialize)]
struct RawDraft {
    subject_lines: OneOrMany,
    #[serde(default)]
    preview_text: Option<OneOrMany>,
    #[serde(default)]
    email_blocks: serde_json::Value,
}

/// Remove a ```` ``` ```` / ```` ```json ```` fence wrapping the whole text.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // Drop the info string (e.g. `json`) on the opening line.
    match body.split_once('\n') {
        Some((info, inner)) if !info.contains('{') => inner.trim(),
        _ => body.trim(),
    }
}

/// Parse a model response into a draft.
///
/// `email_blocks` that is not a list yields no blocks; a list containing
/// an invalid block is rejected. At least one subject line is required.
pub fn parse_copy_draft(text: &str) -> Result<CopyData, GenerationError> {
    let raw: RawDraft = serde_json::from_str(strip_code_fence(text))
        .map_err(|e| GenerationError::InvalidDraft(e.to_string()))?;

    let subject_lines = raw.subject_lines.into_vec();
    if subject_lines.is_empty() {
        return Err(GenerationError::InvalidDraft(
            "draft has no subject lines".to_string(),
        ));
    }

    let email_blocks: Vec<EmailBlock> = match raw.email_blocks {
        serde_json::Value::Array(_) => serde_json::from_value(raw.email_blocks)
            .map_err(|e| GenerationError::InvalidDraft(format!("email_blocks: {e}")))?,
        _ => Vec::new(),
    };

    Ok(CopyData {
        subject_lines,
        preview_text: raw.preview_text.map(OneOrMany::into_vec).unwrap_or_default(),
        email_blocks,
    })
}
