//! Validation and normalization rules for FAQ entries.
//!
//! All functions here are pure: they run before any storage access and never
//! touch the database. Handlers call [`validate_entry_input`] on create and
//! update, and [`normalize_category`] both on the way in (before persisting)
//! and on the way out (so legacy rows are served in canonical form).

use crate::error::CoreError;

/// Canonicalize a comma-separated category string.
///
/// Splits on commas, trims each token, drops empty tokens, and rejoins with
/// single commas, preserving the order of surviving tokens. Absent or empty
/// input yields the empty string. Idempotent: normalizing an already
/// normalized string is a no-op.
///
/// Tokens containing literal commas cannot be represented; no escaping is
/// defined. This is an accepted limitation of the category format.
pub fn normalize_category(raw: Option<&str>) -> String {
    raw.unwrap_or("")
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}

/// Validate the required fields of a create/update request.
///
/// `question` and `answer` must be present and non-empty after trimming.
/// Returns the trimmed values so whitespace-padded input is never persisted.
pub fn validate_entry_input(
    question: Option<&str>,
    answer: Option<&str>,
) -> Result<(String, String), CoreError> {
    let question = require_non_empty("question", question)?;
    let answer = require_non_empty("answer", answer)?;
    Ok((question, answer))
}

fn require_non_empty(field: &str, value: Option<&str>) -> Result<String, CoreError> {
    match value.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => Ok(trimmed.to_string()),
        _ => Err(CoreError::Validation(format!(
            "Field '{field}' is required and must not be empty"
        ))),
    }
}
