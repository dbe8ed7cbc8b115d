//! Request validation for the generation relay.

use crate::error::CoreError;

/// Message returned when the script body is missing or blank. Names the
/// JSON field so clients can tell what to fix.
pub const SCRIPT_TEXT_REQUIRED: &str = "scriptText is required.";

/// Validate the submitted script text.
///
/// `None`, the empty string and whitespace-only text are all rejected.
/// On success the original text is returned untouched (no trimming) so the
/// provider sees exactly what the client sent.
pub fn validate_script_text(text: Option<&str>) -> Result<&str, CoreError> {
    match text {
        Some(t) if !t.trim().is_empty() => Ok(t),
        _ => Err(CoreError::Validation(SCRIPT_TEXT_REQUIRED.to_string())),
    }
}
