//! Provider output sanitising and strict decoding.
//!
//! The provider is asked for a raw JSON array but frequently wraps it in a
//! Markdown code fence. [`strip_code_fences`] removes the known fence
//! markers; [`decode_schedule`] then accepts the text only if it decodes
//! completely into a list of [`ScheduleDay`]. No other repair is attempted.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::schedule::ScheduleDay;

/// Matches an opening ```` ```json ```` fence (any case) or a bare ```` ``` ```` marker.
const CODE_FENCE_PATTERN: &str = r"(?i)```(?:json)?";

static CODE_FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CODE_FENCE_PATTERN).expect("valid regex"));

/// Why provider output could not be decoded.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// Nothing left once the fence markers were removed.
    #[error("provider returned no content")]
    Empty,

    /// The text is not JSON at all.
    #[error("provider output is not valid JSON: {0}")]
    Syntax(#[source] serde_json::Error),

    /// Valid JSON, but not an array of schedule days.
    #[error("provider output does not match the schedule shape: {0}")]
    Shape(#[source] serde_json::Error),
}

/// A provider response that passed strict decoding.
///
/// `raw` is the JSON exactly as the provider produced it (minus fences) and
/// is what goes back to the caller; `days` is its typed view.
#[derive(Debug, Clone)]
pub struct GeneratedSchedule {
    pub days: Vec<ScheduleDay>,
    pub raw: serde_json::Value,
}

/// Remove every code-fence marker and trim surrounding whitespace.
pub fn strip_code_fences(text: &str) -> String {
    CODE_FENCE_RE.replace_all(text, "").trim().to_string()
}

/// Strip fences from `text` and decode it as a schedule.
pub fn decode_schedule(text: &str) -> Result<GeneratedSchedule, DecodeError> {
    let stripped = strip_code_fences(text);
    if stripped.is_empty() {
        return Err(DecodeError::Empty);
    }

    let raw: serde_json::Value = serde_json::from_str(&stripped).map_err(DecodeError::Syntax)?;
    let days = Vec::<ScheduleDay>::deserialize(&raw).map_err(DecodeError::Shape)?;

    Ok(GeneratedSchedule { days, raw })
}
