//! The schedule generation relay.
//!
//! Validates the script, composes the prompt, calls the provider exactly
//! once and strictly decodes the answer. Any failure after validation is
//! reported as either [`RelayError::Upstream`] or [`RelayError::Format`];
//! nothing is retried and no partial schedule is ever returned.

use chrono::NaiveDate;

use crate::error::CoreError;
use crate::output::{decode_schedule, DecodeError, GeneratedSchedule};
use crate::prompt::SchedulePrompt;
use crate::provider::{ProviderError, TextGenerator};
use crate::validation::validate_script_text;

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// The request was rejected before the provider was contacted.
    #[error(transparent)]
    Invalid(#[from] CoreError),

    #[error("schedule generation failed: {0}")]
    Upstream(#[from] ProviderError),

    #[error("schedule generation returned unusable output: {0}")]
    Format(#[from] DecodeError),
}

/// Generate a shooting schedule for `script_text` starting on `start_date`.
pub async fn generate_schedule(
    generator: &dyn TextGenerator,
    script_text: Option<&str>,
    start_date: NaiveDate,
) -> Result<GeneratedSchedule, RelayError> {
    let script = validate_script_text(script_text)?;
    let prompt = SchedulePrompt::new(script, start_date);

    tracing::debug!(
        provider = generator.name(),
        script_len = script.len(),
        "Requesting schedule generation"
    );

    let text = generator.generate(&prompt).await?;
    let schedule = decode_schedule(&text)?;

    tracing::info!(
        provider = generator.name(),
        days = schedule.days.len(),
        "Schedule generated"
    );

    Ok(schedule)
}
