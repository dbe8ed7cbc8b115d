//! Handler for the schedule generation relay.
//!
//! Route:
//! - `POST /api/generate-schedule` — generate a shooting schedule from script text

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use slate_core::relay;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /api/generate-schedule`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateScheduleRequest {
    /// Full script text. Optional here so a missing field reaches the
    /// relay's own validation instead of a deserialization error.
    pub script_text: Option<String>,
}

/// POST /api/generate-schedule
///
/// Returns the provider's schedule array unmodified once it has passed
/// strict decoding. Scheduling starts from today's local date.
pub async fn generate_schedule(
    State(state): State<AppState>,
    payload: Result<Json<GenerateScheduleRequest>, JsonRejection>,
) -> AppResult<Json<serde_json::Value>> {
    let Json(input) = payload.map_err(|e| match e.status() {
        StatusCode::PAYLOAD_TOO_LARGE => AppError::PayloadTooLarge(e.body_text()),
        _ => AppError::BadRequest(e.body_text()),
    })?;

    let start_date = chrono::Local::now().date_naive();
    let schedule = relay::generate_schedule(
        state.generator.as_ref(),
        input.script_text.as_deref(),
        start_date,
    )
    .await?;

    Ok(Json(schedule.raw))
}
