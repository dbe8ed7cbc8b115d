//! Route definitions for the schedule generation relay.

use axum::routing::post;
use axum::Router;

use crate::handlers::schedule;
use crate::state::AppState;

/// ```text
/// POST   /generate-schedule         -> generate_schedule
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/generate-schedule", post(schedule::generate_schedule))
}
