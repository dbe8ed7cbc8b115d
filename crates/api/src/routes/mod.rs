pub mod health;
pub mod schedule;
pub mod script_analysis;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /generate-schedule                               generate schedule (POST)
///
/// /script-analysis                                 upload script (POST, multipart)
///                                                  fetch analysis (GET, ?script_id=)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(schedule::router())
        .merge(script_analysis::router())
}
