//! Route definitions for the script-breakdown relay.

use axum::routing::get;
use axum::Router;

use crate::handlers::script_analysis;
use crate::state::AppState;

/// Mounted with and without a trailing slash; dashboards written against
/// the breakdown service call `/script-analysis/`.
///
/// ```text
/// POST   /script-analysis           -> upload_script
/// GET    /script-analysis           -> get_analysis
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/script-analysis",
            get(script_analysis::get_analysis).post(script_analysis::upload_script),
        )
        .route(
            "/script-analysis/",
            get(script_analysis::get_analysis).post(script_analysis::upload_script),
        )
}
