use std::sync::Arc;

use slate_breakdown::BreakdownApi;
use slate_core::provider::TextGenerator;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Built once at start-up and read-only afterwards. Cheaply cloneable.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Text-generation provider used by the schedule relay.
    pub generator: Arc<dyn TextGenerator>,
    /// Script-breakdown service client; `None` when not configured.
    pub breakdown: Option<Arc<BreakdownApi>>,
}
