/// Default JSON / multipart request body limit: 5 MiB.
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 5 * 1024 * 1024;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development. The provider
/// credentials live in [`slate_gemini::GeminiConfig`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3001`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    /// `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// Maximum request body size in bytes (default: 5 MiB).
    pub body_limit_bytes: usize,
    /// Server-side request timeout. `None` leaves requests bounded only by
    /// the transport defaults.
    pub request_timeout_secs: Option<u64>,
    /// Base URL of the external script-breakdown service, if any.
    pub breakdown_service_url: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                 |
    /// |-------------------------|-------------------------|
    /// | `HOST`                  | `0.0.0.0`               |
    /// | `PORT`                  | `3001`                  |
    /// | `CORS_ORIGINS`          | `*` (any origin)        |
    /// | `BODY_LIMIT_BYTES`      | `5242880`               |
    /// | `REQUEST_TIMEOUT_SECS`  | unset (no timeout)      |
    /// | `BREAKDOWN_SERVICE_URL` | unset (relay disabled)  |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3001".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let body_limit_bytes: usize = std::env::var("BODY_LIMIT_BYTES")
            .map(|v| v.parse().expect("BODY_LIMIT_BYTES must be a valid usize"))
            .unwrap_or(DEFAULT_BODY_LIMIT_BYTES);

        let request_timeout_secs: Option<u64> = std::env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .map(|v| v.parse().expect("REQUEST_TIMEOUT_SECS must be a valid u64"));

        let breakdown_service_url = std::env::var("BREAKDOWN_SERVICE_URL")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            host,
            port,
            cors_origins,
            body_limit_bytes,
            request_timeout_secs,
            breakdown_service_url,
        }
    }
}
