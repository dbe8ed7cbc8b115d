use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use slate_api::config::ServerConfig;
use slate_api::router::build_app_router;
use slate_api::state::AppState;
use slate_breakdown::BreakdownApi;
use slate_gemini::{GeminiApi, GeminiConfig};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "slate_api=debug,slate_core=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Provider ---
    let gemini_config = GeminiConfig::from_env().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Missing provider configuration, refusing to start");
        std::process::exit(1);
    });
    let gemini = GeminiApi::new(gemini_config);
    tracing::info!(model = gemini.model(), "Gemini client created");

    // --- Breakdown service ---
    let breakdown = config.breakdown_service_url.clone().map(|url| {
        tracing::info!(%url, "Script breakdown relay enabled");
        Arc::new(BreakdownApi::new(url))
    });
    if breakdown.is_none() {
        tracing::info!("BREAKDOWN_SERVICE_URL not set, script breakdown relay disabled");
    }

    // --- App state ---
    let state = AppState {
        config: Arc::new(config.clone()),
        generator: Arc::new(gemini),
        breakdown,
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
