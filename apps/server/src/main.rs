//! # Stockbook Server
//!
//! ## Startup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Server Lifecycle                                │
//! │                                                                         │
//! │  .env ──► ServerConfig::from_env() ──► Database::new (migrations)      │
//! │                                              │                          │
//! │                                              ▼                          │
//! │  Browser ───► HTTP (5000) ───► api::router ───► SyncService ───► SQLite│
//! │                                                                         │
//! │  Ctrl+C / SIGTERM ──► drain requests ──► Database::close()             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use anyhow::Context;
use axum::extract::DefaultBodyLimit;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use stockbook_db::{Database, DbConfig};
use stockbook_server::{api, AppState, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; the process environment still applies
    let dotenv = dotenvy::dotenv();

    init_tracing();

    if let Err(e) = dotenv {
        if !e.not_found() {
            warn!(error = %e, "Failed to read .env file");
        }
    }

    info!("Starting Stockbook server...");

    // Load configuration
    let config = ServerConfig::from_env().context("Invalid configuration")?;
    info!(
        addr = %config.bind_addr(),
        database_url = %config.database_url,
        "Configuration loaded"
    );

    // Connect to database (runs migrations)
    let db_config = DbConfig::new(&config.database_url).max_connections(config.db_max_connections);
    let db = Database::new(db_config)
        .await
        .context("Failed to open database")?;
    info!("Connected to database");

    let state = AppState::new(Arc::new(db.clone()));

    let app = api::router()
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr()))?;
    info!(addr = %config.bind_addr(), "Server running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    db.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=stockbook_db=trace` - Show trace for the store only
/// - Default: INFO, DEBUG for the stockbook crates and request traces
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,stockbook=debug,sqlx=warn,tower_http=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
