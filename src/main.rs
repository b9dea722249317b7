//! DocVault Server: identity document vault with expiring share links.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing_subscriber::{EnvFilter, fmt};

use docvault_api::{AppState, Backends};
use docvault_core::config::AppConfig;
use docvault_core::error::AppError;
use docvault_core::traits::{Clock, LinkStore, SystemClock};
use docvault_database::DatabasePool;
use docvault_database::repositories::{DocumentRepository, ProfileRepository, ShareLinkRepository};
use docvault_service::ExpiredLinkSweeper;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load configuration from file and environment
fn load_configuration() -> Result<AppConfig, AppError> {
    let config_path =
        std::env::var("DOCVAULT_CONFIG").unwrap_or_else(|_| "config/default.toml".to_string());
    let env = std::env::var("DOCVAULT_ENV").unwrap_or_else(|_| "development".to_string());

    AppConfig::load(&config_path, &env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting DocVault");

    // ── Step 1: Database connection + migrations ─────────────────
    let db = DatabasePool::connect(&config.database).await?;
    docvault_database::migration::run_migrations(db.pool()).await?;
    db.ping().await?;
    tracing::info!("Database reachable, migrations applied");
    let pool = db.pool().clone();

    // ── Step 2: Initialize repositories ──────────────────────────
    let documents = Arc::new(DocumentRepository::new(pool.clone()));
    let profiles = Arc::new(ProfileRepository::new(pool.clone()));
    let links: Arc<dyn LinkStore> = Arc::new(ShareLinkRepository::new(pool.clone()));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    // ── Step 3: Initialize services ──────────────────────────────
    let app_state = AppState::new(
        config.clone(),
        Backends {
            directory: profiles.clone(),
            catalog: documents.clone(),
            documents,
            profiles,
            links: Arc::clone(&links),
            clock: Arc::clone(&clock),
        },
    );

    // ── Step 4: Shutdown channel & sweeper ───────────────────────
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let sweeper = ExpiredLinkSweeper::new(links, clock, &config.share);
    let sweeper_handle = sweeper
        .is_enabled()
        .then(|| tokio::spawn(sweeper.run(shutdown_rx)));

    // ── Step 5: Build and start HTTP server ──────────────────────
    let app = docvault_api::build_app(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!(addr = %addr, "DocVault server listening");

    // ── Step 6: Graceful shutdown ────────────────────────────────
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
        let _ = shutdown_tx.send(true);
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    // ── Step 7: Wait for background tasks ────────────────────────
    if let Some(handle) = sweeper_handle {
        let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
        let _ = tokio::time::timeout(grace, handle).await;
    }

    db.close().await;
    tracing::info!("DocVault server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
