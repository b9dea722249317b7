//! PostgreSQL pool for the share-link, document, and profile repositories.

use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use tracing::info;

use docvault_core::config::DatabaseConfig;
use docvault_core::error::{AppError, ErrorKind};
use docvault_core::result::AppResult;

/// Application name reported to PostgreSQL (`pg_stat_activity`).
const APPLICATION_NAME: &str = "docvault";

/// Shared sqlx pool handed to every repository.
#[derive(Debug, Clone)]
pub struct DatabasePool {
    pool: PgPool,
}

impl DatabasePool {
    /// Parses `database.url` and opens the pool.
    ///
    /// A missing or malformed URL is a `Configuration` error raised before
    /// any network I/O; an unreachable server is a `Database` error.
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let options = connect_options(&config.url)?;

        info!(
            target = %describe(&options),
            max_connections = config.max_connections,
            "Connecting to PostgreSQL"
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds))
            .connect_with(options)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to connect to PostgreSQL", e)
            })?;

        Ok(Self { pool })
    }

    /// The underlying sqlx pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Round-trips `SELECT 1`.
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Database ping failed", e))
    }

    /// Waits for checked-out connections and closes the pool.
    pub async fn close(&self) {
        self.pool.close().await;
        info!("Database pool closed");
    }
}

fn connect_options(url: &str) -> AppResult<PgConnectOptions> {
    let url = url.trim();
    if url.is_empty() {
        return Err(AppError::configuration(
            "database.url is empty; set it in the config file or DOCVAULT__DATABASE__URL",
        ));
    }
    PgConnectOptions::from_str(url)
        .map(|options| options.application_name(APPLICATION_NAME))
        .map_err(|e| AppError::configuration(format!("database.url is not a PostgreSQL URL: {e}")))
}

/// `host:port/database`, never including credentials.
fn describe(options: &PgConnectOptions) -> String {
    format!(
        "{}:{}/{}",
        options.get_host(),
        options.get_port(),
        options.get_database().unwrap_or("<default>")
    )
}
