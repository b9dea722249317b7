//! Database migration command.

use docvault_core::config::AppConfig;
use docvault_core::error::AppError;

use crate::output;

/// Apply all pending migrations.
pub async fn execute(config: &AppConfig) -> Result<(), AppError> {
    let pool = super::create_db_pool(config).await?;

    println!("Running database migrations...");
    docvault_database::migration::run_migrations(pool.pool()).await?;
    output::print_success("All migrations applied successfully.");

    pool.close().await;
    Ok(())
}
