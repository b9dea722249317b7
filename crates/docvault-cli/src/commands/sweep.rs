//! One-shot expired link sweep.

use std::sync::Arc;

use serde_json::json;

use docvault_core::config::AppConfig;
use docvault_core::error::AppError;
use docvault_core::traits::SystemClock;
use docvault_database::repositories::ShareLinkRepository;
use docvault_service::ExpiredLinkSweeper;

use crate::output::{self, OutputFormat};

/// Delete share links that expired more than the retention window ago.
pub async fn execute(config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let pool = super::create_db_pool(config).await?;
    let sweeper = ExpiredLinkSweeper::new(
        Arc::new(ShareLinkRepository::new(pool.pool().clone())),
        Arc::new(SystemClock),
        &config.share,
    );

    let deleted = sweeper.sweep_once().await?;
    tracing::debug!(deleted, "One-shot sweep finished");
    match format {
        OutputFormat::Json => output::print_json(&json!({ "deleted": deleted })),
        OutputFormat::Text => output::print_success(&format!("Deleted {deleted} expired share link(s).")),
    }

    pool.close().await;
    Ok(())
}
