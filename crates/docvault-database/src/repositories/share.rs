//! Share link repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use docvault_core::error::{AppError, ErrorKind};
use docvault_core::result::AppResult;
use docvault_core::traits::{InsertOutcome, LinkStore};
use docvault_core::types::ShareLink;

/// Postgres-backed share link store over the `shared_links` table.
#[derive(Debug, Clone)]
pub struct ShareLinkRepository {
    pool: PgPool,
}

impl ShareLinkRepository {
    /// Create a new share link repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkStore for ShareLinkRepository {
    async fn insert(&self, link: &ShareLink) -> AppResult<InsertOutcome> {
        let result = sqlx::query(
            "INSERT INTO shared_links (token, document_id, created_at, expires_at, revoked_at) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(&link.token)
        .bind(link.document_id)
        .bind(link.created_at)
        .bind(link.expires_at)
        .bind(link.revoked_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(InsertOutcome::Inserted),
            Err(e) => match e.as_database_error() {
                Some(db) if db.is_unique_violation() => Ok(InsertOutcome::DuplicateToken),
                // The document disappeared between the ownership check and the insert.
                Some(db) if db.is_foreign_key_violation() => {
                    Err(AppError::not_found("Document not found"))
                }
                _ => Err(AppError::with_source(
                    ErrorKind::Database,
                    "Failed to insert share link",
                    e,
                )),
            },
        }
    }

    async fn find_by_token(&self, token: &str) -> AppResult<Option<ShareLink>> {
        sqlx::query_as::<_, ShareLink>(
            "SELECT token, document_id, created_at, expires_at, revoked_at \
             FROM shared_links WHERE token = $1",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find share link", e))
    }

    async fn revoke(&self, token: &str, at: DateTime<Utc>) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE shared_links SET revoked_at = $2 WHERE token = $1 AND revoked_at IS NULL",
        )
        .bind(token)
        .bind(at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to revoke share link", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn consume(&self, token: &str, at: DateTime<Utc>) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE shared_links SET revoked_at = $2 \
             WHERE token = $1 AND revoked_at IS NULL AND expires_at >= $2",
        )
        .bind(token)
        .bind(at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to consume share link", e)
        })?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_expired(&self, before: DateTime<Utc>) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM shared_links WHERE expires_at < $1")
            .bind(before)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete expired links", e)
            })?;
        Ok(result.rows_affected())
    }
}
