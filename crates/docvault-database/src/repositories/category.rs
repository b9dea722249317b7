//! Category repository implementation.

use sqlx::PgPool;

use docvault_core::error::{AppError, ErrorKind};
use docvault_core::result::AppResult;
use docvault_entity::Category;

/// Repository for the `categories` lookup table.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: PgPool,
}

impl CategoryRepository {
    /// Create a new category repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all categories ordered by name.
    pub async fn list(&self) -> AppResult<Vec<Category>> {
        sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list categories", e))
    }
}
