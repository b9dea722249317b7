//! Profile repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use docvault_core::error::{AppError, ErrorKind};
use docvault_core::result::AppResult;
use docvault_core::traits::AccountDirectory;
use docvault_core::types::{Role, UserId};
use docvault_entity::Profile;

use crate::store::ProfileStore;

/// Repository for the `profiles` table.
#[derive(Debug, Clone)]
pub struct ProfileRepository {
    pool: PgPool,
}

impl ProfileRepository {
    /// Create a new profile repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountDirectory for ProfileRepository {
    async fn role_of(&self, user_id: &UserId) -> AppResult<Option<Role>> {
        sqlx::query_scalar::<_, Role>("SELECT role FROM profiles WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to look up role", e))
    }
}

#[async_trait]
impl ProfileStore for ProfileRepository {
    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<Profile>> {
        sqlx::query_as::<_, Profile>(
            "SELECT id, full_name, email, role, created_at FROM profiles WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find profile", e))
    }

    async fn update_role(&self, id: &UserId, role: Role) -> AppResult<bool> {
        let result = sqlx::query("UPDATE profiles SET role = $2 WHERE id = $1")
            .bind(id)
            .bind(role)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update role", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn upsert(
        &self,
        id: &UserId,
        email: &str,
        full_name: Option<&str>,
        role: Role,
    ) -> AppResult<Profile> {
        sqlx::query_as::<_, Profile>(
            "INSERT INTO profiles (id, email, full_name, role) VALUES ($1, $2, $3, $4) \
             ON CONFLICT (id) DO UPDATE SET email = EXCLUDED.email, \
             full_name = COALESCE(EXCLUDED.full_name, profiles.full_name), role = EXCLUDED.role \
             RETURNING id, full_name, email, role, created_at",
        )
        .bind(id)
        .bind(email)
        .bind(full_name)
        .bind(role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to upsert profile", e))
    }
}
