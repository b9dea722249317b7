//! Profile entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use docvault_core::types::{Role, UserId};

/// Per-account profile row. `id` matches the auth provider's subject.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Profile {
    /// Account identifier.
    pub id: UserId,
    /// Display name.
    pub full_name: Option<String>,
    /// Contact e-mail.
    pub email: String,
    /// Role held by the account.
    pub role: Role,
    /// When the profile was created.
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Check if the profile belongs to an administrator.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
