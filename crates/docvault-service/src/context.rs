//! Request context carrying the authenticated principal and resolved role.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use docvault_core::result::AppResult;
use docvault_core::traits::AccountDirectory;
use docvault_core::types::{Principal, Role, UserId};

/// Context for the current authenticated request.
///
/// Built once per request so every service call knows *who* is acting and
/// with which role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The verified caller.
    pub principal: Principal,
    /// The caller's vault role. Accounts without a profile are plain users.
    pub role: Role,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a context with an already-known role.
    pub fn new(principal: Principal, role: Role) -> Self {
        Self {
            principal,
            role,
            request_time: Utc::now(),
        }
    }

    /// Looks the caller's role up in the account directory.
    pub async fn resolve(principal: Principal, directory: &dyn AccountDirectory) -> AppResult<Self> {
        let role = directory
            .role_of(&principal.user_id)
            .await?
            .unwrap_or_default();
        Ok(Self::new(principal, role))
    }

    /// The caller's account ID.
    pub fn user_id(&self) -> UserId {
        self.principal.user_id
    }

    /// Returns whether the current user is an admin.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
