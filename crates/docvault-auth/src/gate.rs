//! Owner-or-admin authorization rule.

use docvault_core::error::AppError;
use docvault_core::types::{Principal, Role, UserId};

/// Decides whether a principal may act on a document.
///
/// Pure: no I/O, no clock. Callers resolve the role and the owner first.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthorizationGate;

impl AuthorizationGate {
    /// Creates the gate.
    pub fn new() -> Self {
        Self
    }

    /// Admins may share anything; everyone else only documents they own.
    /// An unknown owner never matches.
    pub fn can_share(&self, principal: &Principal, role: Role, owner: Option<&UserId>) -> bool {
        role.is_admin() || owner == Some(&principal.user_id)
    }

    /// Same rule as [`can_share`](Self::can_share), as a `Result`.
    pub fn require_owner_or_admin(
        &self,
        principal: &Principal,
        role: Role,
        owner: Option<&UserId>,
    ) -> Result<(), AppError> {
        if self.can_share(principal, role, owner) {
            Ok(())
        } else {
            Err(AppError::forbidden("You do not have access to this document"))
        }
    }

    /// Requires the admin role.
    pub fn require_admin(&self, role: Role) -> Result<(), AppError> {
        if role.is_admin() {
            Ok(())
        } else {
            Err(AppError::forbidden("Administrator role required"))
        }
    }
}
