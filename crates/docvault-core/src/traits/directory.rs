//! Account directory trait.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::id::UserId;
use crate::types::role::Role;

/// Read access to account roles.
///
/// The current principal itself comes from the verified bearer token; the
/// directory answers what that principal is allowed to be.
#[async_trait]
pub trait AccountDirectory: Send + Sync + 'static {
    /// Return the role held by the given user, or `None` if no profile exists.
    async fn role_of(&self, user_id: &UserId) -> AppResult<Option<Role>>;
}
