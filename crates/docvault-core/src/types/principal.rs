//! The authenticated identity making a request.

use serde::{Deserialize, Serialize};

use super::id::UserId;

/// An authenticated principal.
///
/// Only ever constructed from a verified credential; anonymous callers are
/// represented by the absence of a `Principal`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// The user this principal acts as.
    pub user_id: UserId,
    /// E-mail claim carried by the credential, if any.
    pub email: Option<String>,
}

impl Principal {
    /// Creates a principal for the given user.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            email: None,
        }
    }

    /// Attaches an e-mail address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}
