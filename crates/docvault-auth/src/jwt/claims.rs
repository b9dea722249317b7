//! JWT claims issued by the external auth provider.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use docvault_core::types::{Principal, UserId};

/// Claims payload of a bearer token.
///
/// Only `sub` and `exp` are required. The provider's `role` claim describes
/// its own database role (e.g. "authenticated"), not the vault role, so it is
/// carried but never trusted for authorization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (the account ID).
    pub sub: Uuid,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Issued-at timestamp (seconds since epoch).
    #[serde(default)]
    pub iat: Option<i64>,
    /// Account e-mail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Provider-side role name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Audience.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
}

impl Claims {
    /// Returns the account ID from the subject claim.
    pub fn user_id(&self) -> UserId {
        UserId::from_uuid(self.sub)
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }

    /// Converts the verified claims into the request principal.
    pub fn into_principal(self) -> Principal {
        let principal = Principal::new(UserId::from_uuid(self.sub));
        match self.email {
            Some(email) => principal.with_email(email),
            None => principal,
        }
    }
}
