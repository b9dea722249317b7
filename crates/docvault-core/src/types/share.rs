//! Share link record.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::id::DocumentId;
use crate::error::AppError;
use crate::result::AppResult;

/// A time-limited capability pointing at a document.
///
/// Created once by the share service and never extended. The link does not
/// own the document; redemption re-checks the document separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ShareLink {
    /// Opaque unguessable token; primary lookup key.
    pub token: String,
    /// The shared document.
    pub document_id: DocumentId,
    /// When the link was minted.
    pub created_at: DateTime<Utc>,
    /// Last instant at which the link is still valid.
    pub expires_at: DateTime<Utc>,
    /// Set when the link was revoked or consumed by a single-use redemption.
    pub revoked_at: Option<DateTime<Utc>>,
}

/// Where a link sits in its lifecycle at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkState {
    /// Redeemable.
    Valid,
    /// Past `expires_at`.
    Expired,
    /// Revoked before expiry.
    Revoked,
}

impl ShareLink {
    /// Builds a fresh link valid for `ttl` from `now`.
    ///
    /// Fails with `Validation` when `now + ttl` is not a representable instant.
    pub fn issue(
        token: String,
        document_id: DocumentId,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> AppResult<Self> {
        let expires_at = now
            .checked_add_signed(ttl)
            .ok_or_else(|| AppError::validation("Share link lifetime is out of range"))?;
        Ok(Self {
            token,
            document_id,
            created_at: now,
            expires_at,
            revoked_at: None,
        })
    }

    /// Lifecycle state at `now`. Revocation wins over expiry; the expiry
    /// boundary is inclusive (`now == expires_at` is still valid).
    pub fn state_at(&self, now: DateTime<Utc>) -> LinkState {
        if self.revoked_at.is_some() {
            LinkState::Revoked
        } else if now > self.expires_at {
            LinkState::Expired
        } else {
            LinkState::Valid
        }
    }

    /// Shorthand for `state_at(now) == LinkState::Valid`.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.state_at(now) == LinkState::Valid
    }
}
