//! Share link persistence trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::result::AppResult;
use crate::types::share::ShareLink;

/// Result of inserting a share link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The record was stored.
    Inserted,
    /// Another record already holds this token; nothing was written.
    DuplicateToken,
}

/// Durable store of share links keyed by token.
///
/// Implementations must enforce token uniqueness at the storage layer and
/// report a clash as [`InsertOutcome::DuplicateToken`] rather than
/// overwriting the existing record.
#[async_trait]
pub trait LinkStore: Send + Sync + 'static {
    /// Insert a new link in a single atomic write.
    async fn insert(&self, link: &ShareLink) -> AppResult<InsertOutcome>;

    /// Look up a link by token.
    async fn find_by_token(&self, token: &str) -> AppResult<Option<ShareLink>>;

    /// Stamp `revoked_at` if not already set.
    ///
    /// Returns `true` if this call performed the revocation.
    async fn revoke(&self, token: &str, at: DateTime<Utc>) -> AppResult<bool>;

    /// Atomically consume a still-valid link for single-use redemption.
    ///
    /// Succeeds only if the link exists, is not revoked, and `at` is not past
    /// its expiry. Returns `true` for exactly one of any concurrent callers.
    async fn consume(&self, token: &str, at: DateTime<Utc>) -> AppResult<bool>;

    /// Delete links that expired before `cutoff`. Returns the number removed.
    async fn delete_expired(&self, cutoff: DateTime<Utc>) -> AppResult<u64>;
}
