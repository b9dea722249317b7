//! In-memory share link store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use docvault_core::result::AppResult;
use docvault_core::traits::{InsertOutcome, LinkStore};
use docvault_core::types::ShareLink;

/// Share links keyed by token.
#[derive(Debug, Default)]
pub struct MemoryLinkStore {
    links: DashMap<String, ShareLink>,
}

impl MemoryLinkStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored links.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Whether the store holds no links.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

#[async_trait]
impl LinkStore for MemoryLinkStore {
    async fn insert(&self, link: &ShareLink) -> AppResult<InsertOutcome> {
        match self.links.entry(link.token.clone()) {
            Entry::Occupied(_) => Ok(InsertOutcome::DuplicateToken),
            Entry::Vacant(slot) => {
                slot.insert(link.clone());
                Ok(InsertOutcome::Inserted)
            }
        }
    }

    async fn find_by_token(&self, token: &str) -> AppResult<Option<ShareLink>> {
        Ok(self.links.get(token).map(|l| l.value().clone()))
    }

    async fn revoke(&self, token: &str, at: DateTime<Utc>) -> AppResult<bool> {
        Ok(match self.links.get_mut(token) {
            Some(mut link) if link.revoked_at.is_none() => {
                link.revoked_at = Some(at);
                true
            }
            _ => false,
        })
    }

    async fn consume(&self, token: &str, at: DateTime<Utc>) -> AppResult<bool> {
        // The shard write lock makes the check-and-set atomic.
        Ok(match self.links.get_mut(token) {
            Some(mut link) if link.revoked_at.is_none() && at <= link.expires_at => {
                link.revoked_at = Some(at);
                true
            }
            _ => false,
        })
    }

    async fn delete_expired(&self, cutoff: DateTime<Utc>) -> AppResult<u64> {
        let before = self.links.len();
        self.links.retain(|_, link| link.expires_at >= cutoff);
        Ok(before.saturating_sub(self.links.len()) as u64)
    }
}
