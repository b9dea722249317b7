//! Share link creation and revocation.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use docvault_auth::AuthorizationGate;
use docvault_core::config::ShareConfig;
use docvault_core::error::AppError;
use docvault_core::result::AppResult;
use docvault_core::traits::{AccountDirectory, Clock, DocumentCatalog, InsertOutcome, LinkStore};
use docvault_core::types::{DocumentId, Principal, ShareLink};

use super::link::TokenGenerator;
use crate::context::RequestContext;

/// A freshly minted link as returned to its creator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedShareLink {
    /// The opaque token.
    pub token: String,
    /// The shared document.
    pub document_id: DocumentId,
    /// Absolute redemption URL.
    pub url: String,
    /// When the link was minted.
    pub created_at: DateTime<Utc>,
    /// Last instant at which the link redeems.
    pub expires_at: DateTime<Utc>,
}

/// Mints and revokes share links.
#[derive(Clone)]
pub struct ShareService {
    directory: Arc<dyn AccountDirectory>,
    catalog: Arc<dyn DocumentCatalog>,
    links: Arc<dyn LinkStore>,
    tokens: Arc<dyn TokenGenerator>,
    clock: Arc<dyn Clock>,
    gate: AuthorizationGate,
    config: ShareConfig,
}

impl std::fmt::Debug for ShareService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShareService")
            .field("tokens", &self.tokens)
            .field("clock", &self.clock)
            .field("config", &self.config)
            .finish()
    }
}

impl ShareService {
    /// Creates a new share service.
    pub fn new(
        directory: Arc<dyn AccountDirectory>,
        catalog: Arc<dyn DocumentCatalog>,
        links: Arc<dyn LinkStore>,
        tokens: Arc<dyn TokenGenerator>,
        clock: Arc<dyn Clock>,
        config: ShareConfig,
    ) -> Self {
        Self {
            directory,
            catalog,
            links,
            tokens,
            clock,
            gate: AuthorizationGate::new(),
            config,
        }
    }

    /// Mints a new time-limited link for a document.
    ///
    /// Checks run in a fixed order: authentication, request shape, document
    /// existence, authorization, TTL. Every successful call produces a new
    /// distinct token.
    pub async fn create_share_link(
        &self,
        principal: Option<&Principal>,
        document_id: Option<&str>,
        ttl_minutes: Option<i64>,
    ) -> AppResult<IssuedShareLink> {
        let principal = principal.ok_or_else(|| AppError::unauthorized("Authentication required"))?;

        let document_id: DocumentId = document_id
            .filter(|raw| !raw.trim().is_empty())
            .ok_or_else(|| AppError::validation("document_id is required"))?
            .parse()
            .map_err(|_| AppError::validation("document_id must be a UUID"))?;

        let owner = self
            .catalog
            .owner_of(&document_id)
            .await?
            .ok_or_else(|| AppError::not_found("Document not found"))?;

        let ctx = RequestContext::resolve(principal.clone(), self.directory.as_ref()).await?;
        if !self.gate.can_share(&ctx.principal, ctx.role, Some(&owner)) {
            warn!(
                user_id = %ctx.user_id(),
                document_id = %document_id,
                "Share link refused: caller is neither owner nor admin"
            );
            return Err(AppError::forbidden(
                "You do not have permission to share this document",
            ));
        }

        let ttl = self.resolve_ttl(ttl_minutes)?;
        let link = self.insert_with_fresh_token(document_id, ttl).await?;

        info!(
            user_id = %ctx.user_id(),
            document_id = %document_id,
            expires_at = %link.expires_at,
            "Share link created"
        );

        Ok(IssuedShareLink {
            url: self.config.redemption_url(&link.token),
            token: link.token,
            document_id: link.document_id,
            created_at: link.created_at,
            expires_at: link.expires_at,
        })
    }

    /// Revokes a link. The caller must own the linked document or be an admin.
    ///
    /// Revoking an already-revoked link succeeds without changing it.
    pub async fn revoke_share_link(&self, ctx: &RequestContext, token: &str) -> AppResult<()> {
        let link = self
            .links
            .find_by_token(token.trim())
            .await?
            .ok_or_else(|| AppError::not_found("Share link not found"))?;

        let owner = self
            .catalog
            .owner_of(&link.document_id)
            .await?
            .ok_or_else(|| AppError::not_found("Document not found"))?;

        self.gate
            .require_owner_or_admin(&ctx.principal, ctx.role, Some(&owner))?;

        let changed = self.links.revoke(&link.token, self.clock.now()).await?;
        if changed {
            info!(
                user_id = %ctx.user_id(),
                document_id = %link.document_id,
                "Share link revoked"
            );
        }
        Ok(())
    }

    fn resolve_ttl(&self, ttl_minutes: Option<i64>) -> AppResult<Duration> {
        let minutes = ttl_minutes.unwrap_or(self.config.default_ttl_minutes);
        if minutes <= 0 || minutes > self.config.max_ttl_minutes {
            return Err(AppError::validation(format!(
                "ttl_minutes must be between 1 and {}",
                self.config.max_ttl_minutes
            )));
        }
        Duration::try_minutes(minutes)
            .ok_or_else(|| AppError::validation("ttl_minutes is out of range"))
    }

    async fn insert_with_fresh_token(
        &self,
        document_id: DocumentId,
        ttl: Duration,
    ) -> AppResult<ShareLink> {
        for attempt in 1..=self.config.max_token_attempts {
            let link =
                ShareLink::issue(self.tokens.generate(), document_id, self.clock.now(), ttl)?;
            match self.links.insert(&link).await? {
                InsertOutcome::Inserted => return Ok(link),
                InsertOutcome::DuplicateToken => {
                    warn!(attempt, "Share token collision, regenerating");
                }
            }
        }
        Err(AppError::conflict(
            "Could not allocate a unique share token",
        ))
    }
}
