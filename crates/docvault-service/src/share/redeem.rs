//! Share link redemption.

use std::sync::Arc;

use tracing::{debug, info};

use docvault_core::config::RedemptionPolicy;
use docvault_core::error::AppError;
use docvault_core::result::AppResult;
use docvault_core::traits::{Clock, DocumentCatalog, LinkStore};
use docvault_core::types::{DocumentId, LinkState};

/// Where a successful redemption sends the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectTarget {
    /// The shared document.
    pub document_id: DocumentId,
    /// The document's current access location.
    pub location: String,
}

/// Turns a token into the current location of the shared document.
///
/// No authentication: possession of the token is the capability.
#[derive(Clone)]
pub struct RedemptionService {
    links: Arc<dyn LinkStore>,
    catalog: Arc<dyn DocumentCatalog>,
    clock: Arc<dyn Clock>,
    policy: RedemptionPolicy,
}

impl std::fmt::Debug for RedemptionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedemptionService")
            .field("clock", &self.clock)
            .field("policy", &self.policy)
            .finish()
    }
}

impl RedemptionService {
    /// Creates a new redemption service.
    pub fn new(
        links: Arc<dyn LinkStore>,
        catalog: Arc<dyn DocumentCatalog>,
        clock: Arc<dyn Clock>,
        policy: RedemptionPolicy,
    ) -> Self {
        Self {
            links,
            catalog,
            clock,
            policy,
        }
    }

    /// Redeems a token.
    ///
    /// Unknown tokens and vanished documents are `NotFound`; revoked and
    /// expired links are `Expired`. The document is looked up again on
    /// every call, so a deleted document stops redeeming immediately.
    pub async fn redeem(&self, token: &str) -> AppResult<RedirectTarget> {
        let token = token.trim();
        if token.is_empty() {
            return Err(AppError::not_found("Share link not found"));
        }

        let link = self
            .links
            .find_by_token(token)
            .await?
            .ok_or_else(|| AppError::not_found("Share link not found"))?;

        let now = self.clock.now();
        match link.state_at(now) {
            LinkState::Valid => {}
            LinkState::Revoked => {
                debug!(document_id = %link.document_id, "Redeeming revoked link");
                return Err(AppError::expired("Share link has been revoked"));
            }
            LinkState::Expired => {
                return Err(AppError::expired("Share link has expired"));
            }
        }

        let location = self
            .catalog
            .resolve_location(&link.document_id)
            .await?
            .ok_or_else(|| AppError::not_found("Shared document no longer exists"))?;

        if self.policy == RedemptionPolicy::SingleUse && !self.links.consume(token, now).await? {
            // Lost the race to a concurrent redemption.
            return Err(AppError::expired("Share link has already been used"));
        }

        info!(document_id = %link.document_id, "Share link redeemed");

        Ok(RedirectTarget {
            document_id: link.document_id,
            location,
        })
    }
}
