//! Administrative operations.

use std::sync::Arc;

use tracing::info;

use docvault_auth::AuthorizationGate;
use docvault_core::error::AppError;
use docvault_core::result::AppResult;
use docvault_core::types::{DocumentId, Role, UserId};
use docvault_database::store::{DocumentStore, ProfileStore};
use docvault_entity::DocumentStatus;

use crate::context::RequestContext;

/// Admin-only document review and role management.
#[derive(Clone)]
pub struct AdminService {
    documents: Arc<dyn DocumentStore>,
    profiles: Arc<dyn ProfileStore>,
    gate: AuthorizationGate,
}

impl std::fmt::Debug for AdminService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminService").finish_non_exhaustive()
    }
}

impl AdminService {
    /// Creates a new admin service.
    pub fn new(documents: Arc<dyn DocumentStore>, profiles: Arc<dyn ProfileStore>) -> Self {
        Self {
            documents,
            profiles,
            gate: AuthorizationGate::new(),
        }
    }

    /// Approves or rejects a document.
    pub async fn review_document(
        &self,
        ctx: &RequestContext,
        id: &DocumentId,
        status: DocumentStatus,
    ) -> AppResult<()> {
        self.gate.require_admin(ctx.role)?;

        if !status.is_decision() {
            return Err(AppError::validation("status must be Approved or Rejected"));
        }
        if !self.documents.update_status(id, status).await? {
            return Err(AppError::not_found("Document not found"));
        }

        info!(
            admin_id = %ctx.user_id(),
            document_id = %id,
            status = %status,
            "Document reviewed"
        );
        Ok(())
    }

    /// Changes an account's role.
    pub async fn set_user_role(&self, ctx: &RequestContext, user_id: &UserId, role: Role) -> AppResult<()> {
        self.gate.require_admin(ctx.role)?;

        if !self.profiles.update_role(user_id, role).await? {
            return Err(AppError::not_found("User not found"));
        }

        info!(
            admin_id = %ctx.user_id(),
            user_id = %user_id,
            role = %role,
            "User role changed"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use docvault_core::error::ErrorKind;
    use docvault_core::traits::AccountDirectory;
    use docvault_core::types::Principal;
    use docvault_database::memory::{MemoryDirectory, MemoryDocumentStore};

    use super::*;

    struct Setup {
        documents: Arc<MemoryDocumentStore>,
        directory: Arc<MemoryDirectory>,
        service: AdminService,
    }

    fn setup() -> Setup {
        let documents = Arc::new(MemoryDocumentStore::new());
        let directory = Arc::new(MemoryDirectory::new());
        let service = AdminService::new(documents.clone(), directory.clone());
        Setup {
            documents,
            directory,
            service,
        }
    }

    fn admin() -> RequestContext {
        RequestContext::new(Principal::new(UserId::new()), Role::Admin)
    }

    #[tokio::test]
    async fn test_review_document() {
        let s = setup();
        let id = s.documents.add(UserId::new(), "a.pdf");
        s.service
            .review_document(&admin(), &id, DocumentStatus::Approved)
            .await
            .unwrap();
        let doc = s.documents.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(doc.status, DocumentStatus::Approved);
    }

    #[tokio::test]
    async fn test_review_rejects_pending_and_unknown() {
        let s = setup();
        let id = s.documents.add(UserId::new(), "a.pdf");
        let err = s
            .service
            .review_document(&admin(), &id, DocumentStatus::Pending)
            .await
            .unwrap_err();
        assert!(err.is(ErrorKind::Validation));

        let err = s
            .service
            .review_document(&admin(), &DocumentId::new(), DocumentStatus::Rejected)
            .await
            .unwrap_err();
        assert!(err.is(ErrorKind::NotFound));
    }

    #[tokio::test]
    async fn test_non_admin_is_forbidden() {
        let s = setup();
        let user = RequestContext::new(Principal::new(UserId::new()), Role::User);
        let id = s.documents.add(UserId::new(), "a.pdf");
        let err = s
            .service
            .review_document(&user, &id, DocumentStatus::Approved)
            .await
            .unwrap_err();
        assert!(err.is(ErrorKind::Forbidden));

        let err = s
            .service
            .set_user_role(&user, &user.user_id(), Role::Admin)
            .await
            .unwrap_err();
        assert!(err.is(ErrorKind::Forbidden));
    }

    #[tokio::test]
    async fn test_set_user_role() {
        let s = setup();
        let id = s.directory.add("u@example.com", Role::User);
        s.service.set_user_role(&admin(), &id, Role::Admin).await.unwrap();
        assert_eq!(s.directory.role_of(&id).await.unwrap(), Some(Role::Admin));

        let err = s
            .service
            .set_user_role(&admin(), &UserId::new(), Role::Admin)
            .await
            .unwrap_err();
        assert!(err.is(ErrorKind::NotFound));
    }
}
