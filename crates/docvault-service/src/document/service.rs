//! Document listing, creation, and deletion.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use docvault_auth::AuthorizationGate;
use docvault_core::error::AppError;
use docvault_core::result::AppResult;
use docvault_core::types::DocumentId;
use docvault_database::store::DocumentStore;
use docvault_entity::{Category, CreateDocument, Document, DocumentFilter};

use crate::context::RequestContext;

/// Metadata for a document the caller has just uploaded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewDocument {
    /// Original file name.
    pub file_name: String,
    /// Object store access URL.
    pub file_url: String,
    /// Document type.
    pub document_type: Option<String>,
    /// Tags.
    pub tags: Option<Vec<String>>,
    /// Printed expiry date.
    pub expiry_date: Option<NaiveDate>,
    /// Category.
    pub category_id: Option<i32>,
}

/// Document CRUD scoped to the caller.
#[derive(Clone)]
pub struct DocumentService {
    documents: Arc<dyn DocumentStore>,
    gate: AuthorizationGate,
}

impl std::fmt::Debug for DocumentService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentService").finish_non_exhaustive()
    }
}

impl DocumentService {
    /// Creates a new document service.
    pub fn new(documents: Arc<dyn DocumentStore>) -> Self {
        Self {
            documents,
            gate: AuthorizationGate::new(),
        }
    }

    /// Lists documents visible to the caller: everything for admins, only
    /// their own for everyone else.
    pub async fn list(&self, ctx: &RequestContext, filter: DocumentFilter) -> AppResult<Vec<Document>> {
        let filter = DocumentFilter {
            owner: if ctx.is_admin() { None } else { Some(ctx.user_id()) },
            ..filter
        };
        self.documents.list(&filter).await
    }

    /// Records a new document owned by the caller, pending review.
    pub async fn create(&self, ctx: &RequestContext, doc: NewDocument) -> AppResult<Document> {
        let file_name = doc.file_name.trim();
        let file_url = doc.file_url.trim();
        if file_name.is_empty() || file_url.is_empty() {
            return Err(AppError::validation("file_name and file_url are required"));
        }

        let created = self
            .documents
            .create(&CreateDocument {
                user_id: ctx.user_id(),
                file_name: file_name.to_string(),
                file_url: file_url.to_string(),
                document_type: doc.document_type,
                tags: doc.tags,
                expiry_date: doc.expiry_date,
                category_id: doc.category_id,
            })
            .await?;

        info!(
            user_id = %ctx.user_id(),
            document_id = %created.id,
            "Document created"
        );
        Ok(created)
    }

    /// Deletes a document. Its share links go with it.
    pub async fn delete(&self, ctx: &RequestContext, id: &DocumentId) -> AppResult<()> {
        let doc = self
            .documents
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Document not found"))?;

        self.gate
            .require_owner_or_admin(&ctx.principal, ctx.role, Some(&doc.user_id))?;

        if !self.documents.delete(id).await? {
            return Err(AppError::not_found("Document not found"));
        }

        info!(user_id = %ctx.user_id(), document_id = %id, "Document deleted");
        Ok(())
    }

    /// All categories.
    pub async fn categories(&self) -> AppResult<Vec<Category>> {
        self.documents.list_categories().await
    }
}
