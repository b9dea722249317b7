//! Storage traits for the vault's own tables.
//!
//! The share core only needs the read-side collaborator traits from
//! `docvault-core`; these cover the document and profile management
//! endpoints. Each is implemented by a sqlx repository and an in-memory store.

use async_trait::async_trait;

use docvault_core::result::AppResult;
use docvault_core::types::{DocumentId, Role, UserId};
use docvault_entity::{Category, CreateDocument, Document, DocumentFilter, DocumentStatus, Profile};

/// Document metadata CRUD.
#[async_trait]
pub trait DocumentStore: Send + Sync + 'static {
    /// Find a document by ID.
    async fn find_by_id(&self, id: &DocumentId) -> AppResult<Option<Document>>;

    /// List documents matching the filter, newest first.
    async fn list(&self, filter: &DocumentFilter) -> AppResult<Vec<Document>>;

    /// Create a document with `Pending` status.
    async fn create(&self, data: &CreateDocument) -> AppResult<Document>;

    /// Delete a document. Returns `true` if a row was removed.
    async fn delete(&self, id: &DocumentId) -> AppResult<bool>;

    /// Set the review status. Returns `true` if the document exists.
    async fn update_status(&self, id: &DocumentId, status: DocumentStatus) -> AppResult<bool>;

    /// List all categories ordered by name.
    async fn list_categories(&self) -> AppResult<Vec<Category>>;
}

/// Account profile access.
#[async_trait]
pub trait ProfileStore: Send + Sync + 'static {
    /// Find a profile by ID.
    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<Profile>>;

    /// Change a profile's role. Returns `true` if the profile exists.
    async fn update_role(&self, id: &UserId, role: Role) -> AppResult<bool>;

    /// Insert a profile, or update e-mail, name, and role if it exists.
    async fn upsert(
        &self,
        id: &UserId,
        email: &str,
        full_name: Option<&str>,
        role: Role,
    ) -> AppResult<Profile>;
}
