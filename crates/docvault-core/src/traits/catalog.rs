//! Document catalog trait (the object store's metadata view).

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::id::{DocumentId, UserId};

/// Ownership and location lookups for stored documents.
#[async_trait]
pub trait DocumentCatalog: Send + Sync + 'static {
    /// Return the owner of a document, or `None` if it does not exist.
    async fn owner_of(&self, document_id: &DocumentId) -> AppResult<Option<UserId>>;

    /// Return the document's current access URL, or `None` if it does not exist.
    async fn resolve_location(&self, document_id: &DocumentId) -> AppResult<Option<String>>;
}
