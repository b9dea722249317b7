//! In-memory document catalog and document store.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use docvault_core::result::AppResult;
use docvault_core::traits::DocumentCatalog;
use docvault_core::types::{DocumentId, UserId};
use docvault_entity::{Category, CreateDocument, Document, DocumentFilter, DocumentStatus};

use crate::store::DocumentStore;

/// Documents keyed by ID, plus the seeded category list.
#[derive(Debug)]
pub struct MemoryDocumentStore {
    documents: DashMap<DocumentId, Document>,
    categories: Vec<Category>,
}

impl Default for MemoryDocumentStore {
    fn default() -> Self {
        // Same IDs the initial migration seeds.
        let mut categories: Vec<Category> = ["Identity", "Travel", "Financial", "Medical"]
            .iter()
            .zip(1..)
            .map(|(name, id)| Category {
                id,
                name: (*name).to_string(),
            })
            .collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Self {
            documents: DashMap::new(),
            categories,
        }
    }
}

impl MemoryDocumentStore {
    /// Create a store with the default categories.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pending document owned by `owner` and return its ID.
    pub fn add(&self, owner: UserId, file_name: &str) -> DocumentId {
        let id = DocumentId::new();
        self.documents.insert(
            id,
            Document {
                id,
                user_id: owner,
                file_name: file_name.to_string(),
                file_url: format!("https://objects.docvault.local/{owner}/{file_name}"),
                document_type: None,
                tags: None,
                expiry_date: None,
                status: DocumentStatus::Pending,
                category_id: None,
                created_at: Utc::now(),
            },
        );
        id
    }
}

#[async_trait]
impl DocumentCatalog for MemoryDocumentStore {
    async fn owner_of(&self, document_id: &DocumentId) -> AppResult<Option<UserId>> {
        Ok(self.documents.get(document_id).map(|d| d.user_id))
    }

    async fn resolve_location(&self, document_id: &DocumentId) -> AppResult<Option<String>> {
        Ok(self.documents.get(document_id).map(|d| d.file_url.clone()))
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn find_by_id(&self, id: &DocumentId) -> AppResult<Option<Document>> {
        Ok(self.documents.get(id).map(|d| d.value().clone()))
    }

    async fn list(&self, filter: &DocumentFilter) -> AppResult<Vec<Document>> {
        let mut docs: Vec<Document> = self
            .documents
            .iter()
            .filter(|d| d.matches(filter))
            .map(|d| d.value().clone())
            .collect();
        docs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(docs)
    }

    async fn create(&self, data: &CreateDocument) -> AppResult<Document> {
        let doc = Document {
            id: DocumentId::new(),
            user_id: data.user_id,
            file_name: data.file_name.clone(),
            file_url: data.file_url.clone(),
            document_type: data.document_type.clone(),
            tags: data.tags.clone(),
            expiry_date: data.expiry_date,
            status: DocumentStatus::Pending,
            category_id: data.category_id,
            created_at: Utc::now(),
        };
        self.documents.insert(doc.id, doc.clone());
        Ok(doc)
    }

    async fn delete(&self, id: &DocumentId) -> AppResult<bool> {
        Ok(self.documents.remove(id).is_some())
    }

    async fn update_status(&self, id: &DocumentId, status: DocumentStatus) -> AppResult<bool> {
        Ok(match self.documents.get_mut(id) {
            Some(mut doc) => {
                doc.status = status;
                true
            }
            None => false,
        })
    }

    async fn list_categories(&self) -> AppResult<Vec<Category>> {
        Ok(self.categories.clone())
    }
}
