//! Document entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use docvault_core::types::{DocumentId, UserId};

use super::status::DocumentStatus;

/// An uploaded identity document's metadata.
///
/// The bytes live in the object store; `file_url` is where they can be
/// fetched from right now.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Document {
    /// Unique document identifier.
    pub id: DocumentId,
    /// Owning account.
    pub user_id: UserId,
    /// Original file name.
    pub file_name: String,
    /// Object store access URL.
    pub file_url: String,
    /// Free-form document type, e.g. "passport".
    pub document_type: Option<String>,
    /// User-assigned tags.
    pub tags: Option<Vec<String>>,
    /// Expiry date printed on the document.
    pub expiry_date: Option<NaiveDate>,
    /// Admin review status.
    pub status: DocumentStatus,
    /// Category, if assigned.
    pub category_id: Option<i32>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl Document {
    /// Whether this document is owned by `user_id`.
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        self.user_id == *user_id
    }

    /// Whether the document matches every filter that is set.
    pub fn matches(&self, filter: &DocumentFilter) -> bool {
        if let Some(owner) = filter.owner {
            if self.user_id != owner {
                return false;
            }
        }
        if let Some(ref tag) = filter.tag {
            let has_tag = self
                .tags
                .as_ref()
                .is_some_and(|tags| tags.iter().any(|t| t == tag));
            if !has_tag {
                return false;
            }
        }
        if let Some(ref document_type) = filter.document_type {
            if self.document_type.as_deref() != Some(document_type.as_str()) {
                return false;
            }
        }
        if let Some(category_id) = filter.category_id {
            if self.category_id != Some(category_id) {
                return false;
            }
        }
        true
    }
}

/// Data required to create a new document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDocument {
    /// Owning account.
    pub user_id: UserId,
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

/// Listing filters. `owner = None` lists every account's documents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentFilter {
    /// Restrict to one owner.
    pub owner: Option<UserId>,
    /// Require this tag.
    pub tag: Option<String>,
    /// Require this document type.
    pub document_type: Option<String>,
    /// Require this category.
    pub category_id: Option<i32>,
}
