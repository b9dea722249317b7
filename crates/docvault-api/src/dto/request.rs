//! Request DTOs with validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use docvault_core::types::DocumentId;
use docvault_entity::DocumentFilter;
use docvault_service::document::NewDocument;

/// Create share link request body.
///
/// Both fields are optional at the wire level so the service can report a
/// missing document ID as a validation error after authentication.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateShareRequest {
    /// Document to share.
    #[serde(alias = "documentId")]
    pub document_id: Option<String>,
    /// Link lifetime in minutes.
    #[serde(alias = "ttlMinutes", alias = "expires_in_minutes")]
    pub ttl_minutes: Option<i64>,
}

/// Create document request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateDocumentRequest {
    /// Original file name.
    #[validate(length(min = 1, max = 255, message = "file_name is required"))]
    pub file_name: String,
    /// Object store access URL.
    #[validate(length(min = 1, message = "file_url is required"))]
    pub file_url: String,
    /// Document type.
    pub document_type: Option<String>,
    /// Tags.
    pub tags: Option<Vec<String>>,
    /// Printed expiry date (YYYY-MM-DD).
    pub expiry_date: Option<NaiveDate>,
    /// Category.
    pub category_id: Option<i32>,
}

impl From<CreateDocumentRequest> for NewDocument {
    fn from(req: CreateDocumentRequest) -> Self {
        Self {
            file_name: req.file_name,
            file_url: req.file_url,
            document_type: req.document_type,
            tags: req.tags,
            expiry_date: req.expiry_date,
            category_id: req.category_id,
        }
    }
}

/// Document listing query parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentListQuery {
    /// Require this tag.
    pub tag: Option<String>,
    /// Require this document type.
    pub document_type: Option<String>,
    /// Require this category.
    pub category_id: Option<i32>,
}

impl From<DocumentListQuery> for DocumentFilter {
    fn from(q: DocumentListQuery) -> Self {
        Self {
            owner: None,
            tag: q.tag.filter(|t| !t.is_empty()),
            document_type: q.document_type.filter(|t| !t.is_empty()),
            category_id: q.category_id,
        }
    }
}

/// Admin review request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReviewDocumentRequest {
    /// Document to review.
    pub id: DocumentId,
    /// `Approved` or `Rejected`.
    #[validate(length(min = 1, message = "status is required"))]
    pub status: String,
}

/// Role assignment request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SetRoleRequest {
    /// `user` or `admin`.
    #[validate(length(min = 1, message = "role is required"))]
    pub role: String,
}
