//! Document repository implementation.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use docvault_core::error::{AppError, ErrorKind};
use docvault_core::result::AppResult;
use docvault_core::traits::DocumentCatalog;
use docvault_core::types::{DocumentId, UserId};
use docvault_entity::{Category, CreateDocument, Document, DocumentFilter, DocumentStatus};

use crate::store::DocumentStore;

use super::category::CategoryRepository;

const DOCUMENT_COLUMNS: &str = "id, user_id, file_name, file_url, document_type, tags, \
     expiry_date, status, category_id, created_at";

/// Repository for the `documents` table.
#[derive(Debug, Clone)]
pub struct DocumentRepository {
    pool: PgPool,
}

impl DocumentRepository {
    /// Create a new document repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentCatalog for DocumentRepository {
    async fn owner_of(&self, document_id: &DocumentId) -> AppResult<Option<UserId>> {
        sqlx::query_scalar::<_, UserId>("SELECT user_id FROM documents WHERE id = $1")
            .bind(document_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to look up document owner", e)
            })
    }

    async fn resolve_location(&self, document_id: &DocumentId) -> AppResult<Option<String>> {
        sqlx::query_scalar::<_, String>("SELECT file_url FROM documents WHERE id = $1")
            .bind(document_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to resolve document location", e)
            })
    }
}

#[async_trait]
impl DocumentStore for DocumentRepository {
    async fn find_by_id(&self, id: &DocumentId) -> AppResult<Option<Document>> {
        sqlx::query_as::<_, Document>(&format!(
            "SELECT {DOCUMENT_COLUMNS} FROM documents WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find document", e))
    }

    async fn list(&self, filter: &DocumentFilter) -> AppResult<Vec<Document>> {
        let mut qb: QueryBuilder<'_, Postgres> =
            QueryBuilder::new(format!("SELECT {DOCUMENT_COLUMNS} FROM documents WHERE TRUE"));

        if let Some(owner) = filter.owner {
            qb.push(" AND user_id = ").push_bind(owner);
        }
        if let Some(ref tag) = filter.tag {
            qb.push(" AND ").push_bind(tag.clone()).push(" = ANY(tags)");
        }
        if let Some(ref document_type) = filter.document_type {
            qb.push(" AND document_type = ").push_bind(document_type.clone());
        }
        if let Some(category_id) = filter.category_id {
            qb.push(" AND category_id = ").push_bind(category_id);
        }
        qb.push(" ORDER BY created_at DESC");

        qb.build_query_as::<Document>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list documents", e))
    }

    async fn create(&self, data: &CreateDocument) -> AppResult<Document> {
        let result = sqlx::query_as::<_, Document>(&format!(
            "INSERT INTO documents (user_id, file_name, file_url, document_type, tags, \
             expiry_date, status, category_id) VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {DOCUMENT_COLUMNS}"
        ))
        .bind(data.user_id)
        .bind(&data.file_name)
        .bind(&data.file_url)
        .bind(&data.document_type)
        .bind(&data.tags)
        .bind(data.expiry_date)
        .bind(DocumentStatus::Pending)
        .bind(data.category_id)
        .fetch_one(&self.pool)
        .await;

        result.map_err(|e| match e.as_database_error() {
            Some(db) if db.is_foreign_key_violation() => {
                AppError::validation("Unknown owner profile or category")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create document", e),
        })
    }

    async fn delete(&self, id: &DocumentId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM documents WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete document", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn update_status(&self, id: &DocumentId, status: DocumentStatus) -> AppResult<bool> {
        let result = sqlx::query("UPDATE documents SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update document status", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_categories(&self) -> AppResult<Vec<Category>> {
        CategoryRepository::new(self.pool.clone()).list().await
    }
}
