//! Document handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use docvault_core::types::DocumentId;
use docvault_entity::Document;

use crate::dto::request::{CreateDocumentRequest, DocumentListQuery};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// GET /api/documents
pub async fn list_documents(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<DocumentListQuery>,
) -> Result<Json<ApiResponse<Vec<Document>>>, ApiError> {
    let documents = state.document_service.list(&auth, query.into()).await?;
    Ok(Json(ApiResponse::ok(documents)))
}

/// POST /api/documents
pub async fn create_document(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateDocumentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Document>>), ApiError> {
    let document = state.document_service.create(&auth, req.into()).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(document))))
}

/// DELETE /api/documents/{id}
pub async fn delete_document(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DocumentId>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.document_service.delete(&auth, &id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Document deleted"))))
}
