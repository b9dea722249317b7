//! Admin handlers.

use axum::Json;
use axum::extract::{Path, State};

use docvault_core::error::AppError;
use docvault_core::types::{Role, UserId};
use docvault_entity::DocumentStatus;

use crate::dto::request::{ReviewDocumentRequest, SetRoleRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /api/admin/approve
pub async fn review_document(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<ReviewDocumentRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let status: DocumentStatus = req
        .status
        .parse()
        .map_err(|_| AppError::validation("status must be Approved or Rejected"))?;

    state
        .admin_service
        .review_document(&auth, &req.id, status)
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse::new(format!(
        "Document {status}"
    )))))
}

/// PUT /api/admin/users/{id}/role
pub async fn set_user_role(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<UserId>,
    ValidatedJson(req): ValidatedJson<SetRoleRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    let role: Role = req.role.parse()?;
    state.admin_service.set_user_role(&auth, &id, role).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(format!(
        "Role set to {role}"
    )))))
}
