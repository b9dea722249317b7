//! Share link handlers: create, redeem, revoke.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::http::header::LOCATION;
use axum::response::{IntoResponse, Response};
use tracing::warn;

use docvault_core::error::{AppError, ErrorKind};
use docvault_service::IssuedShareLink;

use crate::dto::request::CreateShareRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, MaybeAuthUser};
use crate::state::AppState;

/// POST /api/shares
pub async fn create_share(
    State(state): State<AppState>,
    MaybeAuthUser(principal): MaybeAuthUser,
    body: Result<Json<CreateShareRequest>, JsonRejection>,
) -> Result<Json<IssuedShareLink>, ApiError> {
    let req = match body {
        Ok(Json(req)) => req,
        // Anonymous callers get 401 regardless of the body.
        Err(_) if principal.is_none() => CreateShareRequest::default(),
        Err(rejection) => return Err(AppError::validation(rejection.body_text()).into()),
    };

    let issued = state
        .share_service
        .create_share_link(principal.as_ref(), req.document_id.as_deref(), req.ttl_minutes)
        .await?;

    Ok(Json(issued))
}

/// GET /api/shares/{token}
///
/// Unauthenticated. Redirects with `302 Found` to the document's current
/// location. Failure bodies are generic; the precise reason is only logged.
pub async fn redeem_share(State(state): State<AppState>, Path(token): Path<String>) -> Response {
    match state.redemption_service.redeem(&token).await {
        Ok(target) => (StatusCode::FOUND, [(LOCATION, target.location)]).into_response(),
        Err(err) => {
            let kind = err.kind;
            let public = match kind {
                ErrorKind::NotFound => AppError::not_found("Share link not found"),
                ErrorKind::Expired => AppError::expired("Share link expired"),
                _ => return ApiError(err).into_response(),
            };
            warn!(kind = %kind, reason = %err.message, "Share link redemption refused");
            ApiError(public).into_response()
        }
    }
}

/// DELETE /api/shares/{token}
pub async fn revoke_share(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(token): Path<String>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.share_service.revoke_share_link(&auth, &token).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Share link revoked"))))
}
