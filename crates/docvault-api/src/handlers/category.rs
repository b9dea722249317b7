//! Category handler.

use axum::Json;
use axum::extract::State;

use docvault_entity::Category;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/categories
pub async fn list_categories(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Category>>>, ApiError> {
    let categories = state.document_service.categories().await?;
    Ok(Json(ApiResponse::ok(categories)))
}
