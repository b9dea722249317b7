//! Route definitions for the DocVault HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::handlers;
use crate::state::AppState;

/// Build the API router and bind it to `state`.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(share_routes())
        .merge(document_routes())
        .merge(admin_routes())
        .merge(health_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Share endpoints: create, redeem, revoke
fn share_routes() -> Router<AppState> {
    Router::new()
        .route("/shares", post(handlers::share::create_share))
        .route(
            "/shares/{token}",
            get(handlers::share::redeem_share).delete(handlers::share::revoke_share),
        )
}

/// Document endpoints: list, create, delete, categories
fn document_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/documents",
            get(handlers::document::list_documents).post(handlers::document::create_document),
        )
        .route("/documents/{id}", delete(handlers::document::delete_document))
        .route("/categories", get(handlers::category::list_categories))
}

/// Admin endpoints: document review, role assignment
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/approve", post(handlers::admin::review_document))
        .route("/admin/users/{id}/role", put(handlers::admin::set_user_role))
}

/// Health check endpoint (no auth)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
