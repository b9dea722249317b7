//! Bearer-token extractors.
//!
//! `AuthUser` rejects unauthenticated requests; `MaybeAuthUser` lets the
//! handler decide, which the share endpoint needs to keep its error order.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use docvault_core::error::AppError;
use docvault_core::types::Principal;
use docvault_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)
            .ok_or_else(|| AppError::unauthorized("Missing or malformed Authorization header"))?;

        let principal = state.jwt_decoder.authenticate(token)?;
        let ctx = RequestContext::resolve(principal, state.directory.as_ref()).await?;

        Ok(AuthUser(ctx))
    }
}

/// The verified caller, or `None` when no valid bearer token was sent.
#[derive(Debug, Clone)]
pub struct MaybeAuthUser(pub Option<Principal>);

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let principal = bearer_token(parts).and_then(|token| state.jwt_decoder.authenticate(token).ok());
        Ok(MaybeAuthUser(principal))
    }
}

/// Pulls the token out of `Authorization: Bearer <token>`.
fn bearer_token(parts: &Parts) -> Option<&str> {
    let value = parts.headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}
