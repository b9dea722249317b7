//! Custom Axum extractors.

pub mod auth;
pub mod json;

pub use auth::{AuthUser, MaybeAuthUser};
pub use json::ValidatedJson;
