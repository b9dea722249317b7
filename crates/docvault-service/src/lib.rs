//! # docvault-service
//!
//! Business logic service layer for DocVault. Each service orchestrates
//! the collaborator traits from `docvault-core`, the storage traits from
//! `docvault-database`, and the authorization gate to implement one
//! application-level use case.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod admin;
pub mod context;
pub mod document;
pub mod share;

pub use admin::AdminService;
pub use context::RequestContext;
pub use document::DocumentService;
pub use share::{
    ExpiredLinkSweeper, IssuedShareLink, RandomTokenGenerator, RedemptionService, RedirectTarget,
    ShareService, TokenGenerator,
};

#[cfg(test)]
pub(crate) mod testing;
