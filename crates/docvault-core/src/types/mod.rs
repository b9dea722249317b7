//! Shared value types: typed identifiers, roles, principals, and share links.

pub mod id;
pub mod principal;
pub mod role;
pub mod share;

pub use id::{DocumentId, UserId};
pub use principal::Principal;
pub use role::Role;
pub use share::{LinkState, ShareLink};
