//! # docvault-auth
//!
//! Authentication and authorization for DocVault.
//!
//! ## Modules
//!
//! - `jwt`: verification of the auth provider's HS256 bearer tokens, plus
//!   an encoder for development tokens
//! - `gate`: the pure owner-or-admin authorization rule

pub mod gate;
pub mod jwt;

pub use gate::AuthorizationGate;
pub use jwt::{Claims, JwtDecoder, JwtEncoder};
