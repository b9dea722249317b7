//! Share link minting, redemption, revocation and sweeping.

pub mod link;
pub mod redeem;
pub mod service;
pub mod sweeper;

pub use link::{RandomTokenGenerator, TokenGenerator};
pub use redeem::{RedemptionService, RedirectTarget};
pub use service::{IssuedShareLink, ShareService};
pub use sweeper::ExpiredLinkSweeper;
