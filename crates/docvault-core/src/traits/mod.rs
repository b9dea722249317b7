//! Collaborator traits defined in `docvault-core` and implemented by other crates.

pub mod catalog;
pub mod clock;
pub mod directory;
pub mod link_store;

pub use catalog::DocumentCatalog;
pub use clock::{Clock, ManualClock, SystemClock};
pub use directory::AccountDirectory;
pub use link_store::{InsertOutcome, LinkStore};
