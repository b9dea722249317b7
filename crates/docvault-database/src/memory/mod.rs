//! In-memory stores backed by `DashMap`.
//!
//! Behaviourally equivalent to the sqlx repositories, including the
//! token-uniqueness and conditional-update semantics. Used by tests and by
//! anything that wants to run the service without PostgreSQL.

mod directory;
mod document;
mod link_store;

pub use directory::MemoryDirectory;
pub use document::MemoryDocumentStore;
pub use link_store::MemoryLinkStore;
