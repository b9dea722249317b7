//! # docvault-database
//!
//! PostgreSQL connection management, embedded migrations, and the sqlx
//! repositories backing every storage trait. The `memory` module provides
//! `DashMap`-backed equivalents used by tests and single-node development.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use store::{DocumentStore, ProfileStore};
