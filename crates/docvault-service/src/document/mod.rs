//! Document metadata management.

pub mod service;

pub use service::{DocumentService, NewDocument};
