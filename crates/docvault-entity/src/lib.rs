//! # docvault-entity
//!
//! Row models for the vault's own tables. Share links live in
//! `docvault-core` because the collaborator traits are written against them.

pub mod category;
pub mod document;
pub mod profile;

pub use category::Category;
pub use document::{CreateDocument, Document, DocumentFilter, DocumentStatus};
pub use profile::Profile;
