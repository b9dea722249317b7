//! Document domain entities.

pub mod model;
pub mod status;

pub use model::{CreateDocument, Document, DocumentFilter};
pub use status::DocumentStatus;
