//! Document category.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A named grouping for documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Category {
    /// Category identifier.
    pub id: i32,
    /// Display name.
    pub name: String,
}
