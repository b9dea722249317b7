//! Document review status.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use docvault_core::AppError;

/// Admin review state of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "document_status")]
pub enum DocumentStatus {
    /// Awaiting admin review.
    #[default]
    Pending,
    /// Accepted by an admin.
    Approved,
    /// Rejected by an admin.
    Rejected,
}

impl DocumentStatus {
    /// Whether this status is a final review decision an admin may set.
    pub fn is_decision(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }

    /// Return the status as written in storage and on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DocumentStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Self::Pending),
            "Approved" => Ok(Self::Approved),
            "Rejected" => Ok(Self::Rejected),
            _ => Err(AppError::validation(format!("Invalid document status: '{s}'"))),
        }
    }
}
