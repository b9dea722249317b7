//! Convenience result type alias for DocVault.

use crate::error::AppError;

/// A specialized `Result` type for DocVault operations.
pub type AppResult<T> = Result<T, AppError>;
