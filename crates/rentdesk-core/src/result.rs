//! Convenience result type alias for RentDesk.

use crate::error::AppError;

/// A specialized `Result` type for RentDesk operations.
pub type AppResult<T> = Result<T, AppError>;
