//! Convenience result type alias for the portfolio API.

use crate::error::AppError;

/// A specialized `Result` type for portfolio operations.
pub type AppResult<T> = Result<T, AppError>;
