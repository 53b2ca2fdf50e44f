//! Convenience result type alias.

use crate::error::AppError;

/// A specialized `Result` type for studio operations.
///
/// Every crate in the workspace returns `AppResult<T>` so that errors flow
/// through `?` into a single HTTP mapping at the API boundary.
pub type AppResult<T> = Result<T, AppError>;
