//! Result type alias for EasyShop.

use crate::StoreError;

/// A specialized `Result` type for data access operations.
pub type StoreResult<T> = Result<T, StoreError>;
