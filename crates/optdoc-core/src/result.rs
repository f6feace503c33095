//! Result type alias for tree completion operations

use crate::error::OptdocError;

/// Standard Result type for tree completion operations
pub type Result<T> = std::result::Result<T, OptdocError>;
