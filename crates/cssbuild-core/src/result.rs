//! Result type alias for cssbuild operations

use crate::error::CssBuildError;

/// Standard Result type for cssbuild operations
pub type Result<T> = std::result::Result<T, CssBuildError>;
