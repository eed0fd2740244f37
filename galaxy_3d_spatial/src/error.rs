//! Error types for the Galaxy3D spatial crate
//!
//! Culling is a best-effort optimization, so most inapplicable input is
//! filtered silently. Errors are reserved for programmer mistakes:
//! an unusable octree configuration or an invalid argument.

use std::fmt;

/// Result type for Galaxy3D spatial operations
pub type Result<T> = std::result::Result<T, Error>;

/// Galaxy3D spatial errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Octree construction parameters are unusable (depth, capacity, bounds)
    InvalidConfig(String),

    /// An argument does not refer to anything valid (stale key, etc.)
    InvalidArgument(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Log an error with file:line information and build the matching `Error`.
///
/// # Example
///
/// ```no_run
/// # use galaxy_3d_spatial::spatial_err;
/// let err = spatial_err!("galaxy3d::Octree", InvalidConfig, "max_depth must be >= 1, got {}", 0);
/// ```
#[macro_export]
macro_rules! spatial_err {
    ($source:expr, $variant:ident, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::spatial_error!($source, "{}", message);
        $crate::galaxy3d::Error::$variant(message)
    }};
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
