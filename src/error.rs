//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache groups.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Caller passed an unusable argument, such as an empty key
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The group's loader failed; the loader's error is surfaced as-is
    #[error(transparent)]
    Loader(anyhow::Error),

    /// The group was built without a required collaborator
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CacheError {
    /// Returns the loader's error if this is a loader failure.
    pub fn loader_error(&self) -> Option<&anyhow::Error> {
        match self {
            CacheError::Loader(err) => Some(err),
            _ => None,
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loader_error_is_transparent() {
        let err = CacheError::Loader(anyhow::anyhow!("db unreachable"));
        assert_eq!(err.to_string(), "db unreachable");
        assert!(err.loader_error().is_some());
    }

    #[test]
    fn test_invalid_argument_message() {
        let err = CacheError::InvalidArgument("missing key".to_string());
        assert_eq!(err.to_string(), "Invalid argument: missing key");
        assert!(err.loader_error().is_none());
    }
}
