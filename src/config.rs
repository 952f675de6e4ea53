//! Configuration Module
//!
//! Handles loading cache group settings from environment variables.

use std::env;

/// Default byte budget for a group's cache (64 MiB).
pub const DEFAULT_CACHE_BYTES: u64 = 64 * 1024 * 1024;

/// Cache group configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Byte budget for each group's cache; `0` means unbounded
    pub cache_bytes: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `NEONCACHE_CACHE_BYTES` - Cache budget in bytes (default: 64 MiB)
    pub fn from_env() -> Self {
        Self {
            cache_bytes: env::var("NEONCACHE_CACHE_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CACHE_BYTES),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_bytes: DEFAULT_CACHE_BYTES,
        }
    }
}
