//! Neoncache - An in-process, byte-bounded key/value cache
//!
//! Groups answer `get(key)` from an LRU cache and fall back to a
//! caller-supplied loader on miss, caching whatever it returns.

pub mod builder;
pub mod cache;
pub mod config;
pub mod error;
pub mod group;
pub mod loader;
pub mod registry;

pub use builder::GroupBuilder;
pub use cache::{ByteView, CacheStats};
pub use config::Config;
pub use error::{CacheError, Result};
pub use group::Group;
pub use loader::{Loader, LoaderFn};
pub use registry::GroupRegistry;
