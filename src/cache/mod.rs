//! Cache Module
//!
//! Provides the byte-bounded LRU engine, its thread-safe store and the
//! immutable values they hold.

mod byteview;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use byteview::ByteView;
pub use lru::{ByteSize, EvictionCallback, LruCache};
pub use stats::CacheStats;
pub(crate) use stats::StatsCounters;
pub use store::CacheStore;
