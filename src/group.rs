//! Cache Group Module
//!
//! A named cache that fills itself from a loader on miss.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::builder::GroupBuilder;
use crate::cache::{ByteView, CacheStats, CacheStore, StatsCounters};
use crate::error::{CacheError, Result};
use crate::loader::Loader;

// == Group ==
/// A named cache namespace with its own loader and byte budget.
///
/// Lookups are served from the group's [`CacheStore`]; misses call the
/// loader outside the store's lock and write the result back.
///
/// Concurrent misses on the same key are not coalesced: every caller that
/// misses runs the loader, and the last write wins.
pub struct Group {
    name: String,
    loader: Arc<dyn Loader>,
    main_cache: CacheStore,
    stats: StatsCounters,
}

impl Group {
    /// Starts building a group called `name`.
    pub fn builder(name: impl Into<String>) -> GroupBuilder {
        GroupBuilder::new(name)
    }

    pub(crate) fn new(name: String, cache_bytes: u64, loader: Arc<dyn Loader>) -> Self {
        Self {
            name,
            loader,
            main_cache: CacheStore::new(cache_bytes),
            stats: StatsCounters::default(),
        }
    }

    /// Returns the group's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the group's byte budget.
    pub fn cache_bytes(&self) -> u64 {
        self.main_cache.cache_bytes()
    }

    // == Get ==
    /// Returns the value for `key`, loading and caching it on a miss.
    ///
    /// # Errors
    /// - [`CacheError::InvalidArgument`] if `key` is empty
    /// - [`CacheError::Loader`] if the loader fails; nothing is cached
    pub fn get(&self, key: &str) -> Result<ByteView> {
        if key.is_empty() {
            return Err(CacheError::InvalidArgument("missing key".to_string()));
        }

        if let Some(value) = self.main_cache.get(key) {
            self.stats.record_hit();
            debug!(group = %self.name, key, "cache hit");
            return Ok(value);
        }

        self.stats.record_miss();
        debug!(group = %self.name, key, "cache miss");
        self.load(key)
    }

    // == Stats ==
    /// Returns a snapshot of the group's counters.
    pub fn stats(&self) -> CacheStats {
        self.stats
            .snapshot(self.main_cache.len(), self.main_cache.used_bytes())
    }

    /// Resolves a miss. Only the local loader is consulted.
    fn load(&self, key: &str) -> Result<ByteView> {
        self.get_locally(key)
    }

    fn get_locally(&self, key: &str) -> Result<ByteView> {
        let bytes = match self.loader.get(key) {
            Ok(bytes) => bytes,
            Err(err) => {
                self.stats.record_load_error();
                warn!(group = %self.name, key, error = %err, "loader failed");
                return Err(CacheError::Loader(err));
            }
        };

        // The loader hands over ownership, so the view cannot alias its buffer.
        let value = ByteView::from(bytes);
        self.stats.record_load();
        self.populate_cache(key, value.clone());
        Ok(value)
    }

    fn populate_cache(&self, key: &str, value: ByteView) {
        debug!(group = %self.name, key, bytes = value.len(), "populating cache");
        self.main_cache.add(key, value);
    }
}

impl fmt::Debug for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Group")
            .field("name", &self.name)
            .field("main_cache", &self.main_cache)
            .finish_non_exhaustive()
    }
}
