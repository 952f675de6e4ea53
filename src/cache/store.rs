//! Cache Store Module
//!
//! Thread-safe wrapper that owns a lazily built LRU engine behind a mutex.

use parking_lot::Mutex;

use crate::cache::{ByteView, LruCache};

// == Cache Store ==
/// Mutex-guarded LRU cache of [`ByteView`] values.
///
/// The engine is only allocated by the first `add`; until then every
/// lookup is a miss.
#[derive(Debug)]
pub struct CacheStore {
    /// `None` until the first write
    lru: Mutex<Option<LruCache<ByteView>>>,
    /// Byte budget handed to the engine, `0` = unbounded
    cache_bytes: u64,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store with a fixed byte budget.
    pub fn new(cache_bytes: u64) -> Self {
        Self {
            lru: Mutex::new(None),
            cache_bytes,
        }
    }

    // == Add ==
    /// Stores `value` under `key`, building the engine on first use.
    pub fn add(&self, key: &str, value: ByteView) {
        let mut guard = self.lru.lock();
        guard
            .get_or_insert_with(|| LruCache::new(self.cache_bytes, None))
            .add(key, value);
    }

    // == Get ==
    /// Retrieves a value by key, marking it most recently used.
    pub fn get(&self, key: &str) -> Option<ByteView> {
        let mut guard = self.lru.lock();
        guard.as_mut()?.get(key).cloned()
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.lru.lock().as_ref().map_or(0, LruCache::len)
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the bytes currently held.
    pub fn used_bytes(&self) -> u64 {
        self.lru.lock().as_ref().map_or(0, LruCache::used_bytes)
    }

    /// Returns the configured byte budget.
    pub fn cache_bytes(&self) -> u64 {
        self.cache_bytes
    }

    /// Reports whether the engine has been built yet.
    #[cfg(test)]
    pub(crate) fn is_initialized(&self) -> bool {
        self.lru.lock().is_some()
    }
}
