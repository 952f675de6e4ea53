//! LRU Cache Module
//!
//! Byte-bounded Least Recently Used cache engine.
//!
//! Entries live in a `Vec` and are chained into a doubly linked recency list
//! by index, so lookups, promotions and evictions are all O(1). The engine
//! holds no lock; callers serialize access themselves (see [`CacheStore`]).
//!
//! [`CacheStore`]: crate::cache::CacheStore

use std::collections::HashMap;
use std::fmt;

use tracing::trace;

// == Byte Size ==
/// Reports how many bytes a value accounts for in the cache budget.
pub trait ByteSize {
    fn byte_size(&self) -> usize;
}

impl ByteSize for String {
    fn byte_size(&self) -> usize {
        self.len()
    }
}

impl ByteSize for Vec<u8> {
    fn byte_size(&self) -> usize {
        self.len()
    }
}

/// Callback invoked with each entry evicted for capacity.
pub type EvictionCallback<V> = Box<dyn FnMut(String, V) + Send>;

/// A single key/value pair plus its recency links.
struct Node<V> {
    key: String,
    value: V,
    /// Neighbour towards the most recently used end
    prev: Option<usize>,
    /// Neighbour towards the least recently used end
    next: Option<usize>,
}

/// Bytes charged for one entry.
fn entry_size<V: ByteSize>(key: &str, value: &V) -> u64 {
    (key.len() + value.byte_size()) as u64
}

// == LRU Cache ==
/// A byte-bounded LRU cache. Not safe for concurrent access.
///
/// - `head` = Most recently used
/// - `tail` = Least recently used
pub struct LruCache<V> {
    /// Byte budget, `0` = unbounded
    max_bytes: u64,
    /// Sum of key and value sizes of all live entries
    used_bytes: u64,
    /// Entry storage, linked into recency order
    nodes: Vec<Node<V>>,
    /// Key to position in `nodes`
    index: HashMap<String, usize>,
    head: Option<usize>,
    tail: Option<usize>,
    on_evicted: Option<EvictionCallback<V>>,
}

impl<V: ByteSize> LruCache<V> {
    // == Constructor ==
    /// Creates an empty cache with a byte budget (`0` for no limit) and an
    /// optional callback run for every evicted entry.
    pub fn new(max_bytes: u64, on_evicted: Option<EvictionCallback<V>>) -> Self {
        Self {
            max_bytes,
            used_bytes: 0,
            nodes: Vec::new(),
            index: HashMap::new(),
            head: None,
            tail: None,
            on_evicted,
        }
    }

    // == Add ==
    /// Inserts or replaces `key`, making it the most recently used entry.
    ///
    /// Evicts from the least recently used end until the budget holds again.
    /// This can evict the entry just written when it alone exceeds the budget.
    pub fn add(&mut self, key: &str, value: V) {
        if let Some(&idx) = self.index.get(key) {
            self.promote(idx);
            let old = std::mem::replace(&mut self.nodes[idx].value, value);
            self.used_bytes =
                self.used_bytes - old.byte_size() as u64 + self.nodes[idx].value.byte_size() as u64;
        } else {
            let idx = self.nodes.len();
            self.used_bytes += entry_size(key, &value);
            self.nodes.push(Node {
                key: key.to_string(),
                value,
                prev: None,
                next: None,
            });
            self.index.insert(key.to_string(), idx);
            self.push_front(idx);
        }

        while self.max_bytes != 0 && self.used_bytes > self.max_bytes {
            if !self.remove_oldest() {
                break;
            }
        }
    }

    // == Get ==
    /// Looks up `key`, marking it as most recently used on a hit.
    pub fn get(&mut self, key: &str) -> Option<&V> {
        let idx = *self.index.get(key)?;
        self.promote(idx);
        Some(&self.nodes[idx].value)
    }

    // == Contains ==
    /// Checks for `key` without touching its recency.
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    // == Remove ==
    /// Removes `key` and returns its value. The eviction callback is not run.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let idx = *self.index.get(key)?;
        Some(self.take(idx).value)
    }

    // == Remove Oldest ==
    /// Evicts the least recently used entry, running the eviction callback.
    ///
    /// Returns false if the cache was empty.
    pub fn remove_oldest(&mut self) -> bool {
        let Some(idx) = self.tail else {
            return false;
        };
        let node = self.take(idx);
        trace!(key = %node.key, used_bytes = self.used_bytes, "evicted lru entry");
        if let Some(on_evicted) = self.on_evicted.as_mut() {
            on_evicted(node.key, node.value);
        }
        true
    }

    // == Length ==
    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the bytes currently charged against the budget.
    pub fn used_bytes(&self) -> u64 {
        self.used_bytes
    }

    /// Returns the byte budget, `0` meaning unbounded.
    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    // == List Maintenance ==
    /// Moves an entry to the most recently used position.
    fn promote(&mut self, idx: usize) {
        if self.head != Some(idx) {
            self.unlink(idx);
            self.push_front(idx);
        }
    }

    fn push_front(&mut self, idx: usize) {
        self.nodes[idx].prev = None;
        self.nodes[idx].next = self.head;
        match self.head {
            Some(head) => self.nodes[head].prev = Some(idx),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = (self.nodes[idx].prev, self.nodes[idx].next);
        match prev {
            Some(prev) => self.nodes[prev].next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.nodes[next].prev = prev,
            None => self.tail = prev,
        }
        self.nodes[idx].prev = None;
        self.nodes[idx].next = None;
    }

    /// Detaches and removes the entry at `idx`, keeping accounting and the
    /// index consistent.
    fn take(&mut self, idx: usize) -> Node<V> {
        self.unlink(idx);
        let node = self.nodes.swap_remove(idx);
        self.index.remove(&node.key);
        self.used_bytes -= entry_size(&node.key, &node.value);

        // The former last node now sits at `idx`; repoint its neighbours.
        if idx < self.nodes.len() {
            let (prev, next) = (self.nodes[idx].prev, self.nodes[idx].next);
            match prev {
                Some(prev) => self.nodes[prev].next = Some(idx),
                None => self.head = Some(idx),
            }
            match next {
                Some(next) => self.nodes[next].prev = Some(idx),
                None => self.tail = Some(idx),
            }
            if let Some(slot) = self.index.get_mut(&self.nodes[idx].key) {
                *slot = idx;
            }
        }

        node
    }
}

impl<V> fmt::Debug for LruCache<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("max_bytes", &self.max_bytes)
            .field("used_bytes", &self.used_bytes)
            .field("len", &self.nodes.len())
            .finish()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn value(len: usize) -> String {
        "x".repeat(len)
    }

    #[test]
    fn test_lru_new() {
        let lru: LruCache<String> = LruCache::new(0, None);
        assert!(lru.is_empty());
        assert_eq!(lru.len(), 0);
        assert_eq!(lru.used_bytes(), 0);
    }

    #[test]
    fn test_lru_get() {
        let mut lru = LruCache::new(0, None);
        lru.add("key1", "1234".to_string());

        assert_eq!(lru.get("key1").map(String::as_str), Some("1234"));
        assert!(lru.get("key2").is_none());
    }

    #[test]
    fn test_lru_accounts_key_and_value_bytes() {
        let mut lru = LruCache::new(0, None);
        lru.add("k1", value(10));
        lru.add("key2", value(3));

        assert_eq!(lru.used_bytes(), 2 + 10 + 4 + 3);
    }

    #[test]
    fn test_lru_budget_scenario() {
        // Budget covers exactly two entries of key + 10 bytes
        let mut lru = LruCache::new(24, None);
        lru.add("k1", value(10));
        lru.add("k2", value(10));
        assert_eq!(lru.len(), 2);
        assert_eq!(lru.used_bytes(), 24);

        lru.add("k3", value(10));

        assert!(!lru.contains("k1"));
        assert!(lru.contains("k2"));
        assert!(lru.contains("k3"));
        assert_eq!(lru.used_bytes(), 24);
    }

    #[test]
    fn test_lru_get_bumps_recency() {
        let mut lru = LruCache::new(24, None);
        lru.add("k1", value(10));
        lru.add("k2", value(10));

        // Reading k1 leaves k2 as the eviction candidate
        lru.get("k1");
        lru.add("k3", value(10));

        assert!(lru.contains("k1"));
        assert!(!lru.contains("k2"));
        assert!(lru.contains("k3"));
    }

    #[test]
    fn test_lru_overwrite_updates_size_and_recency() {
        let mut lru = LruCache::new(0, None);
        lru.add("a", value(5));
        lru.add("b", value(5));
        lru.add("a", value(2));

        assert_eq!(lru.len(), 2);
        assert_eq!(lru.used_bytes(), (1 + 2) + (1 + 5));
        assert_eq!(lru.get("a").map(String::len), Some(2));

        // "a" was promoted by the overwrite, so "b" is the oldest
        assert!(lru.remove_oldest());
        assert!(lru.contains("a"));
        assert!(!lru.contains("b"));
    }

    #[test]
    fn test_lru_overwrite_can_trigger_eviction() {
        let mut lru = LruCache::new(10, None);
        lru.add("a", value(2));
        lru.add("b", value(2));

        // Growing "a" pushes the total over budget and evicts "b"
        lru.add("a", value(8));

        assert_eq!(lru.len(), 1);
        assert!(lru.contains("a"));
        assert_eq!(lru.used_bytes(), 9);
    }

    #[test]
    fn test_lru_oversized_entry_is_evicted_immediately() {
        let mut lru = LruCache::new(8, None);
        lru.add("k", value(16));

        assert_eq!(lru.len(), 0);
        assert_eq!(lru.used_bytes(), 0);
    }

    #[test]
    fn test_lru_oversized_entry_flushes_everything() {
        let mut lru = LruCache::new(8, None);
        lru.add("a", value(2));
        lru.add("b", value(2));
        lru.add("huge", value(32));

        assert!(lru.is_empty());
        assert_eq!(lru.used_bytes(), 0);
    }

    #[test]
    fn test_lru_unbounded_never_evicts() {
        let mut lru = LruCache::new(0, None);
        for i in 0..1000 {
            lru.add(&format!("key{}", i), value(100));
        }
        assert_eq!(lru.len(), 1000);
    }

    #[test]
    fn test_lru_remove_oldest_empty() {
        let mut lru: LruCache<String> = LruCache::new(0, None);
        assert!(!lru.remove_oldest());
    }

    #[test]
    fn test_lru_remove_oldest_order() {
        let mut lru = LruCache::new(0, None);
        lru.add("a", value(1));
        lru.add("b", value(1));
        lru.add("c", value(1));

        lru.get("a");
        lru.get("c");
        lru.get("b");

        // Order after reads: front=[b, c, a]=back
        lru.remove_oldest();
        assert!(!lru.contains("a"));
        lru.remove_oldest();
        assert!(!lru.contains("c"));
        lru.remove_oldest();
        assert!(lru.is_empty());
        assert_eq!(lru.used_bytes(), 0);
    }

    #[test]
    fn test_lru_on_evicted_callback() {
        let evicted = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&evicted);
        let callback: EvictionCallback<String> = Box::new(move |key, _value| {
            sink.lock().unwrap().push(key);
        });

        let mut lru = LruCache::new(10, Some(callback));
        lru.add("key1", "123456".to_string());
        lru.add("k2", "k2".to_string());
        lru.add("k3", "k3".to_string());
        lru.add("k4", "k4".to_string());

        assert_eq!(*evicted.lock().unwrap(), vec!["key1".to_string(), "k2".to_string()]);
    }

    #[test]
    fn test_lru_remove_skips_callback() {
        let calls = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&calls);
        let callback: EvictionCallback<String> = Box::new(move |_, _| {
            *counter.lock().unwrap() += 1;
        });

        let mut lru = LruCache::new(0, Some(callback));
        lru.add("a", value(3));
        lru.add("b", value(3));

        assert_eq!(lru.remove("a"), Some(value(3)));
        assert_eq!(lru.remove("a"), None);
        assert_eq!(lru.len(), 1);
        assert_eq!(lru.used_bytes(), 4);
        assert_eq!(*calls.lock().unwrap(), 0);
    }

    #[test]
    fn test_lru_remove_middle_keeps_order() {
        let mut lru = LruCache::new(0, None);
        lru.add("a", value(1));
        lru.add("b", value(1));
        lru.add("c", value(1));
        lru.add("d", value(1));

        // Removing "a" relocates the last stored node; links must follow it.
        lru.remove("a");
        lru.remove("c");

        lru.remove_oldest();
        assert!(!lru.contains("b"));
        assert!(lru.contains("d"));
        assert_eq!(lru.get("d").map(String::len), Some(1));
        lru.remove_oldest();
        assert!(lru.is_empty());
    }
}
