//! Least Recently Used (LRU) Cache Implementation
//!
//! An LRU cache evicts the least recently accessed entry when capacity is
//! reached. This implementation provides O(1) time complexity for `get`,
//! `put`, and `remove` using a hash map combined with a doubly-linked list.
//!
//! # How the Algorithm Works
//!
//! The cache keeps entries ordered by recency: the most-recently-used (MRU)
//! entry sits near the head of the list, the least-recently-used (LRU) entry
//! sits near the tail.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        LRU Cache                                │
//! │                                                                 │
//! │  HashMap<K, *Node>          Doubly-Linked List                  │
//! │  ┌──────────────┐          ┌──────────────────────────────┐    │
//! │  │ "apple" ──────────────▶ │ MRU ◀──▶ ... ◀──▶ LRU        │    │
//! │  │ "banana" ─────────────▶ │  ▲                    │      │    │
//! │  │ "cherry" ─────────────▶ │  │                    ▼      │    │
//! │  └──────────────┘          │ head              tail       │    │
//! │                            └──────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Eviction Example
//!
//! ```text
//! Cache capacity: 3
//!
//! put("a", 1)  →  [a]
//! put("b", 2)  →  [b, a]
//! put("c", 3)  →  [c, b, a]
//! get("a")     →  [a, c, b]       // "a" moved to front (MRU)
//! put("d", 4)  →  [d, a, c]       // "b" evicted (was LRU)
//! ```
//!
//! A capacity of zero is legal: every `put` is a no-op and every `get`
//! misses.

extern crate alloc;

use crate::config::LruCacheConfig;
use crate::entry::CacheEntry;
use crate::list::{List, ListNode};
use crate::metrics::{CacheMetrics, LruCacheMetrics};
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use core::num::NonZeroUsize;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// A fixed-capacity LRU cache.
///
/// # Safety
///
/// `map` holds raw pointers into nodes owned by `list`. A pointer is valid
/// exactly as long as its node has not been removed from `list`; every
/// removal path updates `map` in the same operation, so no dangling pointer
/// is ever observable from outside this module.
pub struct LruCache<K, V, S = DefaultHashBuilder> {
    capacity: NonZeroUsize,
    list: List<CacheEntry<K, V>>,
    map: HashMap<K, *mut ListNode<CacheEntry<K, V>>, S>,
    metrics: LruCacheMetrics,
}

// SAFETY: `LruCache` owns every node its pointers reference; all mutation
// requires `&mut self`, so there is no shared mutable state for `Send`/`Sync`
// to worry about beyond what `K`, `V`, and `S` already require.
unsafe impl<K: Send, V: Send, S: Send> Send for LruCache<K, V, S> {}
unsafe impl<K: Sync, V: Sync, S: Sync> Sync for LruCache<K, V, S> {}

impl<K, V, S> core::fmt::Debug for LruCache<K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LruCache")
            .field("capacity", &self.capacity)
            .field("len", &self.map.len())
            .finish()
    }
}

impl<K: Hash + Eq + Clone, V: Clone> LruCache<K, V, DefaultHashBuilder> {
    /// Creates an LRU cache with the given capacity and a default hasher.
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self::from_config(LruCacheConfig { capacity })
    }

    /// Creates an LRU cache from a [`LruCacheConfig`].
    pub fn from_config(config: LruCacheConfig) -> Self {
        Self::with_hasher(config, DefaultHashBuilder::default())
    }
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher> LruCache<K, V, S> {
    /// Creates an LRU cache from a config and an explicit hasher.
    pub fn with_hasher(config: LruCacheConfig, hasher: S) -> Self {
        let map_capacity = config.capacity.get().next_power_of_two();
        Self {
            capacity: config.capacity,
            list: List::new(config.capacity),
            map: HashMap::with_capacity_and_hasher(map_capacity, hasher),
            metrics: LruCacheMetrics::new(config.capacity.get() as u64),
        }
    }

    pub fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Checks for `key` without affecting recency or access count.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(key)
    }

    pub fn metrics(&self) -> &LruCacheMetrics {
        &self.metrics
    }

    /// Reads `key` without updating recency. Intended for tests and metrics,
    /// not part of the policy contract.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let node = *self.map.get(key)?;
        // SAFETY: every pointer stored in `map` refers to a live node in `list`.
        Some(unsafe { self.list.value(node) }.value())
    }

    /// Looks up `key`, promoting it to the MRU end on a hit.
    pub fn get<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let node = match self.map.get(key) {
            Some(&node) => node,
            None => {
                self.metrics.core.record_miss();
                return None;
            }
        };
        // SAFETY: `node` came from `map` and refers to a live list node.
        unsafe {
            self.list.move_to_front(node);
            let entry = self.list.value_mut(node);
            entry.touch();
            self.metrics.core.record_hit();
            Some(entry.value().clone())
        }
    }

    /// Inserts or overwrites `key`. A no-op when `capacity() == 0` is
    /// impossible (`NonZeroUsize`), but callers may still construct a cache
    /// whose capacity makes every entry immediately evict the one before it
    /// (capacity 1).
    pub fn put(&mut self, key: K, value: V) {
        if let Some(&node) = self.map.get(&key) {
            // SAFETY: `node` came from `map` and refers to a live list node.
            unsafe {
                self.list.move_to_front(node);
                let entry = self.list.value_mut(node);
                entry.set_value(value);
                entry.touch();
            }
            return;
        }

        if self.list.is_full() {
            self.evict_one();
        }

        let node = self.list.push_front(CacheEntry::new(key.clone(), value));
        self.map.insert(key, node);
        self.metrics.core.record_insertion();
    }

    /// Removes `key` if present, returning its value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let node = self.map.remove(key)?;
        // SAFETY: `node` came from `map` and refers to a live list node.
        let entry = unsafe { self.list.remove(node) };
        Some(entry.into_value())
    }

    pub fn clear(&mut self) {
        self.map.clear();
        self.list.clear();
    }

    fn evict_one(&mut self) {
        if let Some(entry) = self.list.pop_back() {
            let (key, _) = entry.into_key_value();
            self.map.remove(&key);
            self.metrics.core.record_eviction();
        }
    }
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher> CacheMetrics for LruCache<K, V, S> {
    fn metrics(&self) -> alloc::collections::BTreeMap<alloc::string::String, f64> {
        self.metrics.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "LRU"
    }
}
