//! Recency half of the Adaptive Replacement Cache.
//!
//! Identical in shape to the plain [`crate::lru::LruCache`] except that every
//! eviction demotes the evicted key into an attached ghost list instead of
//! dropping it. The ghost list's capacity is fixed at construction (the
//! half's *initial* capacity) and never adapts, unlike the main list's
//! capacity, which the ARC coordinator shifts on ghost hits.

extern crate alloc;

use crate::entry::CacheEntry;
use crate::list::{List, ListNode};
use core::hash::{BuildHasher, Hash};
use core::num::NonZeroUsize;

#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

pub struct ArcLruPart<K, V, S> {
    capacity: usize,
    transform_threshold: usize,
    list: List<CacheEntry<K, V>>,
    map: HashMap<K, *mut ListNode<CacheEntry<K, V>>, S>,
    ghost_capacity: NonZeroUsize,
    ghost_list: List<K>,
    ghost_map: HashMap<K, *mut ListNode<K>, S>,
}

// SAFETY: every pointer held in `map`/`ghost_map` refers to a node owned by
// `list`/`ghost_list` respectively; all mutation requires `&mut self`.
unsafe impl<K: Send, V: Send, S: Send> Send for ArcLruPart<K, V, S> {}
unsafe impl<K: Sync, V: Sync, S: Sync> Sync for ArcLruPart<K, V, S> {}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher + Clone> ArcLruPart<K, V, S> {
    pub fn new(
        capacity: usize,
        transform_threshold: NonZeroUsize,
        ghost_capacity: NonZeroUsize,
        hasher: S,
    ) -> Self {
        let list_cap = NonZeroUsize::new(capacity.max(1)).unwrap();
        Self {
            capacity,
            transform_threshold: transform_threshold.get(),
            list: List::new(list_cap),
            map: HashMap::with_hasher(hasher.clone()),
            ghost_capacity,
            ghost_list: List::new(ghost_capacity),
            ghost_map: HashMap::with_hasher(hasher),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// On a hit, bumps the access count and moves the entry to the MRU end.
    /// `shouldPromote` is true once the access count reaches the transform
    /// threshold.
    pub fn get(&mut self, key: &K) -> Option<(V, bool)> {
        let &node = self.map.get(key)?;
        // SAFETY: `node` came from `map` and refers to a live list node.
        unsafe {
            self.list.move_to_front(node);
            let entry = self.list.value_mut(node);
            entry.touch();
            let should_promote = entry.access_count() >= self.transform_threshold;
            Some((entry.value().clone(), should_promote))
        }
    }

    /// Inserts or overwrites `key`. A zero-capacity half is a permanent
    /// no-op: nothing is ever resident to overwrite or evict.
    pub fn put(&mut self, key: K, value: V) {
        if self.capacity == 0 {
            return;
        }

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

        if self.map.len() >= self.capacity {
            self.evict_one();
        }

        let node = self.list.push_front(CacheEntry::new(key.clone(), value));
        self.map.insert(key, node);
    }

    /// True iff `key` was in the ghost list; removes it as a side effect.
    pub fn check_ghost(&mut self, key: &K) -> bool {
        match self.ghost_map.remove(key) {
            Some(node) => {
                // SAFETY: `node` came from `ghost_map` and is live in `ghost_list`.
                unsafe { self.ghost_list.remove(node) };
                true
            }
            None => false,
        }
    }

    pub fn increase_capacity(&mut self) {
        self.capacity += 1;
    }

    /// Fails only if capacity is already 0. Otherwise evicts one entry if the
    /// main list is at capacity, then decrements.
    pub fn decrease_capacity(&mut self) -> bool {
        if self.capacity == 0 {
            return false;
        }
        if self.map.len() >= self.capacity {
            self.evict_one();
        }
        self.capacity -= 1;
        true
    }

    fn evict_one(&mut self) {
        let Some(entry) = self.list.pop_back() else {
            return;
        };
        let (key, _) = entry.into_key_value();
        self.map.remove(&key);
        self.demote_to_ghost(key);
    }

    fn demote_to_ghost(&mut self, key: K) {
        if self.ghost_list.is_full() {
            if let Some(oldest) = self.ghost_list.pop_back() {
                self.ghost_map.remove(&oldest);
            }
        }
        let node = self.ghost_list.push_front(key.clone());
        self.ghost_map.insert(key, node);
    }
}
