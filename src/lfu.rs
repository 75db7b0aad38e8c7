//! Least Frequently Used (LFU) Cache Implementation
//!
//! An LFU cache evicts the least frequently accessed entry when capacity is
//! reached. Entries are organized into per-frequency buckets; the bucket
//! keyed by the current minimum frequency holds the eviction candidate.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────────┐
//! │                              LFU Cache                                       │
//! │                                                                              │
//! │  HashMap<K, *Node>              BTreeMap<Frequency, List>                    │
//! │  ┌──────────────┐              ┌─────────────────────────────────────────┐   │
//! │  │ "hot" ──────────────────────│ freq=10: [hot]                          │   │
//! │  │ "warm" ─────────────────────│ freq=5:  [warm]                         │   │
//! │  │ "cold" ─────────────────────│ freq=1:  [cold]                  ← LFU  │   │
//! │  └──────────────┘              └─────────────────────────────────────────┘   │
//! │                                        ▲                                     │
//! │                                   min_frequency=1                            │
//! └─────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A frequency is capped at `2 * max_average` so a handful of pathologically
//! hot keys cannot push the running average frequency out of reach of decay.
//! `min_frequency` is fully recomputed from the `BTreeMap`'s first key after
//! every mutation rather than incrementally advanced — a single update can
//! both empty the old bucket and populate a new one below where an
//! "advance by one" step would leave it, so only a fresh scan is reliably
//! authoritative.
//!
//! # Decay
//!
//! Once the running average frequency (`total_freq / size`) exceeds
//! `max_average`, every resident entry whose frequency exceeds
//! `max_average / 2` has its frequency halved (floor of 1). This is what
//! keeps long-lived hot entries from becoming permanently unevictable.

extern crate alloc;

use crate::config::LfuCacheConfig;
use crate::entry::CacheEntry;
use crate::list::{List, ListNode};
use crate::metrics::{CacheMetrics, LfuCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::vec::Vec;
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

/// Sentinel used for `min_frequency` when the cache is empty. Deliberately a
/// full-width sentinel rather than a small fixed constant — a small sentinel
/// can fall below the reachable frequency cap once `max_average` is large.
const EMPTY_MIN_FREQUENCY: usize = usize::MAX;

/// A fixed-capacity LFU cache with average-frequency decay.
///
/// # Safety
///
/// `map` holds raw pointers into nodes owned by one of the `List`s in
/// `frequency_lists`. A node's current bucket is always the one keyed by its
/// own `CacheEntry::access_count()`; every mutation that changes an entry's
/// frequency moves its node to the matching bucket in the same step, so
/// `map` and `frequency_lists` never disagree about where a node lives.
pub struct LfuCache<K, V, S = DefaultHashBuilder> {
    capacity: NonZeroUsize,
    max_average: usize,
    map: HashMap<K, *mut ListNode<CacheEntry<K, V>>, S>,
    frequency_lists: BTreeMap<usize, List<CacheEntry<K, V>>>,
    min_frequency: usize,
    total_freq: u64,
    metrics: LfuCacheMetrics,
}

// SAFETY: `LfuCache` owns every node its pointers reference through either
// `map` or `frequency_lists`; all mutation requires `&mut self`.
unsafe impl<K: Send, V: Send, S: Send> Send for LfuCache<K, V, S> {}
unsafe impl<K: Sync, V: Sync, S: Sync> Sync for LfuCache<K, V, S> {}

impl<K, V, S> core::fmt::Debug for LfuCache<K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LfuCache")
            .field("capacity", &self.capacity)
            .field("len", &self.map.len())
            .field("min_frequency", &self.min_frequency)
            .finish()
    }
}

impl<K: Hash + Eq + Clone, V: Clone> LfuCache<K, V, DefaultHashBuilder> {
    pub fn new(config: LfuCacheConfig) -> Self {
        Self::with_hasher(config, DefaultHashBuilder::default())
    }
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher> LfuCache<K, V, S> {
    pub fn with_hasher(config: LfuCacheConfig, hasher: S) -> Self {
        let map_capacity = config.capacity.get().next_power_of_two();
        Self {
            capacity: config.capacity,
            max_average: config.max_average.get(),
            map: HashMap::with_capacity_and_hasher(map_capacity, hasher),
            frequency_lists: BTreeMap::new(),
            min_frequency: EMPTY_MIN_FREQUENCY,
            total_freq: 0,
            metrics: LfuCacheMetrics::new(config.capacity.get() as u64),
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn metrics(&self) -> LfuCacheMetrics {
        let mut metrics = self.metrics.clone();
        metrics.set_avg_frequency(self.avg_frequency());
        metrics
    }

    fn recompute_min_frequency(&mut self) {
        self.min_frequency = self
            .frequency_lists
            .keys()
            .next()
            .copied()
            .unwrap_or(EMPTY_MIN_FREQUENCY);
    }

    fn avg_frequency(&self) -> u64 {
        if self.map.is_empty() {
            0
        } else {
            self.total_freq / self.map.len() as u64
        }
    }

    /// Bumps `key`'s frequency by one (capped), moving its node into the
    /// matching bucket. Returns the entry's current value.
    fn touch(&mut self, key: &K) -> V {
        let node = *self.map.get(key).expect("touch called on resident key");
        // SAFETY: `node` is live; its bucket is keyed by its own frequency.
        let old_freq = unsafe { ListNode::value(node) }.access_count();

        let mut entry = {
            let old_bucket = self
                .frequency_lists
                .get_mut(&old_freq)
                .expect("entry's bucket must exist");
            // SAFETY: `node` is linked into this exact bucket.
            unsafe { old_bucket.remove(node) }
        };
        if self
            .frequency_lists
            .get(&old_freq)
            .map(List::is_empty)
            .unwrap_or(true)
        {
            self.frequency_lists.remove(&old_freq);
        }

        let new_freq = (old_freq + 1).min(2 * self.max_average);
        entry.set_access_count(new_freq);
        let value = entry.value().clone();

        let capacity = self.capacity;
        let bucket = self
            .frequency_lists
            .entry(new_freq)
            .or_insert_with(|| List::new(capacity));
        let new_node = bucket.push_back(entry);
        self.map.insert(key.clone(), new_node);

        self.total_freq += 1;
        self.recompute_min_frequency();
        self.maybe_decay();
        value
    }

    pub fn get(&mut self, key: &K) -> Option<V> {
        if self.map.contains_key(key) {
            let value = self.touch(key);
            self.metrics.core.record_hit();
            Some(value)
        } else {
            self.metrics.core.record_miss();
            None
        }
    }

    pub fn put(&mut self, key: K, value: V) {
        if let Some(&node) = self.map.get(&key) {
            // SAFETY: `node` is live; overwrite its value in place, then
            // run the same per-access frequency update as a hit.
            unsafe { ListNode::value_mut(node) }.set_value(value);
            self.touch(&key);
            return;
        }

        if self.map.len() >= self.capacity.get() {
            self.evict_one();
        }

        let entry = CacheEntry::new(key.clone(), value);
        let capacity = self.capacity;
        let bucket = self
            .frequency_lists
            .entry(1)
            .or_insert_with(|| List::new(capacity));
        let node = bucket.push_back(entry);
        self.map.insert(key, node);
        self.total_freq += 1;
        self.recompute_min_frequency();
        self.metrics.core.record_insertion();
        self.maybe_decay();
    }

    fn evict_one(&mut self) {
        if self.min_frequency == EMPTY_MIN_FREQUENCY {
            return;
        }
        let freq = self.min_frequency;
        let evicted = self
            .frequency_lists
            .get_mut(&freq)
            .and_then(List::pop_front);
        if let Some(entry) = evicted {
            if self
                .frequency_lists
                .get(&freq)
                .map(List::is_empty)
                .unwrap_or(true)
            {
                self.frequency_lists.remove(&freq);
            }
            let evicted_freq = entry.access_count() as u64;
            self.total_freq = self.total_freq.saturating_sub(evicted_freq);
            let (key, _) = entry.into_key_value();
            self.map.remove(&key);
            self.recompute_min_frequency();
            self.metrics.core.record_eviction();
        }
    }

    fn maybe_decay(&mut self) {
        if self.avg_frequency() <= self.max_average as u64 {
            return;
        }
        let threshold = self.max_average / 2;
        let freqs: Vec<usize> = self
            .frequency_lists
            .keys()
            .copied()
            .filter(|&f| f > threshold)
            .collect();

        let mut restage: Vec<CacheEntry<K, V>> = Vec::new();
        for freq in freqs {
            if let Some(mut bucket) = self.frequency_lists.remove(&freq) {
                while let Some(mut entry) = bucket.pop_front() {
                    let new_freq = (freq / 2).max(1);
                    entry.set_access_count(new_freq);
                    restage.push(entry);
                }
            }
        }

        let capacity = self.capacity;
        for entry in restage {
            let freq = entry.access_count();
            let key = entry.key().clone();
            let bucket = self
                .frequency_lists
                .entry(freq)
                .or_insert_with(|| List::new(capacity));
            let node = bucket.push_back(entry);
            self.map.insert(key, node);
        }

        self.recompute_min_frequency();
        self.metrics.record_decay();
        self.metrics.set_avg_frequency(self.avg_frequency());
    }

    pub fn clear(&mut self) {
        self.map.clear();
        self.frequency_lists.clear();
        self.min_frequency = EMPTY_MIN_FREQUENCY;
        self.total_freq = 0;
    }
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher> CacheMetrics for LfuCache<K, V, S> {
    fn metrics(&self) -> alloc::collections::BTreeMap<alloc::string::String, f64> {
        self.metrics().to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "LFU"
    }
}
