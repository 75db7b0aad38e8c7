//! Adaptive Replacement Cache (ARC).
//!
//! ARC runs two coupled sub-caches side by side — a recency half
//! ([`lru_part`]) and a frequency half ([`lfu_part`]) — each fronted by its
//! own ghost list of recently evicted keys. A lookup that lands in a ghost
//! list shifts one unit of capacity from the other half toward the half that
//! ghosted it, which is what lets ARC track a workload's recency/frequency
//! balance without an external tuning knob.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                              ARC                                   │
//! │                                                                    │
//! │   LRU part                          LFU part                      │
//! │  ┌────────────┬──────────┐        ┌────────────┬──────────┐       │
//! │  │ main (MRU) │  ghost   │        │ main (freq)│  ghost   │       │
//! │  └────────────┴──────────┘        └────────────┴──────────┘       │
//! │        ▲                                  ▲                       │
//! │        └──────── checkGhosts(k) shifts one unit on a ghost hit ───┘│
//! └───────────────────────────────────────────────────────────────────┘
//! ```

pub(crate) mod lfu_part;
pub(crate) mod lru_part;

extern crate alloc;

use crate::config::ArcCacheConfig;
use crate::metrics::{ArcCacheMetrics, CacheMetrics};
use core::hash::{BuildHasher, Hash};
use lfu_part::ArcLfuPart;
use lru_part::ArcLruPart;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;

/// A two-part Adaptive Replacement Cache.
pub struct ArcCache<K, V, S = DefaultHashBuilder> {
    lru_part: ArcLruPart<K, V, S>,
    lfu_part: ArcLfuPart<K, V, S>,
    metrics: ArcCacheMetrics,
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher + Clone> core::fmt::Debug for ArcCache<K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ArcCache")
            .field("lru_capacity", &self.lru_part.capacity())
            .field("lfu_capacity", &self.lfu_part.capacity())
            .field("len", &self.len())
            .finish()
    }
}

impl<K: Hash + Eq + Clone, V: Clone> ArcCache<K, V, DefaultHashBuilder> {
    pub fn new(config: ArcCacheConfig) -> Self {
        Self::with_hasher(
            config,
            DefaultHashBuilder::default(),
            DefaultHashBuilder::default(),
        )
    }
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher + Clone> ArcCache<K, V, S> {
    pub fn with_hasher(config: ArcCacheConfig, lru_hasher: S, lfu_hasher: S) -> Self {
        let capacity = config.capacity.get();
        Self {
            lru_part: ArcLruPart::new(
                capacity,
                config.transform_threshold,
                config.capacity,
                lru_hasher,
            ),
            lfu_part: ArcLfuPart::new(capacity, config.capacity, lfu_hasher),
            metrics: ArcCacheMetrics::new(capacity as u64),
        }
    }

    pub fn len(&self) -> usize {
        self.lru_part.len() + self.lfu_part.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn metrics(&self) -> ArcCacheMetrics {
        let mut metrics = self.metrics.clone();
        metrics.set_capacities(
            self.lru_part.capacity() as u64,
            self.lfu_part.capacity() as u64,
        );
        metrics
    }

    /// Looks up `key`. Checks both halves' ghost lists first (possibly
    /// reallocating capacity between them), then tries the recency half,
    /// promoting into the frequency half if its access count has reached
    /// the transform threshold, and finally falls back to the frequency
    /// half.
    pub fn get(&mut self, key: &K) -> Option<V> {
        self.check_ghosts(key);

        if let Some((value, should_promote)) = self.lru_part.get(key) {
            if should_promote {
                self.lfu_part.put(key.clone(), value.clone());
            }
            self.metrics.record_hit();
            return Some(value);
        }

        match self.lfu_part.get(key) {
            Some(value) => {
                self.metrics.record_hit();
                Some(value)
            }
            None => {
                self.metrics.record_miss();
                None
            }
        }
    }

    /// Inserts or overwrites `key`. Whether the key was already resident in
    /// the frequency half is observed *before* the recency half is updated,
    /// so the decision of whether to also write through to the frequency
    /// half is made against pre-update state.
    pub fn put(&mut self, key: K, value: V) {
        self.check_ghosts(&key);

        let was_in_lfu = self.lfu_part.contains(&key);
        self.lru_part.put(key.clone(), value.clone());
        if was_in_lfu {
            self.lfu_part.put(key, value);
        }
    }

    fn check_ghosts(&mut self, key: &K) {
        if self.lru_part.check_ghost(key) {
            if self.lfu_part.decrease_capacity() {
                self.lru_part.increase_capacity();
            }
            self.metrics.record_lru_ghost_hit();
        } else if self.lfu_part.check_ghost(key) {
            if self.lru_part.decrease_capacity() {
                self.lfu_part.increase_capacity();
            }
            self.metrics.record_lfu_ghost_hit();
        }
    }
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher + Clone> CacheMetrics for ArcCache<K, V, S> {
    fn metrics(&self) -> alloc::collections::BTreeMap<alloc::string::String, f64> {
        self.metrics().to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "ARC"
    }
}
