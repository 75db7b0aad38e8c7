//! LRU-K Cache Implementation
//!
//! LRU-K shields a main LRU cache from one-shot accesses: a key is admitted
//! to `main` only after it has accumulated `k` cumulative observations
//! (either `get` misses or `put`s) against it. Until then, the key lives in
//! a secondary `history` cache — itself LRU-bounded by `history_capacity` —
//! paired with whatever value it was last `put` with, if any.
//!
//! Tying the observation count and the not-yet-promoted value to the same
//! `history` entry means both are dropped together the moment `history`
//! evicts the key, which is what keeps the pending-value bookkeeping bounded
//! without a second, independently-sized structure.
//!
//! ```text
//! put(k, v)  — k not in main, not yet at k observations
//!   history[k] = (count + 1, Some(v))
//!
//! get(k)     — k not in main
//!   history[k] = (count + 1, history[k].1)
//!   if count + 1 >= K and a pending value exists: promote into main
//! ```

extern crate alloc;

use crate::config::LruKCacheConfig;
use crate::lru::LruCache;
use crate::metrics::{CacheMetrics, LruKCacheMetrics};
use core::hash::{BuildHasher, Hash};

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;

/// An LRU cache fronted by a `k`-observation promotion gate.
pub struct LruKCache<K, V, S = DefaultHashBuilder> {
    main: LruCache<K, V, S>,
    history: LruCache<K, (usize, Option<V>), S>,
    k: usize,
    metrics: LruKCacheMetrics,
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher> core::fmt::Debug for LruKCache<K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LruKCache")
            .field("k", &self.k)
            .field("main_len", &self.main.len())
            .finish()
    }
}

impl<K: Hash + Eq + Clone, V: Clone> LruKCache<K, V, DefaultHashBuilder> {
    pub fn new(config: LruKCacheConfig) -> Self {
        Self::with_hasher(
            config,
            DefaultHashBuilder::default(),
            DefaultHashBuilder::default(),
        )
    }
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher> LruKCache<K, V, S> {
    pub fn with_hasher(config: LruKCacheConfig, main_hasher: S, history_hasher: S) -> Self {
        let capacity = config.capacity.get() as u64;
        Self {
            main: LruCache::with_hasher(
                crate::config::LruCacheConfig {
                    capacity: config.capacity,
                },
                main_hasher,
            ),
            history: LruCache::with_hasher(
                crate::config::LruCacheConfig {
                    capacity: config.history_capacity,
                },
                history_hasher,
            ),
            k: config.k.get(),
            metrics: LruKCacheMetrics::new(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.main.len()
    }

    pub fn is_empty(&self) -> bool {
        self.main.is_empty()
    }

    pub fn metrics(&self) -> &LruKCacheMetrics {
        &self.metrics
    }

    /// Looks up `key`. Hits only return a value once `key` is resident in
    /// `main`; observations below the promotion threshold always miss.
    pub fn get(&mut self, key: &K) -> Option<V> {
        if let Some(value) = self.main.get(key) {
            self.metrics.core.record_hit();
            return Some(value);
        }

        let (count, pending) = self.history.get(key).unwrap_or((0, None));
        let count = count.saturating_add(1);
        self.metrics.record_history_observation();

        if count >= self.k {
            if let Some(value) = pending {
                self.history.remove(key);
                self.main.put(key.clone(), value.clone());
                self.metrics.record_promotion();
                self.metrics.core.record_hit();
                return Some(value);
            }
        }

        self.history.put(key.clone(), (count, pending));
        self.metrics.core.record_miss();
        None
    }

    /// Inserts or overwrites `key`. Keys below the promotion threshold are
    /// stashed in `history` rather than admitted to `main`.
    pub fn put(&mut self, key: K, value: V) {
        if self.main.contains_key(&key) {
            self.main.put(key, value);
            return;
        }

        let (count, _) = self.history.get(&key).unwrap_or((0, None));
        let count = count.saturating_add(1);
        self.metrics.record_history_observation();

        if count >= self.k {
            self.history.remove(&key);
            self.main.put(key, value);
            self.metrics.record_promotion();
            self.metrics.core.record_insertion();
        } else {
            self.history.put(key, (count, Some(value)));
        }
    }
}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher> CacheMetrics for LruKCache<K, V, S> {
    fn metrics(&self) -> alloc::collections::BTreeMap<alloc::string::String, f64> {
        self.metrics.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "LRU-K"
    }
}
