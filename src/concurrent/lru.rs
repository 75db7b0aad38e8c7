//! Sharded LRU Cache
//!
//! Partitions the key space across `N` independent [`LruCache`] instances,
//! each behind its own lock. There is no cross-shard coordination and no
//! global bookkeeping: a key always lands in the same shard (`hash(k) % N`),
//! and LRU ordering is only ever enforced within that shard.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │                         ShardedLruCache                              │
//! │                                                                      │
//! │  hash(key) % N  ──▶  Shard Selection                                 │
//! │                                                                      │
//! │  ┌──────────────┐ ┌──────────────┐     ┌──────────────┐              │
//! │  │   Shard 0    │ │   Shard 1    │ ... │   Shard N-1  │              │
//! │  │  ┌────────┐  │ │  ┌────────┐  │     │  ┌────────┐  │              │
//! │  │  │ Mutex  │  │ │  │ Mutex  │  │     │  │ Mutex  │  │              │
//! │  │  └────┬───┘  │ │  └────┬───┘  │     │  └────┬───┘  │              │
//! │  │  ┌────▼───┐  │ │  ┌────▼───┐  │     │  ┌────▼───┐  │              │
//! │  │  │LruCache│  │ │  │LruCache│  │     │  │LruCache│  │              │
//! │  │  └────────┘  │ │  └────────┘  │     │  └────────┘  │              │
//! │  └──────────────┘ └──────────────┘     └──────────────┘              │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Keys that hash to distinct shards never evict each other; a single
//! shard's working set is bounded by `ceil(total_capacity / N)`, the same as
//! every other shard.

extern crate alloc;

use crate::config::sharded::resolve_shard_count;
use crate::config::ShardedLruCacheConfig;
use crate::lru::LruCache;
use crate::metrics::CacheMetrics;
use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use parking_lot::Mutex;

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;

/// A thread-safe LRU cache, hash-partitioned across independent shards.
pub struct ShardedLruCache<K, V, S = DefaultHashBuilder> {
    shards: Box<[Mutex<LruCache<K, V, S>>]>,
    hash_builder: S,
}

impl<K, V, S> core::fmt::Debug for ShardedLruCache<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher + Clone,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ShardedLruCache")
            .field("shard_count", &self.shard_count())
            .field("len", &self.len())
            .finish()
    }
}

impl<K, V> ShardedLruCache<K, V, DefaultHashBuilder>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    pub fn new(config: ShardedLruCacheConfig) -> Self {
        Self::with_hasher(config, DefaultHashBuilder::default())
    }
}

impl<K, V, S> ShardedLruCache<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher + Clone,
{
    pub fn with_hasher(config: ShardedLruCacheConfig, hash_builder: S) -> Self {
        let shard_count = resolve_shard_count(config.shard_count);
        let per_shard = config.per_shard_config(shard_count);
        let shards: Vec<_> = (0..shard_count)
            .map(|_| Mutex::new(LruCache::with_hasher(per_shard, hash_builder.clone())))
            .collect();
        Self {
            shards: shards.into_boxed_slice(),
            hash_builder,
        }
    }

    #[inline]
    fn shard_index<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash,
    {
        (self.hash_builder.hash_one(key) as usize) % self.shards.len()
    }

    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    pub fn len(&self) -> usize {
        self.shards.iter().map(|s| s.lock().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.shards.iter().all(|s| s.lock().is_empty())
    }

    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.shards[self.shard_index(key)].lock().get(key)
    }

    pub fn put(&self, key: K, value: V) {
        let idx = self.shard_index(&key);
        self.shards[idx].lock().put(key, value);
    }

    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.shards[self.shard_index(key)].lock().remove(key)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.shards[self.shard_index(key)].lock().contains_key(key)
    }

    pub fn clear(&self) {
        for shard in self.shards.iter() {
            shard.lock().clear();
        }
    }
}

impl<K, V, S> CacheMetrics for ShardedLruCache<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher + Clone,
{
    fn metrics(&self) -> BTreeMap<String, f64> {
        let mut aggregated = BTreeMap::new();
        for shard in self.shards.iter() {
            for (key, value) in shard.lock().metrics().metrics() {
                *aggregated.entry(key).or_insert(0.0) += value;
            }
        }
        aggregated
    }

    fn algorithm_name(&self) -> &'static str {
        "ShardedLRU"
    }
}

// SAFETY: every shard is behind its own `Mutex`; there is no shared mutable
// state outside it.
unsafe impl<K: Send, V: Send, S: Send> Send for ShardedLruCache<K, V, S> {}
unsafe impl<K: Send, V: Send, S: Send + Sync> Sync for ShardedLruCache<K, V, S> {}

#[cfg(test)]
mod tests {
    use super::*;
    use core::num::NonZeroUsize;

    fn config(total: usize, shards: usize) -> ShardedLruCacheConfig {
        ShardedLruCacheConfig {
            total_capacity: NonZeroUsize::new(total).unwrap(),
            shard_count: shards,
        }
    }

    #[test]
    fn distinct_shards_do_not_evict_each_other() {
        let cache: ShardedLruCache<i32, i32> = ShardedLruCache::new(config(10, 2));
        for i in 0..6 {
            cache.put(i, i);
        }
        assert!(cache.len() <= 10);
    }

    #[test]
    fn get_without_put_misses() {
        let cache: ShardedLruCache<i32, i32> = ShardedLruCache::new(config(10, 2));
        assert_eq!(cache.get(&1), None);
    }

    #[test]
    fn zero_shard_count_resolves_to_at_least_one_shard() {
        let cache: ShardedLruCache<i32, i32> = ShardedLruCache::new(config(10, 0));
        assert!(cache.shard_count() >= 1);
    }

    #[test]
    fn overwrite_is_visible_immediately() {
        let cache: ShardedLruCache<i32, char> = ShardedLruCache::new(config(10, 4));
        cache.put(1, 'A');
        cache.put(1, 'Z');
        assert_eq!(cache.get(&1), Some('Z'));
    }
}
