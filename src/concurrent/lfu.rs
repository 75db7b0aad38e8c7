//! Sharded LFU Cache
//!
//! Hash-partitioned counterpart to [`crate::concurrent::lru::ShardedLruCache`]
//! wrapping independent [`LfuCache`] shards instead. `max_average` applies
//! within each shard independently — there is no global frequency
//! bookkeeping across shards.

extern crate alloc;

use crate::config::sharded::resolve_shard_count;
use crate::config::ShardedLfuCacheConfig;
use crate::lfu::LfuCache;
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

/// A thread-safe LFU cache, hash-partitioned across independent shards.
pub struct ShardedLfuCache<K, V, S = DefaultHashBuilder> {
    shards: Box<[Mutex<LfuCache<K, V, S>>]>,
    hash_builder: S,
}

impl<K, V, S> core::fmt::Debug for ShardedLfuCache<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher + Clone,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ShardedLfuCache")
            .field("shard_count", &self.shard_count())
            .field("len", &self.len())
            .finish()
    }
}

impl<K, V> ShardedLfuCache<K, V, DefaultHashBuilder>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    pub fn new(config: ShardedLfuCacheConfig) -> Self {
        Self::with_hasher(config, DefaultHashBuilder::default())
    }
}

impl<K, V, S> ShardedLfuCache<K, V, S>
where
    K: Hash + Eq + Clone,
    V: Clone,
    S: BuildHasher + Clone,
{
    pub fn with_hasher(config: ShardedLfuCacheConfig, hash_builder: S) -> Self {
        let shard_count = resolve_shard_count(config.shard_count);
        let per_shard = config.per_shard_config(shard_count);
        let shards: Vec<_> = (0..shard_count)
            .map(|_| Mutex::new(LfuCache::with_hasher(per_shard, hash_builder.clone())))
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

    pub fn get(&self, key: &K) -> Option<V> {
        self.shards[self.shard_index(key)].lock().get(key)
    }

    pub fn put(&self, key: K, value: V) {
        let idx = self.shard_index(&key);
        self.shards[idx].lock().put(key, value);
    }

    pub fn clear(&self) {
        for shard in self.shards.iter() {
            shard.lock().clear();
        }
    }
}

impl<K, V, S> CacheMetrics for ShardedLfuCache<K, V, S>
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
        "ShardedLFU"
    }
}

// SAFETY: every shard is behind its own `Mutex`; there is no shared mutable
// state outside it.
unsafe impl<K: Send, V: Send, S: Send> Send for ShardedLfuCache<K, V, S> {}
unsafe impl<K: Send, V: Send, S: Send + Sync> Sync for ShardedLfuCache<K, V, S> {}
