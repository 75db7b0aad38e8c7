//! Sharded cache wrappers.
//!
//! Each sharded wrapper partitions the key space across `N` independent
//! single-threaded policy instances, each behind its own [`parking_lot::Mutex`].
//! There is no cross-shard coordination and no global bookkeeping: a
//! sharded wrapper scales with `N` only because keys that hash to distinct
//! shards proceed in parallel, not because any single shard is faster than
//! its unsharded counterpart.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ShardedLruCache`] | Hash-partitioned LRU |
//! | [`ShardedLfuCache`] | Hash-partitioned LFU |
//!
//! # Example
//!
//! ```rust,ignore
//! use replacement_cache::concurrent::ShardedLruCache;
//! use replacement_cache::config::ShardedLruCacheConfig;
//! use core::num::NonZeroUsize;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let cache = Arc::new(ShardedLruCache::new(ShardedLruCacheConfig {
//!     total_capacity: NonZeroUsize::new(1_000).unwrap(),
//!     shard_count: 16,
//! }));
//!
//! let handles: Vec<_> = (0..4).map(|t| {
//!     let cache = Arc::clone(&cache);
//!     thread::spawn(move || {
//!         for i in 0..1000 {
//!             let key = format!("key_{}_{}", t, i);
//!             cache.put(key.clone(), i);
//!             let _ = cache.get(&key);
//!         }
//!     })
//! }).collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! ```

pub mod lfu;
pub mod lru;

pub use self::lfu::ShardedLfuCache;
pub use self::lru::ShardedLruCache;
