//! In-process cache replacement policies.
//!
//! This crate implements four cache replacement strategies behind a common
//! shape (`get`/`put`), plus two hash-sharded wrappers for concurrent use:
//!
//! | Algorithm | Eviction driver | Adapts over time |
//! |-----------|-----------------|-------------------|
//! | [`LruCache`] | Recency | No |
//! | [`LruKCache`] | Recency, gated by a `K`-observation promotion threshold | No |
//! | [`LfuCache`] | Frequency, with average-frequency decay | Yes |
//! | [`ArcCache`] | Coupled recency/frequency halves, ghost-hit adaptive | Yes |
//! | [`ShardedLruCache`] / [`ShardedLfuCache`] | Hash-partitioned LRU/LFU | — |
//!
//! ## Quick Reference
//!
//! ### LRU (Least Recently Used)
//!
//! Evicts the item that hasn't been accessed for the longest time.
//!
//! ```rust
//! use replacement_cache::LruCache;
//! use core::num::NonZeroUsize;
//!
//! let mut cache: LruCache<&str, i32> = LruCache::new(NonZeroUsize::new(2).unwrap());
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get(&"a");   // "a" becomes most recently used
//! cache.put("c", 3); // "b" evicted (was least recently used)
//! assert!(cache.get(&"b").is_none());
//! ```
//!
//! ### LRU-K
//!
//! Shields the main LRU from one-shot accesses: a key is admitted only once
//! it has accumulated `k` observations.
//!
//! ```rust
//! use replacement_cache::LruKCache;
//! use replacement_cache::config::LruKCacheConfig;
//! use core::num::NonZeroUsize;
//!
//! let config = LruKCacheConfig {
//!     capacity: NonZeroUsize::new(100).unwrap(),
//!     history_capacity: NonZeroUsize::new(500).unwrap(),
//!     k: NonZeroUsize::new(2).unwrap(),
//! };
//! let mut cache: LruKCache<&str, i32> = LruKCache::new(config);
//! assert_eq!(cache.get(&"scanned-once"), None); // first observation, not admitted
//! ```
//!
//! ### LFU (Least Frequently Used)
//!
//! Tracks access frequency in per-frequency buckets and evicts from the
//! lowest non-empty bucket.
//!
//! ```rust
//! use replacement_cache::LfuCache;
//! use replacement_cache::config::LfuCacheConfig;
//! use core::num::NonZeroUsize;
//!
//! let config = LfuCacheConfig {
//!     capacity: NonZeroUsize::new(2).unwrap(),
//!     max_average: NonZeroUsize::new(8).unwrap(),
//! };
//! let mut cache: LfuCache<&str, i32> = LfuCache::new(config);
//! cache.put("rare", 1);
//! cache.put("popular", 2);
//! for _ in 0..10 {
//!     cache.get(&"popular");
//! }
//! cache.put("new", 3); // "rare" evicted (lowest frequency)
//! assert!(cache.get(&"popular").is_some());
//! ```
//!
//! ### ARC (Adaptive Replacement Cache)
//!
//! Runs a recency half and a frequency half side by side, each with its own
//! ghost list; a ghost hit shifts one unit of capacity toward the half that
//! ghosted it.
//!
//! ```rust
//! use replacement_cache::ArcCache;
//! use replacement_cache::config::ArcCacheConfig;
//! use core::num::NonZeroUsize;
//!
//! let config = ArcCacheConfig {
//!     capacity: NonZeroUsize::new(100).unwrap(),
//!     transform_threshold: NonZeroUsize::new(2).unwrap(),
//! };
//! let mut cache: ArcCache<&str, i32> = ArcCache::new(config);
//! cache.put("a", 1);
//! assert_eq!(cache.get(&"a"), Some(1));
//! ```
//!
//! ## Sharded Caches
//!
//! Enable the `concurrent` feature for hash-partitioned, thread-safe
//! wrappers around `LruCache` and `LfuCache`:
//!
//! ```toml
//! [dependencies]
//! replacement-cache = { version = "0.1", features = ["concurrent"] }
//! ```
//!
//! ```rust,ignore
//! use replacement_cache::concurrent::ShardedLruCache;
//! use replacement_cache::config::ShardedLruCacheConfig;
//! use core::num::NonZeroUsize;
//! use std::sync::Arc;
//!
//! let cache = Arc::new(ShardedLruCache::new(ShardedLruCacheConfig {
//!     total_capacity: NonZeroUsize::new(10_000).unwrap(),
//!     shard_count: 16,
//! }));
//!
//! let cache_clone = Arc::clone(&cache);
//! std::thread::spawn(move || {
//!     cache_clone.put("key".to_string(), 42);
//! });
//! ```
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────────┐
//! │              ShardedLruCache (16 shards)                           │
//! │                                                                    │
//! │  ┌─────────┐ ┌─────────┐ ┌─────────┐     ┌─────────┐              │
//! │  │ Shard 0 │ │ Shard 1 │ │ Shard 2 │ ... │ Shard15 │              │
//! │  │ [Mutex] │ │ [Mutex] │ │ [Mutex] │     │ [Mutex] │              │
//! │  └─────────┘ └─────────┘ └─────────┘     └─────────┘              │
//! │       ▲           ▲           ▲               ▲                   │
//! │  hash(k1)%16  hash(k2)%16  hash(k3)%16   hash(kN)%16              │
//! └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`lru`]: Least Recently Used cache implementation
//! - [`lru_k`]: LRU fronted by a `k`-observation promotion gate
//! - [`lfu`]: Least Frequently Used cache implementation with decay
//! - [`arc`]: Adaptive Replacement Cache
//! - [`config`]: Configuration structures for all cache algorithms
//! - [`metrics`]: Metrics collection for cache performance monitoring
//! - [`concurrent`]: Hash-sharded, thread-safe cache wrappers (requires `concurrent` feature)

#![no_std]

#[cfg(any(feature = "std", feature = "concurrent", test))]
extern crate std;

#[cfg(test)]
extern crate scoped_threadpool;

/// Unified cache entry type.
///
/// Provides a generic `CacheEntry<K, V, M>` structure holding key, value,
/// and access count, with an optional algorithm-specific metadata payload
/// `M`. This is the foundation every policy in this crate builds on.
pub mod entry;

/// Intrusive doubly linked list with sentinel head/tail nodes.
///
/// **Note**: this module is internal infrastructure and should not be used
/// directly by library consumers. It exposes unsafe raw pointer operations
/// that require careful invariant maintenance. Use the high-level cache
/// implementations instead.
pub(crate) mod list;

/// Cache configuration structures.
///
/// Provides configuration structures for all cache algorithm implementations.
pub mod config;

/// Least Recently Used (LRU) cache implementation.
///
/// Provides a fixed-size cache that evicts the least recently used entry
/// when capacity is reached.
pub mod lru;

/// LRU fronted by a `k`-observation promotion gate.
///
/// Shields a main LRU cache from one-shot accesses: a key is admitted to
/// the main cache only once it has accumulated `k` cumulative observations.
pub mod lru_k;

/// Least Frequently Used (LFU) cache implementation.
///
/// Provides a fixed-size cache that evicts the least frequently used entry
/// when capacity is reached, with average-frequency decay to prevent
/// long-lived hot entries from becoming permanently unevictable.
pub mod lfu;

/// Adaptive Replacement Cache (ARC).
///
/// Runs a recency half and a frequency half side by side, each with its own
/// ghost list of recently evicted keys, adapting the split between them
/// based on which half's ghost list is hit.
pub mod arc;

/// Cache metrics system.
///
/// Provides a flexible metrics collection and reporting system for all cache
/// algorithms. Each algorithm tracks algorithm-specific metrics while
/// implementing a common interface.
pub mod metrics;

/// Hash-sharded, thread-safe cache wrappers.
///
/// Partitions the key space across multiple independent policy instances,
/// each protected by its own lock, to reduce contention under concurrent
/// access. Available when the `concurrent` feature is enabled.
#[cfg(feature = "concurrent")]
pub mod concurrent;

// Re-export cache types
pub use arc::ArcCache;
pub use lfu::LfuCache;
pub use lru::LruCache;
pub use lru_k::LruKCache;

// Re-export entry type
pub use entry::CacheEntry;

#[cfg(feature = "concurrent")]
pub use concurrent::{ShardedLfuCache, ShardedLruCache};
