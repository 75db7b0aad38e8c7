//! Cache Configuration Module
//!
//! Configuration structures for every cache algorithm in this crate. Each
//! cache type has its own dedicated config struct with public fields:
//!
//! - **Simple**: construct with a struct literal, no builder boilerplate.
//! - **Type safety**: every required parameter must be supplied up front.
//! - **No hidden defaults**: sizing and threshold parameters are explicit.
//!
//! # Configs
//!
//! | Config | Cache | Description |
//! |--------|-------|-------------|
//! | [`LruCacheConfig`] | [`LruCache`](crate::LruCache) | Least Recently Used |
//! | [`LruKCacheConfig`] | [`LruKCache`](crate::LruKCache) | LRU with a promotion gate |
//! | [`LfuCacheConfig`] | [`LfuCache`](crate::LfuCache) | Least Frequently Used |
//! | [`ArcCacheConfig`] | [`ArcCache`](crate::ArcCache) | Adaptive Replacement Cache |
//!
//! # Sharded Configs (require the `concurrent` feature)
//!
//! | Config | Cache | Description |
//! |--------|-------|-------------|
//! | [`ShardedLruCacheConfig`] | `ShardedLruCache` | Hash-partitioned LRU |
//! | [`ShardedLfuCacheConfig`] | `ShardedLfuCache` | Hash-partitioned LFU |
//!
//! # Examples
//!
//! ```
//! use replacement_cache::config::LruCacheConfig;
//! use replacement_cache::LruCache;
//! use core::num::NonZeroUsize;
//!
//! let config = LruCacheConfig {
//!     capacity: NonZeroUsize::new(1_000).unwrap(),
//! };
//! let cache: LruCache<String, i32> = LruCache::from_config(config);
//! ```

pub mod arc;
pub mod lfu;
pub mod lru;
pub mod lru_k;

#[cfg(feature = "concurrent")]
pub mod sharded;

pub use arc::ArcCacheConfig;
pub use lfu::LfuCacheConfig;
pub use lru::LruCacheConfig;
pub use lru_k::LruKCacheConfig;

#[cfg(feature = "concurrent")]
pub use sharded::{ShardedLfuCacheConfig, ShardedLruCacheConfig};
