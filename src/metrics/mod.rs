//! Cache Metrics System
//!
//! Provides a flexible metrics system for cache algorithms using BTreeMap-based
//! metrics reporting. Each cache algorithm tracks its own specific metrics
//! while implementing a common `CacheMetrics` trait.
//!
//! # Why BTreeMap over HashMap?
//!
//! BTreeMap is used instead of HashMap for several reasons:
//! - **Deterministic ordering**: metrics always appear in consistent order.
//! - **Reproducible output**: essential for testing and benchmark comparisons.
//! - **Stable serialization**: exports have predictable key ordering.
//!
//! The performance difference (O(log n) vs O(1)) is negligible with a
//! handful of metric keys, but the deterministic behavior is invaluable for
//! a library whose callers diff metrics snapshots across runs.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

pub mod arc;
pub mod lfu;
pub mod lru;
pub mod lru_k;

pub use arc::ArcCacheMetrics;
pub use lfu::LfuCacheMetrics;
pub use lru::LruCacheMetrics;
pub use lru_k::LruKCacheMetrics;

/// Common metrics tracked by all cache algorithms.
#[derive(Debug, Default, Clone)]
pub struct CoreCacheMetrics {
    /// Total number of `get` requests made to the cache.
    pub requests: u64,
    /// Number of requests that resulted in a cache hit.
    pub hits: u64,
    /// Number of entries evicted due to capacity pressure.
    pub evictions: u64,
    /// Current number of live entries.
    pub current_size: u64,
    /// Configured capacity.
    pub capacity: u64,
}

impl CoreCacheMetrics {
    pub fn new(capacity: u64) -> Self {
        Self {
            capacity,
            ..Default::default()
        }
    }

    pub fn record_hit(&mut self) {
        self.requests += 1;
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.requests += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
        self.current_size = self.current_size.saturating_sub(1);
    }

    pub fn record_insertion(&mut self) {
        self.current_size += 1;
    }

    /// Hit rate in `[0.0, 1.0]`, or `0.0` if no requests were made.
    pub fn hit_rate(&self) -> f64 {
        if self.requests > 0 {
            self.hits as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Miss rate in `[0.0, 1.0]`, or `0.0` if no requests were made.
    pub fn miss_rate(&self) -> f64 {
        if self.requests > 0 {
            (self.requests - self.hits) as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    pub fn cache_utilization(&self) -> f64 {
        if self.capacity > 0 {
            self.current_size as f64 / self.capacity as f64
        } else {
            0.0
        }
    }

    /// Converts core metrics to a `BTreeMap` for deterministic reporting.
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();
        metrics.insert("requests".to_string(), self.requests as f64);
        metrics.insert("hits".to_string(), self.hits as f64);
        metrics.insert(
            "misses".to_string(),
            (self.requests - self.hits) as f64,
        );
        metrics.insert("evictions".to_string(), self.evictions as f64);
        metrics.insert("current_size".to_string(), self.current_size as f64);
        metrics.insert("capacity".to_string(), self.capacity as f64);
        metrics.insert("hit_rate".to_string(), self.hit_rate());
        metrics.insert("miss_rate".to_string(), self.miss_rate());
        metrics.insert("cache_utilization".to_string(), self.cache_utilization());
        metrics
    }
}

/// Trait implemented by every cache algorithm for metrics reporting.
///
/// Uses `BTreeMap` so iteration order is deterministic, which matters for
/// reproducible benchmarks and snapshot-style tests.
pub trait CacheMetrics {
    /// Returns all metrics as key-value pairs in deterministic order.
    fn metrics(&self) -> BTreeMap<String, f64>;

    /// Static name identifying the algorithm (e.g. `"LRU"`, `"ARC"`).
    fn algorithm_name(&self) -> &'static str;
}
