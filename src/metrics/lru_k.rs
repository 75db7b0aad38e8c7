//! LRU-K Cache Metrics

extern crate alloc;

use super::{CacheMetrics, CoreCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// LRU-K metrics: core hit/miss/eviction bookkeeping for the main cache,
/// plus counts for the promotion gate itself.
#[derive(Debug, Default, Clone)]
pub struct LruKCacheMetrics {
    pub core: CoreCacheMetrics,
    /// Number of keys promoted from `history`/`pending` into `main`.
    pub promotions: u64,
    /// Number of observations recorded against keys not yet promoted.
    pub history_observations: u64,
}

impl LruKCacheMetrics {
    pub fn new(capacity: u64) -> Self {
        Self {
            core: CoreCacheMetrics::new(capacity),
            promotions: 0,
            history_observations: 0,
        }
    }

    pub fn record_promotion(&mut self) {
        self.promotions += 1;
    }

    pub fn record_history_observation(&mut self) {
        self.history_observations += 1;
    }

    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = self.core.to_btreemap();
        metrics.insert("promotions".to_string(), self.promotions as f64);
        metrics.insert(
            "history_observations".to_string(),
            self.history_observations as f64,
        );
        metrics
    }
}

impl CacheMetrics for LruKCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "LRU-K"
    }
}
