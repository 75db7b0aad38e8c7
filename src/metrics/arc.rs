//! ARC Cache Metrics

extern crate alloc;

use super::CacheMetrics;
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// ARC metrics: each half reports its own core metrics (recency and
/// frequency), plus ghost-hit counters that drove capacity adaptation.
#[derive(Debug, Default, Clone)]
pub struct ArcCacheMetrics {
    pub requests: u64,
    pub hits: u64,
    /// Ghost hits on the recency half's ghost list (shifted capacity toward LRU).
    pub lru_ghost_hits: u64,
    /// Ghost hits on the frequency half's ghost list (shifted capacity toward LFU).
    pub lfu_ghost_hits: u64,
    /// Current capacity of the recency half.
    pub lru_capacity: u64,
    /// Current capacity of the frequency half.
    pub lfu_capacity: u64,
}

impl ArcCacheMetrics {
    pub fn new(initial_half_capacity: u64) -> Self {
        Self {
            lru_capacity: initial_half_capacity,
            lfu_capacity: initial_half_capacity,
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

    pub fn record_lru_ghost_hit(&mut self) {
        self.lru_ghost_hits += 1;
    }

    pub fn record_lfu_ghost_hit(&mut self) {
        self.lfu_ghost_hits += 1;
    }

    pub fn set_capacities(&mut self, lru_capacity: u64, lfu_capacity: u64) {
        self.lru_capacity = lru_capacity;
        self.lfu_capacity = lfu_capacity;
    }

    pub fn hit_rate(&self) -> f64 {
        if self.requests > 0 {
            self.hits as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();
        metrics.insert("requests".to_string(), self.requests as f64);
        metrics.insert("hits".to_string(), self.hits as f64);
        metrics.insert("hit_rate".to_string(), self.hit_rate());
        metrics.insert("lru_ghost_hits".to_string(), self.lru_ghost_hits as f64);
        metrics.insert("lfu_ghost_hits".to_string(), self.lfu_ghost_hits as f64);
        metrics.insert("lru_capacity".to_string(), self.lru_capacity as f64);
        metrics.insert("lfu_capacity".to_string(), self.lfu_capacity as f64);
        metrics
    }
}

impl CacheMetrics for ArcCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "ARC"
    }
}
