//! LRU Cache Metrics

extern crate alloc;

use super::{CacheMetrics, CoreCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::String;

/// LRU-specific metrics. LRU has no bookkeeping beyond the common core
/// metrics, but keeps its own struct for consistency with the other
/// algorithms and as a place for future recency-specific metrics.
#[derive(Debug, Default, Clone)]
pub struct LruCacheMetrics {
    pub core: CoreCacheMetrics,
}

impl LruCacheMetrics {
    pub fn new(capacity: u64) -> Self {
        Self {
            core: CoreCacheMetrics::new(capacity),
        }
    }

    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        self.core.to_btreemap()
    }
}

impl CacheMetrics for LruCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "LRU"
    }
}
