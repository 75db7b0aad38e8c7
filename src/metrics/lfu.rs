//! LFU Cache Metrics

extern crate alloc;

use super::{CacheMetrics, CoreCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// LFU metrics: core bookkeeping plus the running average frequency and a
/// counter for how many decay passes have run.
#[derive(Debug, Default, Clone)]
pub struct LfuCacheMetrics {
    pub core: CoreCacheMetrics,
    /// Number of times the average-frequency decay pass has run.
    pub decays: u64,
    /// Current running average access frequency (`total_freq / size`).
    pub avg_frequency: u64,
}

impl LfuCacheMetrics {
    pub fn new(capacity: u64) -> Self {
        Self {
            core: CoreCacheMetrics::new(capacity),
            decays: 0,
            avg_frequency: 0,
        }
    }

    pub fn record_decay(&mut self) {
        self.decays += 1;
    }

    pub fn set_avg_frequency(&mut self, avg: u64) {
        self.avg_frequency = avg;
    }

    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = self.core.to_btreemap();
        metrics.insert("decays".to_string(), self.decays as f64);
        metrics.insert("avg_frequency".to_string(), self.avg_frequency as f64);
        metrics
    }
}

impl CacheMetrics for LfuCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "LFU"
    }
}
