//! Comprehensive Cache Metrics Demonstration
//!
//! Demonstrates the metrics system across all four single-threaded policies
//! (LRU, LRU-K, LFU, ARC), showing both core metrics and algorithm-specific
//! metrics for performance analysis and comparison.

use replacement_cache::config::{ArcCacheConfig, LfuCacheConfig, LruCacheConfig, LruKCacheConfig};
use replacement_cache::metrics::CacheMetrics;
use replacement_cache::{ArcCache, LfuCache, LruCache, LruKCache};
use core::num::NonZeroUsize;
use std::collections::BTreeMap;

fn main() {
    println!("Cache Metrics System - Comparison");
    println!("==================================\n");

    let capacity = NonZeroUsize::new(3).unwrap();

    println!("Comparing cache algorithms with identical workloads:");
    println!("  Capacity: {} items", capacity.get());
    println!("  Operations: insert 3 items, access patterns, insert 2 more\n");

    let caches: Vec<(String, Box<dyn CacheMetrics>)> = vec![
        ("LRU".to_string(), Box::new(test_lru_cache(capacity))),
        ("LRU-K".to_string(), Box::new(test_lru_k_cache(capacity))),
        ("LFU".to_string(), Box::new(test_lfu_cache(capacity))),
        ("ARC".to_string(), Box::new(test_arc_cache(capacity))),
    ];

    display_metrics_comparison(&caches);
}

fn test_lru_cache(capacity: NonZeroUsize) -> LruCache<&'static str, i32> {
    let config = LruCacheConfig { capacity };
    let mut cache = LruCache::from_config(config);

    cache.put("apple", 1);
    cache.put("banana", 2);
    cache.put("cherry", 3);
    cache.get(&"apple");
    cache.get(&"apple");
    cache.get(&"banana");
    cache.get(&"missing");
    cache.put("date", 4);
    cache.put("elderberry", 5);
    cache
}

fn test_lru_k_cache(capacity: NonZeroUsize) -> LruKCache<&'static str, i32> {
    let config = LruKCacheConfig {
        capacity,
        history_capacity: NonZeroUsize::new(8).unwrap(),
        k: NonZeroUsize::new(2).unwrap(),
    };
    let mut cache = LruKCache::new(config);

    cache.put("apple", 1);
    cache.get(&"apple");
    cache.put("banana", 2);
    cache.get(&"banana");
    cache.put("cherry", 3);
    cache.get(&"missing");
    cache.put("date", 4);
    cache.put("elderberry", 5);
    cache
}

fn test_lfu_cache(capacity: NonZeroUsize) -> LfuCache<&'static str, i32> {
    let config = LfuCacheConfig {
        capacity,
        max_average: NonZeroUsize::new(8).unwrap(),
    };
    let mut cache = LfuCache::new(config);

    cache.put("apple", 1);
    cache.put("banana", 2);
    cache.put("cherry", 3);
    cache.get(&"apple");
    cache.get(&"apple");
    cache.get(&"banana");
    cache.get(&"missing");
    cache.put("date", 4);
    cache.put("elderberry", 5);
    cache
}

fn test_arc_cache(capacity: NonZeroUsize) -> ArcCache<&'static str, i32> {
    let config = ArcCacheConfig {
        capacity,
        transform_threshold: NonZeroUsize::new(2).unwrap(),
    };
    let mut cache = ArcCache::new(config);

    cache.put("apple", 1);
    cache.put("banana", 2);
    cache.put("cherry", 3);
    cache.get(&"apple");
    cache.get(&"apple");
    cache.get(&"banana");
    cache.get(&"missing");
    cache.put("date", 4);
    cache.put("elderberry", 5);
    cache
}

fn display_metrics_comparison(caches: &[(String, Box<dyn CacheMetrics>)]) {
    println!("Core Performance Metrics:");
    println!(
        "{:<10} {:<8} {:<8} {:<10} {:<12} {:<8}",
        "Algorithm", "Hits", "Misses", "Evictions", "Hit Rate %", "Requests"
    );
    println!("{}", "-".repeat(70));

    for (name, cache) in caches {
        let metrics = cache.metrics();
        let hits = metrics.get("hits").unwrap_or(&0.0);
        let requests = metrics.get("requests").unwrap_or(&0.0);
        let evictions = metrics.get("evictions").unwrap_or(&0.0);
        let hit_rate = metrics.get("hit_rate").unwrap_or(&0.0) * 100.0;
        let misses = requests - hits;

        println!(
            "{name:<10} {hits:<8.0} {misses:<8.0} {evictions:<10.0} {hit_rate:<12.1} {requests:<8.0}"
        );
    }

    println!("\nAlgorithm-specific metrics:\n");
    for (name, cache) in caches {
        let metrics = cache.metrics();
        println!("{name} cache metrics:");
        print_extra_metrics(&metrics);
        println!();
    }
}

fn print_extra_metrics(metrics: &BTreeMap<String, f64>) {
    let known_core = [
        "requests",
        "hits",
        "misses",
        "evictions",
        "current_size",
        "capacity",
        "hit_rate",
        "miss_rate",
        "cache_utilization",
    ];
    for (key, value) in metrics {
        if !known_core.contains(&key.as_str()) {
            println!("  {key}: {value:.2}");
        }
    }
}
