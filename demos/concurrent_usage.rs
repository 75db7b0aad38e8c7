//! Concurrent Cache Usage Examples
//!
//! Demonstrates multi-threaded usage of the hash-sharded wrappers.
//!
//! Run with: cargo run --example concurrent_usage --features concurrent

use replacement_cache::config::{ShardedLfuCacheConfig, ShardedLruCacheConfig};
use replacement_cache::{ShardedLfuCache, ShardedLruCache};
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::thread;

fn main() {
    println!("Sharded LRU across 4 threads");
    println!("=============================");

    let lru_config = ShardedLruCacheConfig {
        total_capacity: NonZeroUsize::new(10_000).unwrap(),
        shard_count: 16,
    };
    let lru_cache: Arc<ShardedLruCache<String, i32>> = Arc::new(ShardedLruCache::new(lru_config));

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let cache = Arc::clone(&lru_cache);
            thread::spawn(move || {
                for i in 0..1_000 {
                    let key = format!("key_{t}_{i}");
                    cache.put(key.clone(), i);
                    let _ = cache.get(&key);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    println!("Total entries across all shards: {}", lru_cache.len());
    println!("Shard count: {}", lru_cache.shard_count());

    println!("\nSharded LFU across 4 threads");
    println!("=============================");

    let lfu_config = ShardedLfuCacheConfig {
        total_capacity: NonZeroUsize::new(10_000).unwrap(),
        shard_count: 16,
        max_average: NonZeroUsize::new(64).unwrap(),
    };
    let lfu_cache: Arc<ShardedLfuCache<String, i32>> = Arc::new(ShardedLfuCache::new(lfu_config));

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let cache = Arc::clone(&lfu_cache);
            thread::spawn(move || {
                for i in 0..1_000 {
                    let key = format!("key_{t}_{i}");
                    cache.put(key.clone(), i);
                    let _ = cache.get(&key);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    println!("Total entries across all shards: {}", lfu_cache.len());
}
