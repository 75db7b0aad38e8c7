//! Cache Implementation Comparison
//!
//! Demonstrates how the four single-threaded policies in this crate differ
//! in what they evict given the same sequence of operations.
//!
//! Run with: cargo run --example cache_comparison

use replacement_cache::config::{ArcCacheConfig, LfuCacheConfig, LruCacheConfig, LruKCacheConfig};
use replacement_cache::{ArcCache, LfuCache, LruCache, LruKCache};
use core::num::NonZeroUsize;

fn main() {
    println!("Cache Implementation Comparison");
    println!("===============================");
    println!("Each cache has capacity of 3 items.");
    println!("We'll add 4 items to see eviction behavior, then access 'apple' multiple times.\n");

    let cap = NonZeroUsize::new(3).unwrap();

    let mut lru_cache: LruCache<&str, i32> = LruCache::new(cap);

    let lru_k_config = LruKCacheConfig {
        capacity: cap,
        history_capacity: NonZeroUsize::new(8).unwrap(),
        k: NonZeroUsize::new(2).unwrap(),
    };
    let mut lru_k_cache: LruKCache<&str, i32> = LruKCache::new(lru_k_config);

    let lfu_config = LfuCacheConfig {
        capacity: cap,
        max_average: NonZeroUsize::new(8).unwrap(),
    };
    let mut lfu_cache: LfuCache<&str, i32> = LfuCache::new(lfu_config);

    let arc_config = ArcCacheConfig {
        capacity: cap,
        transform_threshold: NonZeroUsize::new(2).unwrap(),
    };
    let mut arc_cache: ArcCache<&str, i32> = ArcCache::new(arc_config);

    let fruits = [("apple", 1), ("banana", 2), ("cherry", 3), ("date", 4)];

    for (name, value) in fruits {
        lru_cache.put(name, value);
        lru_k_cache.put(name, value);
        lfu_cache.put(name, value);
        arc_cache.put(name, value);
    }

    // Re-access "apple" repeatedly to favor frequency-driven policies.
    for _ in 0..5 {
        lru_cache.get(&"apple");
        lru_k_cache.get(&"apple");
        lfu_cache.get(&"apple");
        arc_cache.get(&"apple");
    }

    lru_cache.put("elderberry", 5);
    lru_k_cache.put("elderberry", 5);
    lfu_cache.put("elderberry", 5);
    arc_cache.put("elderberry", 5);

    println!("After inserting 'elderberry', who still has 'banana'?");
    println!("  LRU:   {}", lru_cache.get(&"banana").is_some());
    println!("  LRU-K: {}", lru_k_cache.get(&"banana").is_some());
    println!("  LFU:   {}", lfu_cache.get(&"banana").is_some());
    println!("  ARC:   {}", arc_cache.get(&"banana").is_some());

    println!("\nDoes 'apple' survive everywhere (it was re-accessed most)?");
    println!("  LRU:   {}", lru_cache.get(&"apple").is_some());
    println!("  LRU-K: {}", lru_k_cache.get(&"apple").is_some());
    println!("  LFU:   {}", lfu_cache.get(&"apple").is_some());
    println!("  ARC:   {}", arc_cache.get(&"apple").is_some());
}
