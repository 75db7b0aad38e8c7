//! Integration-level correctness tests for the four single-threaded cache
//! policies. Unit tests inside each module cover internal bookkeeping; these
//! tests exercise the public API the way a caller would, including the
//! cross-algorithm scenarios every policy is expected to satisfy.

use replacement_cache::config::{ArcCacheConfig, LfuCacheConfig, LruCacheConfig, LruKCacheConfig};
use replacement_cache::metrics::CacheMetrics;
use replacement_cache::{ArcCache, LfuCache, LruCache, LruKCache};
use std::num::NonZeroUsize;

fn make_lru<K: std::hash::Hash + Eq + Clone, V: Clone>(cap: usize) -> LruCache<K, V> {
    LruCache::from_config(LruCacheConfig {
        capacity: NonZeroUsize::new(cap).unwrap(),
    })
}

fn make_lru_k<K: std::hash::Hash + Eq + Clone, V: Clone>(
    cap: usize,
    history: usize,
    k: usize,
) -> LruKCache<K, V> {
    LruKCache::new(LruKCacheConfig {
        capacity: NonZeroUsize::new(cap).unwrap(),
        history_capacity: NonZeroUsize::new(history).unwrap(),
        k: NonZeroUsize::new(k).unwrap(),
    })
}

fn make_lfu<K: std::hash::Hash + Eq + Clone, V: Clone>(cap: usize) -> LfuCache<K, V> {
    LfuCache::new(LfuCacheConfig {
        capacity: NonZeroUsize::new(cap).unwrap(),
        max_average: NonZeroUsize::new(32).unwrap(),
    })
}

fn make_arc<K: std::hash::Hash + Eq + Clone, V: Clone>(cap: usize, t: usize) -> ArcCache<K, V> {
    ArcCache::new(ArcCacheConfig {
        capacity: NonZeroUsize::new(cap).unwrap(),
        transform_threshold: NonZeroUsize::new(t).unwrap(),
    })
}

// ---------------------------------------------------------------------
// LRU
// ---------------------------------------------------------------------

#[test]
fn test_lru_evicts_least_recently_used() {
    let mut cache = make_lru(2);
    cache.put("a", 1);
    cache.put("b", 2);
    cache.get(&"a"); // "a" is now most recently used
    cache.put("c", 3); // evicts "b"

    assert_eq!(cache.get(&"a"), Some(1));
    assert!(cache.get(&"b").is_none());
    assert_eq!(cache.get(&"c"), Some(3));
}

#[test]
fn test_lru_eviction_order_is_predictable() {
    let mut cache = make_lru(3);
    cache.put(1, 'A');
    cache.put(2, 'B');
    cache.put(3, 'C');
    cache.put(4, 'D'); // evicts 1
    assert!(cache.get(&1).is_none());
    cache.put(5, 'E'); // evicts 2
    assert!(cache.get(&2).is_none());
    assert_eq!(cache.get(&3), Some('C'));
    assert_eq!(cache.get(&4), Some('D'));
    assert_eq!(cache.get(&5), Some('E'));
}

#[test]
fn test_lru_get_updates_recency() {
    let mut cache = make_lru(2);
    cache.put(1, "one");
    cache.put(2, "two");
    cache.get(&1);
    cache.put(3, "three"); // evicts 2, since 1 was just touched
    assert!(cache.get(&2).is_none());
    assert_eq!(cache.get(&1), Some("one"));
}

#[test]
fn test_lru_capacity_one() {
    let mut cache = make_lru(1);
    cache.put(1, "a");
    cache.put(2, "b");
    assert!(cache.get(&1).is_none());
    assert_eq!(cache.get(&2), Some("b"));
}

#[test]
fn test_lru_update_existing_key_does_not_evict() {
    let mut cache = make_lru(2);
    cache.put(1, "a");
    cache.put(2, "b");
    cache.put(1, "a-updated");
    assert_eq!(cache.get(&1), Some("a-updated"));
    assert_eq!(cache.get(&2), Some("b"));
}

#[test]
fn test_lru_clear() {
    let mut cache = make_lru(3);
    cache.put(1, "a");
    cache.put(2, "b");
    cache.clear();
    assert!(cache.is_empty());
    assert!(cache.get(&1).is_none());
    assert!(cache.get(&2).is_none());
}

// ---------------------------------------------------------------------
// LRU-K
// ---------------------------------------------------------------------

#[test]
fn test_lru_k_single_observation_does_not_promote() {
    // k=3: the put is the 1st observation, the get below is the 2nd —
    // still short of the threshold, so it must miss.
    let mut cache = make_lru_k(2, 4, 3);
    cache.put("a", 1);
    assert!(cache.get(&"a").is_none());
}

#[test]
fn test_lru_k_second_observation_promotes() {
    let mut cache = make_lru_k(2, 4, 2);
    cache.put("a", 1); // 1st observation
    assert_eq!(cache.get(&"a"), Some(1)); // 2nd observation promotes
}

#[test]
fn test_lru_k_history_eviction_drops_pending_value() {
    let mut cache = make_lru_k(8, 2, 3);
    cache.put(1, "a");
    cache.put(2, "b");
    cache.put(3, "c"); // evicts key 1 out of the small history cache
    assert_eq!(cache.get(&1), None);
}

#[test]
fn test_lru_k_resident_key_eviction_follows_main_lru_order() {
    let mut cache = make_lru_k(2, 4, 1);
    cache.put(1, "a"); // k=1, promotes immediately
    cache.put(2, "b");
    cache.put(3, "c"); // evicts 1 from main
    assert!(cache.get(&1).is_none());
    assert_eq!(cache.get(&2), Some("b"));
    assert_eq!(cache.get(&3), Some("c"));
}

// ---------------------------------------------------------------------
// LFU
// ---------------------------------------------------------------------

#[test]
fn test_lfu_evicts_least_frequently_used() {
    let mut cache = make_lfu(2);
    cache.put("a", 1);
    cache.put("b", 2);
    cache.get(&"a");
    cache.get(&"a");
    cache.put("c", 3); // evicts "b", the lower-frequency entry
    assert_eq!(cache.get(&"a"), Some(1));
    assert!(cache.get(&"b").is_none());
    assert_eq!(cache.get(&"c"), Some(3));
}

#[test]
fn test_lfu_frequency_accumulates_across_gets() {
    let mut cache = make_lfu(3);
    cache.put(1, "a");
    cache.put(2, "b");
    cache.put(3, "c");
    for _ in 0..4 {
        cache.get(&1);
    }
    cache.get(&2);
    cache.put(4, "d"); // evicts 3, the untouched entry
    assert!(cache.get(&3).is_none());
    assert_eq!(cache.get(&1), Some("a"));
    assert_eq!(cache.get(&2), Some("b"));
}

#[test]
fn test_lfu_overwrite_is_visible_immediately() {
    let mut cache = make_lfu(2);
    cache.put(1, "a");
    cache.put(1, "a-updated");
    assert_eq!(cache.get(&1), Some("a-updated"));
}

#[test]
fn test_lfu_capacity_one() {
    let mut cache = make_lfu(1);
    cache.put(1, "a");
    cache.put(2, "b");
    assert!(cache.get(&1).is_none());
    assert_eq!(cache.get(&2), Some("b"));
}

#[test]
fn test_lfu_clear_resets_state() {
    let mut cache = make_lfu(3);
    cache.put(1, "a");
    cache.get(&1);
    cache.get(&1);
    cache.clear();
    assert!(cache.is_empty());
    cache.put(1, "b");
    assert_eq!(cache.get(&1), Some("b"));
}

// ---------------------------------------------------------------------
// ARC
// ---------------------------------------------------------------------

#[test]
fn test_arc_ghost_hit_shifts_capacity_and_then_hits() {
    // The concrete scenario: capacity 2, transform_threshold 2.
    let mut cache = make_arc(2, 2);
    cache.put(1, "A");
    cache.put(2, "B");
    cache.put(3, "C"); // evicts 1 into the LRU ghost list
    assert!(cache.get(&1).is_none());

    cache.put(1, "X"); // ghost hit on 1 shifts capacity toward LRU
    assert_eq!(cache.get(&1), Some("X"));
}

#[test]
fn test_arc_promotes_to_lfu_after_transform_threshold() {
    let mut cache = make_arc(3, 2);
    cache.put(1, "a");
    cache.get(&1); // 2nd access reaches the transform threshold
    cache.put(2, "b");
    cache.put(3, "c");
    cache.put(4, "d"); // pressure; frequently-accessed 1 should survive
    assert_eq!(cache.get(&1), Some("a"));
}

#[test]
fn test_arc_capacity_never_exceeded() {
    let mut cache = make_arc(3, 2);
    for i in 0..10 {
        cache.put(i, i * 10);
    }
    assert!(cache.len() <= 3);
}

// ---------------------------------------------------------------------
// Cross-algorithm invariants
// ---------------------------------------------------------------------

#[test]
fn test_all_caches_basic_put_get() {
    let mut lru = make_lru(3);
    let mut lru_k = make_lru_k(3, 6, 1);
    let mut lfu = make_lfu(3);
    let mut arc = make_arc(3, 2);

    lru.put("x", 1);
    lru_k.put("x", 1);
    lfu.put("x", 1);
    arc.put("x", 1);

    assert_eq!(lru.get(&"x"), Some(1));
    assert_eq!(lru_k.get(&"x"), Some(1));
    assert_eq!(lfu.get(&"x"), Some(1));
    assert_eq!(arc.get(&"x"), Some(1));
}

#[test]
fn test_all_caches_respect_capacity() {
    let mut lru = make_lru(2);
    let mut lru_k = make_lru_k(2, 4, 1);
    let mut lfu = make_lfu(2);
    let mut arc = make_arc(2, 2);

    for i in 0..5 {
        lru.put(i, i);
        lru_k.put(i, i);
        lfu.put(i, i);
        arc.put(i, i);
    }

    assert!(lru.len() <= 2);
    assert!(lru_k.len() <= 2);
    assert!(lfu.len() <= 2);
    assert!(arc.len() <= 2);
}

#[test]
fn test_all_caches_update_existing_key() {
    let mut lru = make_lru(3);
    let mut lfu = make_lfu(3);
    let mut arc = make_arc(3, 2);

    lru.put(1, "a");
    lfu.put(1, "a");
    arc.put(1, "a");

    lru.put(1, "a-updated");
    lfu.put(1, "a-updated");
    arc.put(1, "a-updated");

    assert_eq!(lru.get(&1), Some("a-updated"));
    assert_eq!(lfu.get(&1), Some("a-updated"));
    assert_eq!(arc.get(&1), Some("a-updated"));
}

#[test]
fn test_all_caches_expose_metrics() {
    let mut lru = make_lru(2);
    let mut lfu = make_lfu(2);
    let mut arc = make_arc(2, 2);

    lru.put(1, "a");
    lru.get(&1);
    lru.get(&2);

    lfu.put(1, "a");
    lfu.get(&1);
    lfu.get(&2);

    arc.put(1, "a");
    arc.get(&1);
    arc.get(&2);

    let lru_dyn: &dyn CacheMetrics = &lru;
    let lfu_dyn: &dyn CacheMetrics = &lfu;
    let arc_dyn: &dyn CacheMetrics = &arc;

    for metrics in [lru_dyn.metrics(), lfu_dyn.metrics(), arc_dyn.metrics()] {
        assert!(metrics.get("hits").unwrap_or(&0.0) >= &1.0);
        assert!(metrics.get("misses").unwrap_or(&0.0) >= &1.0);
    }
}
