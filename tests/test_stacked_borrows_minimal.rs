// Minimal reproduction of the bucket-reassignment aliasing hazard LFU and
// ARC must avoid: reading a node's value through a raw pointer must not be
// used to index back into a map/list while that read is still "live".
//
// Run with: cargo +nightly miri test --test test_stacked_borrows_minimal

#![cfg(test)]

use replacement_cache::config::LfuCacheConfig;
use replacement_cache::LfuCache;
use std::num::NonZeroUsize;

/// Minimal case: a single `get` on a freshly inserted entry walks
/// `touch`'s unlink/relink path exactly once.
#[test]
fn test_minimal_bucket_reassignment_case() {
    let config = LfuCacheConfig {
        capacity: NonZeroUsize::new(2).unwrap(),
        max_average: NonZeroUsize::new(16).unwrap(),
    };
    let mut cache = LfuCache::new(config);

    cache.put("test_key", 42);

    let value = cache.get(&"test_key");

    assert_eq!(value, Some(42));
}

/// Repeated accesses walk the unlink/relink path many times over the same
/// pair of nodes, bouncing between frequency buckets.
#[test]
fn test_repeated_accesses_walk_relink_path_many_times() {
    let config = LfuCacheConfig {
        capacity: NonZeroUsize::new(3).unwrap(),
        max_average: NonZeroUsize::new(16).unwrap(),
    };
    let mut cache = LfuCache::new(config);

    cache.put("a", 1);
    cache.put("b", 2);

    for _ in 0..5 {
        assert_eq!(cache.get(&"a"), Some(1));
        assert_eq!(cache.get(&"b"), Some(2));
    }
}

/// Shows the hazard is specifically about reusing a borrow across an
/// unlink/relink boundary, not just about having multiple keys present.
#[test]
fn test_relink_with_populated_bucket_map() {
    let config = LfuCacheConfig {
        capacity: NonZeroUsize::new(5).unwrap(),
        max_average: NonZeroUsize::new(16).unwrap(),
    };
    let mut cache = LfuCache::new(config);

    for i in 0..3 {
        cache.put(i, i * 10);
    }

    for i in 0..3 {
        let _ = cache.get(&i);
    }

    assert_eq!(cache.len(), 3);
}
