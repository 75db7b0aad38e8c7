use criterion::{black_box, criterion_group, criterion_main, Criterion};
use replacement_cache::config::{ArcCacheConfig, LfuCacheConfig, LruCacheConfig, LruKCacheConfig};
use replacement_cache::{ArcCache, LfuCache, LruCache, LruKCache};
use std::num::NonZeroUsize;

fn make_lru<K: std::hash::Hash + Eq + Clone, V: Clone>(cap: usize) -> LruCache<K, V> {
    LruCache::new(NonZeroUsize::new(cap).unwrap())
}

fn make_lru_k<K: std::hash::Hash + Eq + Clone, V: Clone>(cap: usize) -> LruKCache<K, V> {
    let config = LruKCacheConfig {
        capacity: NonZeroUsize::new(cap).unwrap(),
        history_capacity: NonZeroUsize::new(cap).unwrap(),
        k: NonZeroUsize::new(2).unwrap(),
    };
    LruKCache::new(config)
}

fn make_lfu<K: std::hash::Hash + Eq + Clone, V: Clone>(cap: usize) -> LfuCache<K, V> {
    let config = LfuCacheConfig {
        capacity: NonZeroUsize::new(cap).unwrap(),
        max_average: NonZeroUsize::new(64).unwrap(),
    };
    LfuCache::new(config)
}

fn make_arc<K: std::hash::Hash + Eq + Clone, V: Clone>(cap: usize) -> ArcCache<K, V> {
    let config = ArcCacheConfig {
        capacity: NonZeroUsize::new(cap).unwrap(),
        transform_threshold: NonZeroUsize::new(2).unwrap(),
    };
    ArcCache::new(config)
}

pub fn criterion_benchmark(c: &mut Criterion) {
    const CACHE_SIZE: usize = 1000;
    let mut group = c.benchmark_group("Cache Operations");

    {
        let mut cache = make_lru(CACHE_SIZE);
        for i in 0..CACHE_SIZE {
            cache.put(i, i);
        }

        group.bench_function("LRU get hit", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(cache.get(&(i % CACHE_SIZE)));
                }
            });
        });

        group.bench_function("LRU get miss", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(cache.get(&(i + CACHE_SIZE)));
                }
            });
        });

        group.bench_function("LRU put existing", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(cache.put(i % CACHE_SIZE, i));
                }
            });
        });
    }

    {
        let mut cache = make_lru_k(CACHE_SIZE);
        for i in 0..CACHE_SIZE {
            cache.put(i, i);
            cache.put(i, i); // second observation promotes into main
        }

        group.bench_function("LRU-K get hit", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(cache.get(&(i % CACHE_SIZE)));
                }
            });
        });
    }

    {
        let mut cache = make_lfu(CACHE_SIZE);
        for i in 0..CACHE_SIZE {
            cache.put(i, i);
        }

        group.bench_function("LFU get hit", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(cache.get(&(i % CACHE_SIZE)));
                }
            });
        });
    }

    {
        let mut cache = make_arc(CACHE_SIZE);
        for i in 0..CACHE_SIZE {
            cache.put(i, i);
        }

        group.bench_function("ARC get hit", |b| {
            b.iter(|| {
                for i in 0..100 {
                    black_box(cache.get(&(i % CACHE_SIZE)));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
