//! Configuration for the sharded (hash-partitioned) cache wrappers.

use core::num::NonZeroUsize;

use super::{LfuCacheConfig, LruCacheConfig};

/// Configuration for a [`ShardedLruCache`](crate::concurrent::ShardedLruCache).
///
/// `total_capacity` is divided as evenly as possible across `shard_count`
/// independent [`LruCache`](crate::LruCache) instances. A `shard_count` of
/// `0` means "use the platform's hardware concurrency hint, floored at 1".
#[derive(Debug, Clone, Copy)]
pub struct ShardedLruCacheConfig {
    /// Total capacity summed across all shards.
    pub total_capacity: NonZeroUsize,
    /// Number of shards; `0` defers to the hardware concurrency hint.
    pub shard_count: usize,
}

impl ShardedLruCacheConfig {
    /// The base per-shard config shared by every shard once `shard_count`
    /// has been resolved, as `ceil(total_capacity / resolved_shard_count)`.
    pub fn per_shard_config(&self, resolved_shard_count: usize) -> LruCacheConfig {
        LruCacheConfig {
            capacity: ceil_div(self.total_capacity, resolved_shard_count),
        }
    }
}

/// Configuration for a [`ShardedLfuCache`](crate::concurrent::ShardedLfuCache).
#[derive(Debug, Clone, Copy)]
pub struct ShardedLfuCacheConfig {
    /// Total capacity summed across all shards.
    pub total_capacity: NonZeroUsize,
    /// Number of shards; `0` defers to the hardware concurrency hint.
    pub shard_count: usize,
    /// Soft ceiling on average access frequency, applied within each shard.
    pub max_average: NonZeroUsize,
}

impl ShardedLfuCacheConfig {
    pub fn per_shard_config(&self, resolved_shard_count: usize) -> LfuCacheConfig {
        LfuCacheConfig {
            capacity: ceil_div(self.total_capacity, resolved_shard_count),
            max_average: self.max_average,
        }
    }
}

fn ceil_div(total: NonZeroUsize, divisor: usize) -> NonZeroUsize {
    let divisor = divisor.max(1);
    let value = (total.get() + divisor - 1) / divisor;
    NonZeroUsize::new(value.max(1)).unwrap()
}

/// Resolves a user-supplied shard count, falling back to the platform's
/// hardware concurrency hint (floored at 1) when `requested` is `0`.
pub fn resolve_shard_count(requested: usize) -> usize {
    if requested > 0 {
        return requested;
    }
    #[cfg(feature = "std")]
    {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    }
    #[cfg(not(feature = "std"))]
    {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_shard_capacity_rounds_up() {
        let config = ShardedLruCacheConfig {
            total_capacity: NonZeroUsize::new(10).unwrap(),
            shard_count: 3,
        };
        assert_eq!(config.per_shard_config(3).capacity.get(), 4);
    }

    #[test]
    fn zero_shard_count_resolves_to_at_least_one() {
        assert!(resolve_shard_count(0) >= 1);
    }

    #[test]
    fn nonzero_shard_count_passes_through() {
        assert_eq!(resolve_shard_count(7), 7);
    }
}
