//! Configuration for the Adaptive Replacement Cache (ARC).

use core::num::NonZeroUsize;

/// Configuration for an ARC (Adaptive Replacement Cache).
///
/// ARC maintains two coupled sub-caches — a recency half and a frequency
/// half — each starting at `capacity`. `transform_threshold` is the access
/// count at which an entry resident in the recency half is copied into the
/// frequency half.
///
/// # Examples
///
/// ```
/// use replacement_cache::config::ArcCacheConfig;
/// use core::num::NonZeroUsize;
///
/// let config = ArcCacheConfig {
///     capacity: NonZeroUsize::new(100).unwrap(),
///     transform_threshold: NonZeroUsize::new(2).unwrap(),
/// };
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ArcCacheConfig {
    /// Initial capacity of each half (recency and frequency).
    pub capacity: NonZeroUsize,
    /// Access count at which an LRU-half entry is promoted into the LFU half.
    pub transform_threshold: NonZeroUsize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_carries_capacity_and_threshold() {
        let config = ArcCacheConfig {
            capacity: NonZeroUsize::new(2).unwrap(),
            transform_threshold: NonZeroUsize::new(2).unwrap(),
        };
        assert_eq!(config.transform_threshold.get(), 2);
    }
}
