//! Configuration for the LRU-K cache.

use core::num::NonZeroUsize;

/// Configuration for an LRU-K cache.
///
/// LRU-K shields the main cache from one-shot accesses: a key is only
/// admitted to `main` once it has been observed `k` times.
///
/// # Examples
///
/// ```
/// use replacement_cache::config::LruKCacheConfig;
/// use core::num::NonZeroUsize;
///
/// let config = LruKCacheConfig {
///     capacity: NonZeroUsize::new(100).unwrap(),
///     history_capacity: NonZeroUsize::new(400).unwrap(),
///     k: NonZeroUsize::new(2).unwrap(),
/// };
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LruKCacheConfig {
    /// Maximum number of key-value pairs the main cache can hold.
    pub capacity: NonZeroUsize,
    /// Maximum number of keys tracked in the observation-count history.
    pub history_capacity: NonZeroUsize,
    /// Number of cumulative observations required before promotion to main.
    pub k: NonZeroUsize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_carries_all_three_parameters() {
        let config = LruKCacheConfig {
            capacity: NonZeroUsize::new(2).unwrap(),
            history_capacity: NonZeroUsize::new(4).unwrap(),
            k: NonZeroUsize::new(2).unwrap(),
        };
        assert_eq!(config.k.get(), 2);
        assert_eq!(config.history_capacity.get(), 4);
    }
}
