//! Configuration for the Least Recently Used (LRU) cache.

use core::num::NonZeroUsize;

/// Configuration for an LRU (Least Recently Used) cache.
///
/// LRU evicts the least recently accessed entry when the cache reaches
/// capacity.
///
/// # Examples
///
/// ```
/// use replacement_cache::config::LruCacheConfig;
/// use core::num::NonZeroUsize;
///
/// let config = LruCacheConfig {
///     capacity: NonZeroUsize::new(100).unwrap(),
/// };
/// assert_eq!(config.capacity.get(), 100);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LruCacheConfig {
    /// Maximum number of key-value pairs the cache can hold.
    pub capacity: NonZeroUsize,
}
