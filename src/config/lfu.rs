//! Configuration for the Least Frequently Used (LFU) cache.

use core::num::NonZeroUsize;

/// Configuration for an LFU (Least Frequently Used) cache.
///
/// `max_average` is a soft ceiling on the average access frequency across
/// resident entries; once exceeded, a decay pass halves the frequency of
/// every sufficiently hot entry so that long-lived entries do not become
/// immortal.
///
/// # Examples
///
/// ```
/// use replacement_cache::config::LfuCacheConfig;
/// use core::num::NonZeroUsize;
///
/// let config = LfuCacheConfig {
///     capacity: NonZeroUsize::new(100).unwrap(),
///     max_average: NonZeroUsize::new(8).unwrap(),
/// };
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LfuCacheConfig {
    /// Maximum number of key-value pairs the cache can hold.
    pub capacity: NonZeroUsize,
    /// Soft ceiling on the running average access frequency.
    pub max_average: NonZeroUsize,
}
