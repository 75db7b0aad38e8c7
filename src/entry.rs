//! Entry record shared by every cache implementation.
//!
//! Every policy stores its live data as a `CacheEntry`, optionally carrying a
//! policy-specific metadata payload `M` (frequency bucket membership, ARC
//! access counters, and so on). The base fields — key, value, access count —
//! are common across all four policies.

/// A single cached record.
///
/// `access_count` starts at 1 on insertion and is bumped on every observation
/// that the owning policy considers a hit or re-reference. It saturates at
/// `usize::MAX` rather than wrapping; LFU additionally caps it well below that
/// via its own frequency ceiling.
#[derive(Clone, Debug)]
pub struct CacheEntry<K, V, M = ()> {
    key: K,
    value: V,
    access_count: usize,
    metadata: M,
}

impl<K, V, M: Default> CacheEntry<K, V, M> {
    /// Creates a new entry with `access_count` initialized to 1.
    pub fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            access_count: 1,
            metadata: M::default(),
        }
    }
}

impl<K, V, M> CacheEntry<K, V, M> {
    /// Creates a new entry with explicit metadata.
    pub fn with_metadata(key: K, value: V, metadata: M) -> Self {
        Self {
            key,
            value,
            access_count: 1,
            metadata,
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Replaces the stored value, leaving the access count untouched.
    pub fn set_value(&mut self, value: V) {
        self.value = value;
    }

    pub fn access_count(&self) -> usize {
        self.access_count
    }

    /// Bumps the access count by one, saturating at `usize::MAX`.
    pub fn touch(&mut self) {
        self.access_count = self.access_count.saturating_add(1);
    }

    /// Sets the access count directly (used by LFU decay and eviction bookkeeping).
    pub fn set_access_count(&mut self, count: usize) {
        self.access_count = count;
    }

    pub fn metadata(&self) -> &M {
        &self.metadata
    }

    pub fn metadata_mut(&mut self) -> &mut M {
        &mut self.metadata
    }

    /// Consumes the entry, returning its value.
    pub fn into_value(self) -> V {
        self.value
    }

    /// Consumes the entry, returning its key and value.
    pub fn into_key_value(self) -> (K, V) {
        (self.key, self.value)
    }
}
