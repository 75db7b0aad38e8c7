//! Frequency half of the Adaptive Replacement Cache.
//!
//! Shares its bucket-map structure with [`crate::lfu::LfuCache`] but drops
//! the average-frequency decay entirely: eviction is always "front of the
//! `min_frequency` bucket", and the evicted key is demoted into a ghost list
//! exactly like [`super::lru_part::ArcLruPart`]'s.

extern crate alloc;

use crate::entry::CacheEntry;
use crate::list::{List, ListNode};
use alloc::collections::BTreeMap;
use core::hash::{BuildHasher, Hash};
use core::num::NonZeroUsize;

#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

const EMPTY_MIN_FREQUENCY: usize = usize::MAX;

pub struct ArcLfuPart<K, V, S> {
    capacity: usize,
    map: HashMap<K, *mut ListNode<CacheEntry<K, V>>, S>,
    frequency_lists: BTreeMap<usize, List<CacheEntry<K, V>>>,
    min_frequency: usize,
    ghost_capacity: NonZeroUsize,
    ghost_list: List<K>,
    ghost_map: HashMap<K, *mut ListNode<K>, S>,
}

// SAFETY: every pointer held in `map`/`ghost_map` refers to a node owned by
// one of `frequency_lists`/`ghost_list`; all mutation requires `&mut self`.
unsafe impl<K: Send, V: Send, S: Send> Send for ArcLfuPart<K, V, S> {}
unsafe impl<K: Sync, V: Sync, S: Sync> Sync for ArcLfuPart<K, V, S> {}

impl<K: Hash + Eq + Clone, V: Clone, S: BuildHasher + Clone> ArcLfuPart<K, V, S> {
    pub fn new(capacity: usize, ghost_capacity: NonZeroUsize, hasher: S) -> Self {
        Self {
            capacity,
            map: HashMap::with_hasher(hasher.clone()),
            frequency_lists: BTreeMap::new(),
            min_frequency: EMPTY_MIN_FREQUENCY,
            ghost_capacity,
            ghost_list: List::new(ghost_capacity),
            ghost_map: HashMap::with_hasher(hasher),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Pure lookup: does not change the entry's bucket or recency.
    pub fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    fn recompute_min_frequency(&mut self) {
        self.min_frequency = self
            .frequency_lists
            .keys()
            .next()
            .copied()
            .unwrap_or(EMPTY_MIN_FREQUENCY);
    }

    fn bump(&mut self, key: &K) -> V {
        let node = *self.map.get(key).expect("bump called on resident key");
        // SAFETY: `node` is live; its bucket is keyed by its own frequency.
        let old_freq = unsafe { ListNode::value(node) }.access_count();

        let mut entry = {
            let bucket = self
                .frequency_lists
                .get_mut(&old_freq)
                .expect("entry's bucket must exist");
            // SAFETY: `node` is linked into this exact bucket.
            unsafe { bucket.remove(node) }
        };
        if self
            .frequency_lists
            .get(&old_freq)
            .map(List::is_empty)
            .unwrap_or(true)
        {
            self.frequency_lists.remove(&old_freq);
        }

        let new_freq = old_freq.saturating_add(1);
        entry.set_access_count(new_freq);
        let value = entry.value().clone();

        let ghost_capacity = self.ghost_capacity;
        let bucket = self
            .frequency_lists
            .entry(new_freq)
            .or_insert_with(|| List::new(ghost_capacity));
        let new_node = bucket.push_back(entry);
        self.map.insert(key.clone(), new_node);

        self.recompute_min_frequency();
        value
    }

    pub fn get(&mut self, key: &K) -> Option<V> {
        if self.map.contains_key(key) {
            Some(self.bump(key))
        } else {
            None
        }
    }

    /// Inserts or overwrites `key`. A zero-capacity half is a permanent
    /// no-op.
    pub fn put(&mut self, key: K, value: V) {
        if let Some(&node) = self.map.get(&key) {
            // SAFETY: `node` is live.
            unsafe { ListNode::value_mut(node) }.set_value(value);
            self.bump(&key);
            return;
        }

        if self.capacity == 0 {
            return;
        }

        if self.map.len() >= self.capacity {
            self.evict_one();
        }

        let entry = CacheEntry::new(key.clone(), value);
        let ghost_capacity = self.ghost_capacity;
        let bucket = self
            .frequency_lists
            .entry(1)
            .or_insert_with(|| List::new(ghost_capacity));
        let node = bucket.push_back(entry);
        self.map.insert(key, node);
        self.recompute_min_frequency();
    }

    fn evict_one(&mut self) {
        if self.min_frequency == EMPTY_MIN_FREQUENCY {
            return;
        }
        let freq = self.min_frequency;
        let evicted = self
            .frequency_lists
            .get_mut(&freq)
            .and_then(List::pop_front);
        if let Some(entry) = evicted {
            if self
                .frequency_lists
                .get(&freq)
                .map(List::is_empty)
                .unwrap_or(true)
            {
                self.frequency_lists.remove(&freq);
            }
            let (key, _) = entry.into_key_value();
            self.map.remove(&key);
            self.recompute_min_frequency();
            self.demote_to_ghost(key);
        }
    }

    fn demote_to_ghost(&mut self, key: K) {
        if self.ghost_list.is_full() {
            if let Some(oldest) = self.ghost_list.pop_back() {
                self.ghost_map.remove(&oldest);
            }
        }
        let node = self.ghost_list.push_front(key.clone());
        self.ghost_map.insert(key, node);
    }

    /// True iff `key` was in the ghost list; removes it as a side effect.
    pub fn check_ghost(&mut self, key: &K) -> bool {
        match self.ghost_map.remove(key) {
            Some(node) => {
                // SAFETY: `node` came from `ghost_map` and is live in `ghost_list`.
                unsafe { self.ghost_list.remove(node) };
                true
            }
            None => false,
        }
    }

    pub fn increase_capacity(&mut self) {
        self.capacity += 1;
    }

    pub fn decrease_capacity(&mut self) -> bool {
        if self.capacity == 0 {
            return false;
        }
        if self.map.len() >= self.capacity {
            self.evict_one();
        }
        self.capacity -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "hashbrown")]
    type DefaultHashBuilder = hashbrown::DefaultHashBuilder;
    #[cfg(not(feature = "hashbrown"))]
    type DefaultHashBuilder = std::collections::hash_map::RandomState;

    fn part(capacity: usize, ghost: usize) -> ArcLfuPart<i32, char, DefaultHashBuilder> {
        ArcLfuPart::new(
            capacity,
            NonZeroUsize::new(ghost).unwrap(),
            DefaultHashBuilder::default(),
        )
    }

    #[test]
    fn evicts_min_frequency_bucket_front_into_ghost() {
        let mut p = part(2, 4);
        p.put(1, 'A');
        p.put(2, 'B');
        p.get(&2);
        p.put(3, 'C');
        assert!(p.check_ghost(&1));
        assert_eq!(p.get(&2), Some('B'));
        assert_eq!(p.get(&3), Some('C'));
    }

    #[test]
    fn contain_does_not_change_frequency() {
        let mut p = part(2, 4);
        p.put(1, 'A');
        assert!(p.contains(&1));
        assert!(p.contains(&1));
    }

    #[test]
    fn zero_capacity_is_permanent_no_op() {
        let mut p = part(0, 4);
        p.put(1, 'A');
        assert_eq!(p.get(&1), None);
        assert_eq!(p.len(), 0);
    }
}
