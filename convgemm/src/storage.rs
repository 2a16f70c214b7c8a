use std::hash::Hash;

use indexmap::IndexMap;

/// Insertion-ordered map with an optional entry bound.
///
/// Without a capacity the map only grows. With one, inserting a new key into
/// a full map pushes out the oldest inserted entry. Overwriting an existing
/// key keeps its position.
#[derive(Debug)]
pub(crate) struct BoundedMap<K, V> {
    entries: IndexMap<K, V>,
    capacity: Option<usize>,
}

impl<K: Hash + Eq, V> BoundedMap<K, V> {
    pub(crate) fn new(capacity: Option<usize>) -> Self {
        Self {
            entries: IndexMap::new(),
            capacity,
        }
    }

    pub(crate) fn get(
        &self,
        key: &K,
    ) -> Option<&V> {
        self.entries.get(key)
    }

    pub(crate) fn contains_key(
        &self,
        key: &K,
    ) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the entry pushed out to respect the capacity, if any.
    pub(crate) fn insert(
        &mut self,
        key: K,
        value: V,
    ) -> Option<(K, V)> {
        if let Some(slot) = self.entries.get_mut(&key) {
            *slot = value;
            return None;
        }

        match self.capacity {
            Some(0) => Some((key, value)),
            Some(capacity) if self.entries.len() >= capacity => {
                let evicted = self.entries.shift_remove_index(0);
                self.entries.insert(key, value);
                evicted
            },
            _ => {
                self.entries.insert(key, value);
                None
            },
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn capacity(&self) -> Option<usize> {
        self.capacity
    }
}
