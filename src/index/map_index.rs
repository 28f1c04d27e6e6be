//! HashMap-based secondary index
//!
//! Maps a derived string key to the set of records sharing it. Lookups are
//! O(1) in the number of indexed records.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

/// Derives the index key for a record.
///
/// Returns `None` when the record has no value for the indexed attribute, in
/// which case it is left out of the index. Composite keys are built by
/// concatenating fields.
pub type KeyFn<T> = fn(&T) -> Option<String>;

/// A single secondary index with set-valued buckets.
pub struct MapIndex<T> {
    buckets: HashMap<String, HashSet<T>>,
    key_fn: KeyFn<T>,
}

impl<T> fmt::Debug for MapIndex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapIndex")
            .field("keys", &self.buckets.len())
            .finish_non_exhaustive()
    }
}

impl<T: Clone + Eq + Hash> MapIndex<T> {
    /// Creates an empty index using `key_fn` to derive keys
    pub fn new(key_fn: KeyFn<T>) -> Self {
        Self {
            buckets: HashMap::new(),
            key_fn,
        }
    }

    /// Add a record under its derived key.
    ///
    /// Adding an equal record twice keeps a single entry.
    pub fn add(&mut self, item: &T) {
        if let Some(key) = (self.key_fn)(item) {
            self.buckets.entry(key).or_default().insert(item.clone());
        }
    }

    /// Lookup all records for an exact key match.
    ///
    /// Returns `None` if the key is absent. Order is unspecified.
    pub fn get(&self, key: &str) -> Option<Vec<&T>> {
        self.buckets.get(key).map(|items| items.iter().collect())
    }

    /// Remove a record from the bucket of its derived key.
    ///
    /// If the bucket becomes empty, removes the key entirely.
    pub fn delete(&mut self, item: &T) {
        let Some(key) = (self.key_fn)(item) else {
            return;
        };
        if let Some(items) = self.buckets.get_mut(&key) {
            items.remove(item);
            if items.is_empty() {
                self.buckets.remove(&key);
            }
        }
    }

    /// Returns the number of distinct keys
    pub fn key_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the total number of indexed records
    pub fn record_count(&self) -> usize {
        self.buckets.values().map(HashSet::len).sum()
    }
}
