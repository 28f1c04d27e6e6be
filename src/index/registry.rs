//! Index registry for phonedir
//!
//! Holds a fixed, ordered set of tagged secondary indexes.
//!
//! # API
//!
//! - `add(record)` - Add to every index
//! - `delete(record)` - Remove from every index
//! - `get(tag, key)` - Exact match lookup on one index

use std::fmt::Debug;
use std::hash::Hash;

use super::errors::{IndexError, IndexResult};
use super::map_index::{KeyFn, MapIndex};

/// A collection of secondary indexes, each identified by a tag.
///
/// Mutations are broadcast in registration order. The set of indexes is
/// fixed once built.
#[derive(Debug)]
pub struct IndexSet<T, Tag> {
    indexes: Vec<(Tag, MapIndex<T>)>,
}

impl<T, Tag> IndexSet<T, Tag>
where
    T: Clone + Eq + Hash,
    Tag: Copy + Eq + Debug,
{
    /// Creates a registry from `(tag, key function)` pairs
    pub fn new(definitions: impl IntoIterator<Item = (Tag, KeyFn<T>)>) -> Self {
        Self {
            indexes: definitions
                .into_iter()
                .map(|(tag, key_fn)| (tag, MapIndex::new(key_fn)))
                .collect(),
        }
    }

    /// Add the record to each index
    pub fn add(&mut self, item: &T) {
        for (_, index) in &mut self.indexes {
            index.add(item);
        }
    }

    /// Lookup records for `key` in the index registered under `tag`.
    ///
    /// Returns `Ok(None)` when the index exists but has no such key.
    pub fn get(&self, tag: Tag, key: &str) -> IndexResult<Option<Vec<&T>>> {
        self.index(tag)
            .map(|index| index.get(key))
            .ok_or_else(|| IndexError::unknown_index(tag))
    }

    /// Remove the record from each index
    pub fn delete(&mut self, item: &T) {
        for (_, index) in &mut self.indexes {
            index.delete(item);
        }
    }

    /// Returns the index registered under `tag`
    pub fn index(&self, tag: Tag) -> Option<&MapIndex<T>> {
        self.indexes
            .iter()
            .find(|(t, _)| *t == tag)
            .map(|(_, index)| index)
    }

    /// Returns the registered tags in broadcast order
    pub fn tags(&self) -> impl Iterator<Item = Tag> + '_ {
        self.indexes.iter().map(|(tag, _)| *tag)
    }
}
