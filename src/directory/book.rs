//! Directory of contacts keyed by phone number
//!
//! # API
//!
//! - `add(contact)` / `update(number, contact)` / `delete(number)` - Mutations
//! - `get(number)` - Exact number lookup
//! - `find_by_prefix` / `find_by_name` / `find_by_city` - Single-structure lookups
//! - `find(term)` - Fan-out search across all of the above

use std::collections::HashSet;

use serde::Serialize;

use crate::contact::{is_number_prefix, Contact};
use crate::index::{IndexSet, KeyFn};
use crate::observability::{Logger, MetricsRegistry, MetricsSnapshot};
use crate::trie::DigitTrie;

use super::errors::{DirectoryError, DirectoryResult};

/// Secondary indexes kept by every directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexTag {
    FirstName,
    LastName,
    /// First and last name concatenated
    FullName,
    City,
}

fn first_name_key(contact: &Contact) -> Option<String> {
    Some(contact.first_name.clone())
}

fn last_name_key(contact: &Contact) -> Option<String> {
    Some(contact.last_name.clone())
}

fn full_name_key(contact: &Contact) -> Option<String> {
    Some(contact.full_name())
}

fn city_key(contact: &Contact) -> Option<String> {
    contact.city().map(str::to_string)
}

const INDEXES: [(IndexTag, KeyFn<Contact>); 4] = [
    (IndexTag::FirstName, first_name_key),
    (IndexTag::LastName, last_name_key),
    (IndexTag::FullName, full_name_key),
    (IndexTag::City, city_key),
];

/// Size of one secondary index
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    pub index: IndexTag,
    /// Distinct keys
    pub keys: usize,
    /// Indexed contacts; lower than the directory size when some contacts
    /// have no value for the indexed field
    pub records: usize,
}

/// An in-memory phone directory.
///
/// Mutations take `&mut self`, so a directory shared between threads must sit
/// behind a single lock covering both the trie and the indexes.
#[derive(Debug)]
pub struct Directory {
    contacts: DigitTrie<Contact>,
    indexes: IndexSet<Contact, IndexTag>,
    metrics: MetricsRegistry,
}

impl Default for Directory {
    fn default() -> Self {
        Self::new()
    }
}

impl Directory {
    /// Creates an empty directory
    pub fn new() -> Self {
        Self {
            contacts: DigitTrie::new(),
            indexes: IndexSet::new(INDEXES),
            metrics: MetricsRegistry::new(),
        }
    }

    /// Add a contact.
    ///
    /// # Errors
    ///
    /// - `Validation` if any field is malformed
    /// - `DuplicateNumber` if the number is already taken
    pub fn add(&mut self, contact: Contact) -> DirectoryResult<()> {
        let number = contact.number.clone();
        if let Err(err) = contact.validate() {
            return Err(self.reject("add", &number, err.into()));
        }
        match self.insert(contact) {
            Ok(()) => {
                self.metrics.increment_added();
                Logger::trace("CONTACT_ADDED", &[("number", number.as_str())]);
                Ok(())
            }
            Err(err) => Err(self.reject("add", &number, err)),
        }
    }

    /// Replace the contact at `number` with `contact`.
    ///
    /// The new contact is validated before anything is removed, so a rejected
    /// update leaves the directory untouched. If no contact exists at
    /// `number` this behaves like `add`.
    ///
    /// # Errors
    ///
    /// - `Validation` if any field of `contact` is malformed
    /// - `TargetOccupied` if `contact.number` differs from `number` and is
    ///   already taken
    pub fn update(&mut self, number: &str, contact: Contact) -> DirectoryResult<()> {
        if let Err(err) = contact.validate() {
            return Err(self.reject("update", number, err.into()));
        }
        if number != contact.number && self.contacts.get(&contact.number).is_some() {
            let err = DirectoryError::TargetOccupied(contact.number.clone());
            return Err(self.reject("update", number, err));
        }

        let new_number = contact.number.clone();
        self.remove(number);
        if let Err(err) = self.insert(contact) {
            return Err(self.reject("update", number, err));
        }

        self.metrics.increment_updated();
        Logger::trace("CONTACT_UPDATED", &[("from", number), ("to", new_number.as_str())]);
        Ok(())
    }

    /// Returns the contact for `number`
    pub fn get(&self, number: &str) -> Option<&Contact> {
        self.metrics.increment_searches();
        self.contacts.get(number)
    }

    /// Returns all contacts whose number starts with `prefix`.
    pub fn find_by_prefix(&self, prefix: &str) -> Vec<Contact> {
        self.metrics.increment_searches();
        owned(self.prefix_matches(prefix))
    }

    /// Returns all contacts with the given name.
    ///
    /// With both names set this is a full-name search; with one set it
    /// searches that field alone; with neither it matches nothing.
    pub fn find_by_name(&self, first_name: &str, last_name: &str) -> Vec<Contact> {
        self.metrics.increment_searches();
        let found = match (first_name.is_empty(), last_name.is_empty()) {
            (false, false) => {
                self.index_matches(IndexTag::FullName, &format!("{}{}", first_name, last_name))
            }
            (false, true) => self.index_matches(IndexTag::FirstName, first_name),
            (true, false) => self.index_matches(IndexTag::LastName, last_name),
            (true, true) => Vec::new(),
        };
        owned(found)
    }

    /// Returns all contacts whose address is in `city`
    pub fn find_by_city(&self, city: &str) -> Vec<Contact> {
        self.metrics.increment_searches();
        owned(self.index_matches(IndexTag::City, city))
    }

    /// Returns every contact matching `term` as a number prefix, first name,
    /// last name or city. Each contact appears once.
    ///
    /// The term must be a complete value; half a name matches nothing.
    pub fn find(&self, term: &str) -> Vec<Contact> {
        self.metrics.increment_searches();

        let mut union: HashSet<&Contact> = HashSet::new();
        if is_number_prefix(term) {
            union.extend(self.prefix_matches(term));
        }
        union.extend(self.index_matches(IndexTag::FirstName, term));
        union.extend(self.index_matches(IndexTag::LastName, term));
        union.extend(self.index_matches(IndexTag::City, term));

        owned(union)
    }

    /// Delete the contact for `number`, returning it.
    ///
    /// Deleting a number that holds no contact is a no-op.
    pub fn delete(&mut self, number: &str) -> Option<Contact> {
        let removed = self.remove(number)?;
        self.metrics.increment_deleted();
        Logger::trace("CONTACT_DELETED", &[("number", number)]);
        Some(removed)
    }

    /// Free trie routing nodes left behind by deletions.
    ///
    /// Returns the number of nodes freed.
    pub fn compact(&mut self) -> usize {
        let freed = self.contacts.compact();
        Logger::info("DIRECTORY_COMPACTED", &[("nodes_freed", freed.to_string().as_str())]);
        freed
    }

    /// Returns the number of contacts
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    /// Returns true if the directory holds no contacts
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Returns a snapshot of the operation counters
    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Returns key and record counts for each index, in index order
    pub fn index_stats(&self) -> Vec<IndexStats> {
        self.indexes
            .tags()
            .filter_map(|tag| {
                let index = self.indexes.index(tag)?;
                Some(IndexStats {
                    index: tag,
                    keys: index.key_count(),
                    records: index.record_count(),
                })
            })
            .collect()
    }

    /// Callers validate `contact` first.
    fn insert(&mut self, contact: Contact) -> DirectoryResult<()> {
        self.contacts.insert(&contact.number, contact.clone())?;
        self.indexes.add(&contact);
        Ok(())
    }

    fn remove(&mut self, number: &str) -> Option<Contact> {
        let contact = self.contacts.delete(number)?;
        self.indexes.delete(&contact);
        Some(contact)
    }

    fn prefix_matches(&self, prefix: &str) -> Vec<&Contact> {
        self.contacts.find_by_prefix(prefix).unwrap_or_default()
    }

    fn index_matches(&self, tag: IndexTag, key: &str) -> Vec<&Contact> {
        match self.indexes.get(tag, key) {
            Ok(found) => found.unwrap_or_default(),
            Err(err) => {
                Logger::warn("INDEX_LOOKUP_FAILED", &[("reason", err.message())]);
                Vec::new()
            }
        }
    }

    fn reject(&self, op: &str, number: &str, err: DirectoryError) -> DirectoryError {
        self.metrics.increment_rejected();
        let reason = err.to_string();
        Logger::warn(
            "CONTACT_REJECTED",
            &[
                ("code", err.code()),
                ("number", number),
                ("op", op),
                ("reason", reason.as_str()),
            ],
        );
        err
    }
}

fn owned<'a>(contacts: impl IntoIterator<Item = &'a Contact>) -> Vec<Contact> {
    contacts.into_iter().cloned().collect()
}
