//! Metrics registry for phonedir
//!
//! - Counters only
//! - Monotonic increase
//! - Relaxed atomics so read paths can count through `&self`

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Operational counters for one directory
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Successful adds
    contacts_added: AtomicU64,
    /// Successful updates
    contacts_updated: AtomicU64,
    /// Deletes that removed a contact
    contacts_deleted: AtomicU64,
    /// Adds and updates rejected with an error
    mutations_rejected: AtomicU64,
    /// Lookup and search calls
    searches: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new metrics registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_added(&self) {
        self.contacts_added.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_updated(&self) {
        self.contacts_updated.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_deleted(&self) {
        self.contacts_deleted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_rejected(&self) {
        self.mutations_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_searches(&self) {
        self.searches.fetch_add(1, Ordering::Relaxed);
    }

    /// Take a point-in-time snapshot of all counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            contacts_added: self.contacts_added.load(Ordering::Relaxed),
            contacts_updated: self.contacts_updated.load(Ordering::Relaxed),
            contacts_deleted: self.contacts_deleted.load(Ordering::Relaxed),
            mutations_rejected: self.mutations_rejected.load(Ordering::Relaxed),
            searches: self.searches.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of all metrics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub contacts_added: u64,
    pub contacts_updated: u64,
    pub contacts_deleted: u64,
    pub mutations_rejected: u64,
    pub searches: u64,
}
