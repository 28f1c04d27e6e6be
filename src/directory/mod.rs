//! Phone directory for phonedir
//!
//! Composes the digit trie (keyed by number) with the secondary indexes
//! (first name, last name, full name, city).
//!
//! # Invariants
//!
//! - Validation runs before any mutation
//! - The trie and every index hold the same set of live contacts
//! - Trie insertion happens first; a rejected insert touches no index
//! - Lookups never fail: no match is an empty result

mod book;
mod errors;

pub use book::{Directory, IndexStats, IndexTag};
pub use errors::{DirectoryError, DirectoryResult};
