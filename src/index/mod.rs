//! Secondary index subsystem for phonedir
//!
//! Indexes are derived, in-memory state kept in step with the digit trie by
//! the directory.
//!
//! # Design Principles
//!
//! - Derived state: the trie is the source of truth
//! - One generic index type, parameterized by a key function
//! - Set semantics: a record appears at most once per key
//!
//! # Invariants
//!
//! - Empty key buckets are removed eagerly
//! - Add and delete are broadcast to every index in registration order

mod errors;
mod map_index;
mod registry;

pub use errors::{IndexError, IndexErrorCode, IndexResult, Severity};
pub use map_index::{KeyFn, MapIndex};
pub use registry::IndexSet;
