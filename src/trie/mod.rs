//! Digit trie subsystem for phonedir
//!
//! Numbers are stored in a prefix tree with one level per digit.
//!
//! # Invariants
//!
//! - A key is a string of ASCII digits '0'-'9'
//! - At most one record per key; insert never overwrites
//! - Delete clears the record but keeps routing nodes (see `DigitTrie::compact`)

mod digit_trie;
mod errors;

pub use digit_trie::DigitTrie;
pub use errors::{TrieError, TrieResult};
