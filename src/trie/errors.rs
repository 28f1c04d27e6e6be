//! Trie error types

use thiserror::Error;

/// Result type for trie operations
pub type TrieResult<T> = Result<T, TrieError>;

/// Digit trie errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrieError {
    #[error("key already exists: {0}")]
    DuplicateKey(String),

    #[error("key {key} contains non-digit character {found:?}")]
    InvalidDigit { key: String, found: char },
}
