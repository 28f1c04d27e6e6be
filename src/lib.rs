//! phonedir - An in-memory phone directory
//!
//! Contacts are keyed by a 10-digit number stored in a digit trie, with hash
//! indexes on first name, last name, full name and city.

pub mod cli;
pub mod contact;
pub mod directory;
pub mod index;
pub mod observability;
pub mod trie;

pub use contact::{Contact, ValidationError};
pub use directory::{Directory, DirectoryError, DirectoryResult};
