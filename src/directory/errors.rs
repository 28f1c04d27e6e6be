//! Directory error types
//!
//! Error codes:
//! - PHONEDIR_VALIDATION_FAILED
//! - PHONEDIR_DUPLICATE_NUMBER
//! - PHONEDIR_TARGET_OCCUPIED

use thiserror::Error;

use crate::contact::ValidationError;
use crate::trie::TrieError;

/// Result type for directory mutations
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Rejected directory mutation. State is unchanged when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("contact already exists for number {0}")]
    DuplicateNumber(String),

    #[error("contact already exists for new number {0}")]
    TargetOccupied(String),
}

impl DirectoryError {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            DirectoryError::Validation(_) => "PHONEDIR_VALIDATION_FAILED",
            DirectoryError::DuplicateNumber(_) => "PHONEDIR_DUPLICATE_NUMBER",
            DirectoryError::TargetOccupied(_) => "PHONEDIR_TARGET_OCCUPIED",
        }
    }
}

impl From<TrieError> for DirectoryError {
    fn from(err: TrieError) -> Self {
        match err {
            TrieError::DuplicateKey(key) => DirectoryError::DuplicateNumber(key),
            TrieError::InvalidDigit { .. } => {
                DirectoryError::Validation(ValidationError::InvalidNumber)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            DirectoryError::from(ValidationError::MissingLastName).code(),
            "PHONEDIR_VALIDATION_FAILED"
        );
        assert_eq!(
            DirectoryError::DuplicateNumber("0123456789".into()).code(),
            "PHONEDIR_DUPLICATE_NUMBER"
        );
        assert_eq!(
            DirectoryError::TargetOccupied("0123456789".into()).code(),
            "PHONEDIR_TARGET_OCCUPIED"
        );
    }

    #[test]
    fn test_validation_message_passes_through() {
        let err = DirectoryError::from(ValidationError::MissingFirstName);
        assert_eq!(err.to_string(), "first name required");
    }

    #[test]
    fn test_from_trie_error() {
        assert_eq!(
            DirectoryError::from(TrieError::DuplicateKey("0123456789".into())),
            DirectoryError::DuplicateNumber("0123456789".into())
        );
        assert_eq!(
            DirectoryError::from(TrieError::InvalidDigit { key: "01a".into(), found: 'a' }),
            DirectoryError::Validation(ValidationError::InvalidNumber)
        );
    }
}
