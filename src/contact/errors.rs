//! Contact validation errors

use thiserror::Error;

/// A contact field failed validation.
///
/// Validation errors are never retried; the caller must fix the record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("phone number must contain 10 digits")]
    InvalidNumber,

    #[error("first name required")]
    MissingFirstName,

    #[error("last name required")]
    MissingLastName,

    #[error("address must be in the format '[street address], [city], [state/province], [zip code], [country]'")]
    InvalidAddress,
}

impl ValidationError {
    /// Returns the name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidNumber => "number",
            ValidationError::MissingFirstName => "first_name",
            ValidationError::MissingLastName => "last_name",
            ValidationError::InvalidAddress => "address",
        }
    }
}
