//! Contact validation
//!
//! Rules, checked in order:
//! - number is exactly 10 ASCII digits
//! - first name is non-empty
//! - last name is non-empty
//! - address is empty or has exactly five comma-separated parts
//!
//! Validation is pure and never mutates the contact.

use std::sync::OnceLock;

use regex::Regex;

use super::errors::ValidationError;
use super::types::Contact;

/// Digits in a phone number
pub const NUMBER_LENGTH: usize = 10;

/// Parts in a well-formed address
const ADDRESS_COMPONENTS: usize = 5;

static NUMBER_PATTERN: OnceLock<Regex> = OnceLock::new();
static PREFIX_PATTERN: OnceLock<Regex> = OnceLock::new();

fn number_pattern() -> &'static Regex {
    NUMBER_PATTERN.get_or_init(|| {
        Regex::new(&format!(r"^[0-9]{{{}}}$", NUMBER_LENGTH)).expect("number pattern is valid")
    })
}

fn prefix_pattern() -> &'static Regex {
    PREFIX_PATTERN.get_or_init(|| {
        Regex::new(&format!(r"^[0-9]{{1,{}}}$", NUMBER_LENGTH)).expect("prefix pattern is valid")
    })
}

/// Returns true if `term` could be the start of a phone number
pub fn is_number_prefix(term: &str) -> bool {
    prefix_pattern().is_match(term)
}

impl Contact {
    /// Checks that each field value is valid.
    ///
    /// # Errors
    ///
    /// Returns the first rule violated.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !number_pattern().is_match(&self.number) {
            return Err(ValidationError::InvalidNumber);
        }
        if self.first_name.is_empty() {
            return Err(ValidationError::MissingFirstName);
        }
        if self.last_name.is_empty() {
            return Err(ValidationError::MissingLastName);
        }
        if self.has_address() && self.address.split(',').count() != ADDRESS_COMPONENTS {
            return Err(ValidationError::InvalidAddress);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> Contact {
        Contact::new("0123456789", "foo", "bar")
    }

    #[test]
    fn test_valid_contact() {
        assert_eq!(valid().validate(), Ok(()));
        assert_eq!(
            valid()
                .with_address("11 Fake St, Fake City, Fake State, 1111, Fake Country")
                .validate(),
            Ok(())
        );
    }

    #[test]
    fn test_number_with_invalid_chars() {
        let contact = Contact { number: "0123K56P89".into(), ..valid() };
        assert_eq!(contact.validate(), Err(ValidationError::InvalidNumber));
    }

    #[test]
    fn test_number_wrong_length() {
        for number in ["012345678", "01234567890", ""] {
            let contact = Contact { number: number.into(), ..valid() };
            assert_eq!(contact.validate(), Err(ValidationError::InvalidNumber), "{number}");
        }
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        // Only ASCII digits can be routed through the trie
        let contact = Contact { number: "٠١٢٣٤٥٦٧٨٩".into(), ..valid() };
        assert_eq!(contact.validate(), Err(ValidationError::InvalidNumber));
    }

    #[test]
    fn test_first_name_required() {
        let contact = Contact { first_name: String::new(), ..valid() };
        let err = contact.validate().unwrap_err();
        assert_eq!(err.to_string(), "first name required");
        assert_eq!(err.field(), "first_name");
    }

    #[test]
    fn test_last_name_required() {
        let contact = Contact { last_name: String::new(), ..valid() };
        assert_eq!(contact.validate(), Err(ValidationError::MissingLastName));
    }

    #[test]
    fn test_invalid_address_format() {
        let contact = valid().with_address("11 Fake St, Fake City, Fake State, 1111");
        let err = contact.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "address must be in the format '[street address], [city], [state/province], [zip code], [country]'"
        );
    }

    #[test]
    fn test_number_checked_first() {
        let contact = Contact::new("12", "", "");
        assert_eq!(contact.validate(), Err(ValidationError::InvalidNumber));
    }

    #[test]
    fn test_number_prefix() {
        assert!(is_number_prefix("0"));
        assert!(is_number_prefix("0410020"));
        assert!(is_number_prefix("0123456789"));
        assert!(!is_number_prefix(""));
        assert!(!is_number_prefix("01234567890"));
        assert!(!is_number_prefix("04a"));
    }
}
