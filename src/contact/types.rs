//! Contact record type

use serde::{Deserialize, Serialize};

/// Position of the city within a five-part address
const CITY_COMPONENT: usize = 1;

/// A directory entry.
///
/// Contacts are values: two contacts are the same entry only if every field
/// matches. An empty `address` means no address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contact {
    /// 10-digit phone number, unique within a directory
    pub number: String,
    pub first_name: String,
    pub last_name: String,
    /// `street, city, state/province, postal code, country`
    #[serde(default)]
    pub address: String,
}

impl Contact {
    /// Create a contact without an address
    pub fn new(
        number: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            number: number.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: String::new(),
        }
    }

    /// Set the address
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Returns true if an address is set
    pub fn has_address(&self) -> bool {
        !self.address.is_empty()
    }

    /// Returns the city component of the address, if any
    pub fn city(&self) -> Option<&str> {
        if !self.has_address() {
            return None;
        }
        self.address.split(',').nth(CITY_COMPONENT).map(str::trim)
    }

    /// Returns first and last name joined as a single key
    pub fn full_name(&self) -> String {
        format!("{}{}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_from_address() {
        let contact = Contact::new("0123456789", "Foo", "Bar")
            .with_address("1 Foo St, Foo City, Foo State, 1111, Foo Country");
        assert_eq!(contact.city(), Some("Foo City"));
    }

    #[test]
    fn test_no_address_no_city() {
        let contact = Contact::new("0123456789", "Foo", "Bar");
        assert!(!contact.has_address());
        assert_eq!(contact.city(), None);
    }

    #[test]
    fn test_full_name() {
        let contact = Contact::new("0123456789", "Foo", "Bar");
        assert_eq!(contact.full_name(), "FooBar");
    }

    #[test]
    fn test_deserialize_without_address() {
        let contact: Contact = serde_json::from_str(
            r#"{"number":"0123456789","first_name":"Foo","last_name":"Bar"}"#,
        )
        .unwrap();
        assert_eq!(contact, Contact::new("0123456789", "Foo", "Bar"));
    }
}
