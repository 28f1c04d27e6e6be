//! Contact records for phonedir
//!
//! A contact is keyed by a 10-digit number and carries a first name, a last
//! name and an optional five-part address.
//!
//! Validation runs before any directory mutation.

mod errors;
mod types;
mod validator;

pub use errors::ValidationError;
pub use types::Contact;
pub use validator::{is_number_prefix, NUMBER_LENGTH};
