//! Domain value objects and types.
//!
//! Validated wrappers for the values a contact holds. Invalid phone numbers
//! and dates are rejected at construction time and cannot be represented.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod phone;

pub use birthday::{Birthday, DATE_FORMAT};
pub use errors::ValidationError;
pub use field::{Field, FieldValue, BIRTHDAY_LABEL, NAME_LABEL, PHONE_LABEL};
pub use phone::PhoneNumber;
