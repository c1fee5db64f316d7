//! Contact storage and JSON file persistence.

pub mod address_book;
pub mod encoding;
mod file_format;

pub use address_book::AddressBook;
pub use encoding::{TextEncoding, FALLBACK_ENCODINGS};
