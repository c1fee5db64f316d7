//! Shared sample data for integration tests.

use chrono::NaiveDate;
use contact_book::{AddressBook, Birthday, Contact, PhoneNumber};

#[allow(dead_code)]
/// Create a contact with a phone and an optional `YYYY-MM-DD` birthday.
pub fn sample_contact(name: &str, phone: &str, birthday: Option<&str>) -> Contact {
    Contact::with_details(
        name,
        PhoneNumber::new(phone).unwrap(),
        Birthday::parse(birthday.unwrap_or("")).unwrap(),
    )
}

/// The John/Anna store used across tests.
pub fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_record(sample_contact("John", "123", Some("1990-04-01")));
    book.add_record(sample_contact("Anna", "555", None));
    book
}

#[allow(dead_code)]
pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
