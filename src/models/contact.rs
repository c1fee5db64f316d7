//! Contact model: a name plus optional named fields.

use crate::domain::{
    Birthday, Field, PhoneNumber, ValidationError, BIRTHDAY_LABEL, NAME_LABEL, PHONE_LABEL,
};
use chrono::{Local, NaiveDate};
use std::collections::BTreeMap;
use std::io::{self, Write};

/// Something that can print itself for the user.
pub trait Record {
    /// Write a human-readable rendering, one line per attribute.
    fn display(&self, out: &mut dyn Write) -> io::Result<()>;
}

/// A person in the contact directory.
///
/// The name is always present. Phone, birthday and any other attributes are
/// optional fields keyed by their label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    name: Field,
    fields: BTreeMap<String, Field>,
}

impl Contact {
    /// Create a contact with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Field::text(NAME_LABEL, name),
            fields: BTreeMap::new(),
        }
    }

    /// Create a contact with a phone and a birthday, as the add flow and the
    /// file loader do.
    pub fn with_details(name: impl Into<String>, phone: PhoneNumber, birthday: Birthday) -> Self {
        let mut contact = Self::new(name);
        contact.add_phone(phone);
        contact.add_birthday(birthday);
        contact
    }

    pub fn name(&self) -> &str {
        self.name.as_text().unwrap_or_default()
    }

    pub fn name_field(&self) -> &Field {
        &self.name
    }

    /// Optional fields in label order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.values()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// Store `field` under its own name, replacing any field with that name.
    pub fn add_field(&mut self, field: Field) {
        self.fields.insert(field.name().to_string(), field);
    }

    /// Remove a field. Unknown names are ignored.
    pub fn remove_field(&mut self, name: &str) {
        self.fields.remove(name);
    }

    /// Change a field's value, validating it as that field's kind.
    ///
    /// Does nothing if the contact has no field with this name.
    pub fn edit_field(&mut self, name: &str, new_value: &str) -> Result<(), ValidationError> {
        match self.fields.get_mut(name) {
            Some(field) => field.set_value(new_value),
            None => Ok(()),
        }
    }

    pub fn add_phone(&mut self, phone: PhoneNumber) {
        self.add_field(Field::phone_number(PHONE_LABEL, phone));
    }

    pub fn add_birthday(&mut self, birthday: Birthday) {
        self.add_field(Field::birthday(BIRTHDAY_LABEL, birthday));
    }

    pub fn phone(&self) -> Option<&PhoneNumber> {
        self.fields.get(PHONE_LABEL).and_then(Field::as_phone)
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.fields.get(BIRTHDAY_LABEL).and_then(Field::as_birthday)
    }

    /// Days until the next birthday, counted from the local date.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days until the next birthday, counted from `today`.
    ///
    /// `None` when no birthday is set.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        self.birthday()?.days_until(today)
    }
}

impl Record for Contact {
    fn display(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "{}: {}", NAME_LABEL, self.name())?;
        for (label, field) in &self.fields {
            writeln!(out, "{}: {}", label, field)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn john() -> Contact {
        Contact::with_details(
            "John",
            PhoneNumber::new("123").unwrap(),
            Birthday::from(ymd(1990, 4, 1)),
        )
    }

    #[test]
    fn test_contact_new_has_only_name() {
        let contact = Contact::new("Anna");
        assert_eq!(contact.name(), "Anna");
        assert_eq!(contact.name_field().name(), NAME_LABEL);
        assert_eq!(contact.fields().count(), 0);
        assert!(contact.phone().is_none());
        assert!(contact.days_to_birthday().is_none());
    }

    #[test]
    fn test_with_details_uses_fixed_labels() {
        let contact = john();
        assert_eq!(contact.field(PHONE_LABEL).unwrap().to_string(), "123");
        assert_eq!(
            contact.field(BIRTHDAY_LABEL).unwrap().to_string(),
            "1990-04-01"
        );
    }

    #[test]
    fn test_add_field_overwrites() {
        let mut contact = Contact::new("Anna");
        contact.add_field(Field::text("Email", "old@example.com"));
        contact.add_field(Field::text("Email", "new@example.com"));

        assert_eq!(contact.fields().count(), 1);
        assert_eq!(contact.field("Email").unwrap().to_string(), "new@example.com");
    }

    #[test]
    fn test_remove_field() {
        let mut contact = john();
        contact.remove_field(PHONE_LABEL);
        assert!(contact.phone().is_none());

        // Removing again is a no-op
        contact.remove_field(PHONE_LABEL);
        contact.remove_field("Nickname");
        assert_eq!(contact.fields().count(), 1);
    }

    #[test]
    fn test_edit_field_validates() {
        let mut contact = john();

        assert!(contact.edit_field(PHONE_LABEL, "12-34").is_err());
        assert_eq!(contact.phone().unwrap().as_str(), "123");

        contact.edit_field(PHONE_LABEL, "999").unwrap();
        assert_eq!(contact.phone().unwrap().as_str(), "999");

        contact.edit_field(BIRTHDAY_LABEL, "").unwrap();
        assert!(!contact.birthday().unwrap().is_set());
    }

    #[test]
    fn test_edit_missing_field_is_silent() {
        let mut contact = Contact::new("Anna");
        assert!(contact.edit_field(PHONE_LABEL, "not digits").is_ok());
        assert!(contact.phone().is_none());
    }

    #[test]
    fn test_days_to_birthday_from() {
        let contact = john();
        assert_eq!(contact.days_to_birthday_from(ymd(2023, 4, 1)), Some(0));
        assert_eq!(contact.days_to_birthday_from(ymd(2023, 3, 30)), Some(2));
        assert_eq!(contact.days_to_birthday_from(ymd(2023, 4, 2)), Some(365));
    }

    #[test]
    fn test_days_to_birthday_today() {
        let today = Local::now().date_naive();
        let contact = Contact::with_details("Anna", PhoneNumber::default(), Birthday::from(today));
        assert_eq!(contact.days_to_birthday(), Some(0));
    }

    #[test]
    fn test_days_to_birthday_absent_date() {
        let contact = Contact::with_details("Anna", PhoneNumber::default(), Birthday::default());
        assert_eq!(contact.days_to_birthday_from(ymd(2023, 1, 1)), None);
    }

    #[test]
    fn test_display() {
        let mut out = Vec::new();
        john().display(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Name: John\nBirthday: 1990-04-01\nPhone: 123\n");
    }
}
