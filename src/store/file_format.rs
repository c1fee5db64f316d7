//! On-disk JSON layout of the contacts file.
//!
//! ```json
//! {
//!     "contacts": {
//!         "John": { "Name": "John", "Phone": "123", "Birthday": "1990-04-01" }
//!     }
//! }
//! ```

use crate::domain::{Birthday, Field, PhoneNumber, BIRTHDAY_LABEL, NAME_LABEL, PHONE_LABEL};
use crate::error::StoreResult;
use crate::models::Contact;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Top-level document.
#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct ContactsFile {
    #[serde(default)]
    pub contacts: BTreeMap<String, ContactEntry>,
}

/// One contact, keyed by field label.
#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct ContactEntry {
    #[serde(rename = "Name", default)]
    pub name: String,

    #[serde(rename = "Phone", default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// `YYYY-MM-DD`, or empty when the date is unknown.
    #[serde(rename = "Birthday", default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,

    /// Free-text fields under their own labels. Non-string values written
    /// by other tools are kept as their JSON text; nulls are dropped.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl ContactEntry {
    pub fn from_contact(contact: &Contact) -> Self {
        let extra = contact
            .fields()
            .filter(|field| {
                !matches!(field.name(), NAME_LABEL | PHONE_LABEL | BIRTHDAY_LABEL)
            })
            .map(|field| (field.name().to_string(), Value::String(field.to_string())))
            .collect();

        Self {
            name: contact.name().to_string(),
            phone: contact.field(PHONE_LABEL).map(ToString::to_string),
            birthday: contact.field(BIRTHDAY_LABEL).map(ToString::to_string),
            extra,
        }
    }

    /// Rebuild a contact, validating phone and birthday.
    ///
    /// The phone defaults to empty and a missing or blank birthday becomes an
    /// absent date. An entry without a name takes the map key.
    pub fn into_contact(self, key: &str) -> StoreResult<Contact> {
        let name = if self.name.is_empty() {
            key.to_string()
        } else {
            self.name
        };
        let phone = PhoneNumber::new(self.phone.unwrap_or_default())?;
        let birthday = Birthday::parse(self.birthday.as_deref().unwrap_or_default())?;

        let mut contact = Contact::with_details(name, phone, birthday);
        for (label, value) in self.extra {
            let text = match value {
                Value::Null => continue,
                Value::String(text) => text,
                other => other.to_string(),
            };
            contact.add_field(Field::text(label, text));
        }
        Ok(contact)
    }
}
