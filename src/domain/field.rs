//! Named, validated contact fields.

use super::birthday::Birthday;
use super::errors::ValidationError;
use super::phone::PhoneNumber;
use std::fmt;

/// Label of the mandatory name field.
pub const NAME_LABEL: &str = "Name";
/// Label the phone field is stored and persisted under.
pub const PHONE_LABEL: &str = "Phone";
/// Label the birthday field is stored and persisted under.
pub const BIRTHDAY_LABEL: &str = "Birthday";

/// The value held by a [`Field`]. Each variant validates differently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Free text, no validation.
    Text(String),
    /// Digits only.
    Phone(PhoneNumber),
    /// A date or absent.
    Birthday(Birthday),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{}", text),
            Self::Phone(phone) => write!(f, "{}", phone),
            Self::Birthday(birthday) => write!(f, "{}", birthday),
        }
    }
}

/// A named scalar attribute of a contact.
///
/// Fields are built through constructors that validate their input, and the
/// only way to change a value afterwards is [`Field::set_value`], which runs
/// the same validation again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    value: FieldValue,
}

impl Field {
    /// A free-text field.
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: FieldValue::Text(value.into()),
        }
    }

    /// A phone field.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `value` is not all digits.
    pub fn phone(name: impl Into<String>, value: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: name.into(),
            value: FieldValue::Phone(PhoneNumber::new(value)?),
        })
    }

    /// A phone field from an already validated number.
    pub fn phone_number(name: impl Into<String>, value: PhoneNumber) -> Self {
        Self {
            name: name.into(),
            value: FieldValue::Phone(value),
        }
    }

    /// A birthday field. The date type already guarantees "date or absent".
    pub fn birthday(name: impl Into<String>, value: Birthday) -> Self {
        Self {
            name: name.into(),
            value: FieldValue::Birthday(value),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    /// Replace the value from raw text, validating it against this field's
    /// kind. On error the old value is kept.
    pub fn set_value(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.value = match &self.value {
            FieldValue::Text(_) => FieldValue::Text(raw.to_string()),
            FieldValue::Phone(_) => FieldValue::Phone(PhoneNumber::new(raw)?),
            FieldValue::Birthday(_) => FieldValue::Birthday(Birthday::parse(raw)?),
        };
        Ok(())
    }

    pub fn as_text(&self) -> Option<&str> {
        match &self.value {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_phone(&self) -> Option<&PhoneNumber> {
        match &self.value {
            FieldValue::Phone(phone) => Some(phone),
            _ => None,
        }
    }

    pub fn as_birthday(&self) -> Option<&Birthday> {
        match &self.value {
            FieldValue::Birthday(birthday) => Some(birthday),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}
