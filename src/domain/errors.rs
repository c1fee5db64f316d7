//! Domain validation errors.

use std::fmt;

/// Errors that can occur when a field value is validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The phone number contains something other than digits.
    InvalidPhone(String),

    /// The birthday is not a `YYYY-MM-DD` calendar date.
    InvalidDate(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(phone) => {
                write!(f, "Phone number must contain only digits: {}", phone)
            }
            Self::InvalidDate(date) => {
                write!(f, "Birthday must be a date in YYYY-MM-DD format: {}", date)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::InvalidPhone("12a".to_string());
        assert_eq!(err.to_string(), "Phone number must contain only digits: 12a");

        let err = ValidationError::InvalidDate("tomorrow".to_string());
        assert!(err.to_string().contains("YYYY-MM-DD"));
        assert!(err.to_string().contains("tomorrow"));
    }
}
