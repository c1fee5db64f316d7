//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Date format used for input and for the contacts file.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A birthday: either a calendar date or absent.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::parse("1990-05-17").unwrap();
/// assert_eq!(birthday.to_string(), "1990-05-17");
/// assert!(Birthday::parse("").unwrap().date().is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Birthday(Option<NaiveDate>);

impl Birthday {
    /// Parse a `YYYY-MM-DD` string. Blank input yields an absent birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the text is not blank and
    /// is not a valid calendar date.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(Self(None));
        }

        NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map(|date| Self(Some(date)))
            .map_err(|_| ValidationError::InvalidDate(raw.to_string()))
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.0
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    /// Days from `today` until the next occurrence of this birthday's month
    /// and day. Zero when the birthday is today.
    ///
    /// A 29 February birthday is celebrated on 28 February in common years.
    pub fn days_until(&self, today: NaiveDate) -> Option<i64> {
        let date = self.0?;

        let mut next = anniversary(date, today.year())?;
        if next < today {
            next = anniversary(date, today.year() + 1)?;
        }

        Some((next - today).num_days())
    }
}

fn anniversary(date: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, date.month(), date.day() - 1))
}

impl From<NaiveDate> for Birthday {
    fn from(date: NaiveDate) -> Self {
        Self(Some(date))
    }
}

/// Renders as `YYYY-MM-DD`, or the empty string when absent.
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(date) => write!(f, "{}", date.format(DATE_FORMAT)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_valid_date() {
        let birthday = Birthday::parse("1985-12-03").unwrap();
        assert_eq!(birthday.date(), Some(ymd(1985, 12, 3)));
        assert_eq!(birthday.to_string(), "1985-12-03");
    }

    #[test]
    fn test_parse_blank_is_absent() {
        assert_eq!(Birthday::parse("").unwrap(), Birthday::default());
        assert_eq!(Birthday::parse("   ").unwrap(), Birthday::default());
        assert_eq!(Birthday::default().to_string(), "");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(Birthday::parse("03.12.1985").is_err());
        assert!(Birthday::parse("1985-13-01").is_err());
        assert!(Birthday::parse("1985-02-30").is_err());
        assert!(Birthday::parse("soon").is_err());
    }

    #[test]
    fn test_days_until_today_is_zero() {
        let today = ymd(2024, 6, 15);
        let birthday = Birthday::from(ymd(1990, 6, 15));
        assert_eq!(birthday.days_until(today), Some(0));
    }

    #[test]
    fn test_days_until_later_this_year() {
        let today = ymd(2023, 3, 1);
        let birthday = Birthday::from(ymd(2000, 3, 11));
        assert_eq!(birthday.days_until(today), Some(10));
    }

    #[test]
    fn test_days_until_rolls_to_next_year() {
        let today = ymd(2023, 12, 31);
        let birthday = Birthday::from(ymd(1999, 12, 30));
        assert_eq!(birthday.days_until(today), Some(365));

        let today = ymd(2023, 6, 2);
        let birthday = Birthday::from(ymd(1999, 6, 1));
        // 2024 is a leap year
        assert_eq!(birthday.days_until(today), Some(365));
    }

    #[test]
    fn test_days_until_leap_day_in_common_year() {
        let today = ymd(2023, 2, 1);
        let birthday = Birthday::from(ymd(2000, 2, 29));
        assert_eq!(birthday.days_until(today), Some(27));
    }

    #[test]
    fn test_days_until_absent() {
        assert_eq!(Birthday::default().days_until(ymd(2024, 1, 1)), None);
    }

    /// Dates from 1000-01-01 to 9999-12-31.
    fn any_date() -> impl Strategy<Value = NaiveDate> {
        (364_878i32..=3_652_059).prop_map(|days| NaiveDate::from_num_days_from_ce_opt(days).unwrap())
    }

    proptest! {
        #[test]
        fn prop_formatted_date_parses_back(date in any_date()) {
            let text = date.format(DATE_FORMAT).to_string();
            let birthday = Birthday::parse(&text).unwrap();
            prop_assert_eq!(birthday.date(), Some(date));
            prop_assert_eq!(birthday.to_string(), text);
        }

        #[test]
        fn prop_days_until_within_a_year(date in any_date(), today in any_date()) {
            let days = Birthday::from(date).days_until(today).unwrap();
            prop_assert!((0..=365).contains(&days));
        }
    }
}
