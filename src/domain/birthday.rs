//! Birthday field.

use super::errors::ValidationError;
use super::field::Field;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Text format accepted on input and produced by serialization.
pub const BIRTHDAY_FORMAT: &str = "%Y.%m.%d";

static BIRTHDAY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}\.[0-9]{1,2}\.[0-9]{1,2}$").expect("birthday regex is valid")
});

/// A contact's birthday, parsed from `YYYY.MM.DD` text.
///
/// # Example
///
/// ```
/// use address_book::domain::Birthday;
/// use chrono::Datelike;
///
/// let birthday = Birthday::new("2000.05.17").unwrap();
/// assert_eq!(birthday.date().month(), 5);
/// assert_eq!(birthday.to_string(), "2000-05-17");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `YYYY.MM.DD` text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the text does not match the
    /// format or names a date that does not exist (including year 0).
    pub fn new(text: &str) -> Result<Self, ValidationError> {
        Self::parse_date(text).map(Self)
    }

    fn parse_date(text: &str) -> Result<NaiveDate, ValidationError> {
        if !BIRTHDAY_REGEX.is_match(text) {
            return Err(ValidationError::InvalidDate(text.to_string()));
        }
        NaiveDate::parse_from_str(text, BIRTHDAY_FORMAT)
            .ok()
            // Year 0 is not a calendar year
            .filter(|date| date.year() >= 1)
            .ok_or_else(|| ValidationError::InvalidDate(text.to_string()))
    }

    /// Get the parsed date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The day this birthday is observed in `year`.
    ///
    /// A Feb 29 birthday is observed on Feb 28 in non-leap years.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day())
            .or_else(|| NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day() - 1))
    }
}

impl Field for Birthday {
    type Value = NaiveDate;

    fn value(&self) -> &NaiveDate {
        &self.0
    }

    fn set_value(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.0 = Self::parse_date(raw)?;
        Ok(())
    }
}

// Serde support - serialize in the input format
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0
            .format(BIRTHDAY_FORMAT)
            .to_string()
            .serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_parses_dotted_date() {
        let birthday = Birthday::new("2000.05.17").unwrap();
        assert_eq!(birthday.date().year(), 2000);
        assert_eq!(birthday.date().month(), 5);
        assert_eq!(birthday.date().day(), 17);
    }

    #[test]
    fn test_birthday_rejects_impossible_dates() {
        assert!(Birthday::new("2000.13.01").is_err());
        assert!(Birthday::new("2000.05.50").is_err());
        assert!(Birthday::new("2001.02.29").is_err());
        assert!(Birthday::new("2000.02.29").is_ok());
        assert_eq!(
            Birthday::new("0000.01.01"),
            Err(ValidationError::InvalidDate("0000.01.01".to_string()))
        );
        assert!(Birthday::new("0001.01.01").is_ok());
    }

    #[test]
    fn test_birthday_rejects_other_formats() {
        assert!(Birthday::new("").is_err());
        assert!(Birthday::new("2000-05-17").is_err());
        assert!(Birthday::new("17.05.2000").is_err());
        assert!(Birthday::new("2000.05.17 ").is_err());
        assert!(Birthday::new("20000.05.17").is_err());
    }

    #[test]
    fn test_birthday_failed_write_keeps_old_value() {
        let mut birthday = Birthday::new("1990.01.02").unwrap();
        let err = birthday.set_value("1990.02.30").unwrap_err();
        assert_eq!(err, ValidationError::InvalidDate("1990.02.30".to_string()));
        assert_eq!(birthday.to_string(), "1990-01-02");

        birthday.set_value("1991.03.04").unwrap();
        assert_eq!(*birthday.value(), NaiveDate::from_ymd_opt(1991, 3, 4).unwrap());
    }

    #[test]
    fn test_birthday_leap_day_occurrence() {
        let birthday = Birthday::new("2000.02.29").unwrap();
        assert_eq!(
            birthday.occurrence_in(2023),
            NaiveDate::from_ymd_opt(2023, 2, 28)
        );
        assert_eq!(
            birthday.occurrence_in(2024),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::new("1985.11.03").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"1985.11.03\"");

        let parsed: Birthday = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, birthday);

        let result: Result<Birthday, _> = serde_json::from_str("\"1985-11-03\"");
        assert!(result.is_err());
    }
}
