//! Phone field.

use super::errors::ValidationError;
use super::field::Field;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{10}$").expect("phone regex is valid"));

/// A contact phone number.
///
/// Construction and [`Field::set_value`] store the text as-is. Format checking
/// is the separate [`Phone::validate`] step, which callers run before storing
/// a number they received from outside.
///
/// # Example
///
/// ```
/// use address_book::domain::Phone;
///
/// let number = Phone::validate("0501234567").unwrap();
/// let phone = Phone::new(number);
/// assert_eq!(phone.as_str(), "0501234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone without checking the format.
    pub fn new(phone: impl Into<String>) -> Self {
        Self(phone.into())
    }

    /// Check that `phone` is exactly 10 decimal digits.
    ///
    /// Any Unicode decimal digit counts, not only ASCII `0-9`.
    ///
    /// Returns the input unchanged on success. Does not touch any stored value.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the length is not 10 or any
    /// character is not a digit.
    pub fn validate(phone: &str) -> Result<&str, ValidationError> {
        if !PHONE_REGEX.is_match(phone) {
            return Err(ValidationError::InvalidPhone(phone.to_string()));
        }
        Ok(phone)
    }

    /// Validate and construct in one step.
    pub fn parse(phone: &str) -> Result<Self, ValidationError> {
        Self::validate(phone).map(Self::new)
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Field for Phone {
    type Value = String;

    fn value(&self) -> &String {
        &self.0
    }

    // Raw assignment, see `Phone::validate`.
    fn set_value(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.0 = raw.to_string();
        Ok(())
    }
}

// Serde support - serialize as string
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
