//! Name field.

use super::errors::ValidationError;
use super::field::Field;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact's name. Stored verbatim and used as the address book key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    /// Create a new Name. Any string is accepted.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Field for Name {
    type Value = String;

    fn value(&self) -> &String {
        &self.0
    }

    fn set_value(&mut self, raw: &str) -> Result<(), ValidationError> {
        self.0 = raw.to_string();
        Ok(())
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_stores_verbatim() {
        let mut name = Name::new("  John  ");
        assert_eq!(name.value(), "  John  ");

        name.set_value("").unwrap();
        assert_eq!(name.as_str(), "");
    }

    #[test]
    fn test_name_display() {
        assert_eq!(format!("{}", Name::new("Jane")), "Jane");
    }
}
