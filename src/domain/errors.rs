//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during field validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The phone number is not exactly 10 decimal digits.
    #[error("Invalid phone number: {0} (expected exactly 10 digits)")]
    InvalidPhone(String),

    /// The birthday text is not a real date in `YYYY.MM.DD` form.
    #[error("Invalid date: {0} (expected YYYY.MM.DD)")]
    InvalidDate(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::InvalidPhone("123".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid phone number: 123 (expected exactly 10 digits)"
        );

        let err = ValidationError::InvalidDate("2000.13.01".to_string());
        assert!(err.to_string().contains("2000.13.01"));
    }
}
