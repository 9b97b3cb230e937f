//! The shared contract for contact fields.

use super::errors::ValidationError;
use std::fmt;

/// A named single-value holder with its own write behavior.
///
/// Every contact field implements this trait. Reading always returns the
/// last value that was successfully written; a rejected write leaves the
/// previous value in place.
pub trait Field: fmt::Display {
    /// The stored representation of the field.
    type Value;

    /// Get the stored value.
    fn value(&self) -> &Self::Value;

    /// Write a new value from its text form.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` when the field's write step rejects the text.
    fn set_value(&mut self, raw: &str) -> Result<(), ValidationError>;
}
