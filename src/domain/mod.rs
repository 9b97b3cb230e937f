//! Contact field types.
//!
//! Every field implements the [`Field`] contract. [`Name`] stores text
//! verbatim, [`Phone`] keeps raw assignment separate from its explicit
//! 10-digit check, and [`Birthday`] parses `YYYY.MM.DD` text on every write.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use field::Field;
pub use name::Name;
pub use phone::Phone;
