//! Address Book - an in-memory contact book.
//!
//! Contacts carry a name, a birthday and validated phone numbers. The book
//! stores them by name and hands them out one page at a time.
//!
//! # Architecture
//!
//! - **domain**: Field types (name, phone, birthday) and validation errors
//! - **models**: Contact records and the address book with pagination
//! - **error**: Error types for record and book operations
//! - **config**: Configuration management from environment variables

pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use config::Config;
pub use domain::{Birthday, Field, Name, Phone, ValidationError};
pub use error::{AddressBookError, AddressBookResult, ConfigError};
pub use models::{AddressBook, Pages, Record};
