//! Data models for the address book.
//!
//! This module contains the contact [`Record`] and the [`AddressBook`]
//! collection with its page iterator.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, Pages, DEFAULT_PAGE_SIZE};
pub use record::Record;
