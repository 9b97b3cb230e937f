//! Address book: contacts keyed by name, iterated page by page.

use super::record::Record;
use crate::config::Config;
use crate::error::{AddressBookError, AddressBookResult};
use std::collections::HashMap;
use std::iter::FusedIterator;
use tracing::debug;

/// Number of records per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// A collection of records keyed by contact name.
///
/// Records are enumerated in insertion order. Replacing a record keeps the
/// position of the name it replaced.
///
/// # Example
///
/// ```
/// use address_book::{AddressBook, Record};
///
/// let mut book = AddressBook::new();
/// book.add_record(Record::new("John", "1990.06.15").unwrap());
///
/// for page in &book {
///     for record in page {
///         println!("{}", record);
///     }
///     println!("===");
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
    page_size: usize,
}

impl AddressBook {
    /// Create an empty address book with the default page size.
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
            order: Vec::new(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Create an empty address book using the configured page size.
    pub fn from_config(config: &Config) -> AddressBookResult<Self> {
        let mut book = Self::new();
        book.set_page_size(config.page_size)?;
        Ok(book)
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Change the number of records per page.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::InvalidPageSize` if `page_size` is zero.
    pub fn set_page_size(&mut self, page_size: usize) -> AddressBookResult<()> {
        if page_size == 0 {
            return Err(AddressBookError::InvalidPageSize(page_size));
        }
        self.page_size = page_size;
        Ok(())
    }

    /// Insert a record under its name, replacing any record with the same name.
    pub fn add_record(&mut self, record: Record) {
        let name = record.name().as_str().to_string();

        if self.records.insert(name.clone(), record).is_some() {
            debug!(contact = %name, "Replaced existing record");
        } else {
            debug!(contact = %name, "Added record");
            self.order.push(name);
        }
    }

    /// Look up a record by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by name for editing.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record with this name. Does nothing if it is absent.
    pub fn delete(&mut self, name: &str) {
        if self.records.remove(name).is_some() {
            debug!(contact = %name, "Deleted record");
            self.order.retain(|n| n != name);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contact names in enumeration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }

    /// Records in enumeration order.
    pub fn records(&self) -> impl Iterator<Item = &Record> + '_ {
        self.order.iter().filter_map(|name| self.records.get(name))
    }

    /// Start a new pass over the records, one page at a time.
    ///
    /// The pass works on a snapshot taken now. Every call returns a fresh,
    /// independent iterator.
    pub fn pages(&self) -> Pages<'_> {
        Pages::new(self.records().collect(), self.page_size)
    }

    /// Alias for [`AddressBook::pages`].
    pub fn iterator(&self) -> Pages<'_> {
        self.pages()
    }
}

impl Default for AddressBook {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = Vec<&'a Record>;
    type IntoIter = Pages<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages()
    }
}

/// Iterator over consecutive pages of an address book snapshot.
///
/// Every page holds `page_size` records except possibly the last.
#[derive(Debug, Clone)]
pub struct Pages<'a> {
    snapshot: Vec<&'a Record>,
    current_page: usize,
    page_size: usize,
}

impl<'a> Pages<'a> {
    fn new(snapshot: Vec<&'a Record>, page_size: usize) -> Self {
        Self {
            snapshot,
            current_page: 0,
            page_size,
        }
    }

    fn remaining(&self) -> usize {
        let start = self.current_page.saturating_mul(self.page_size);
        self.snapshot
            .len()
            .saturating_sub(start)
            .div_ceil(self.page_size)
    }
}

impl<'a> Iterator for Pages<'a> {
    type Item = Vec<&'a Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.current_page.checked_mul(self.page_size)?;
        if start >= self.snapshot.len() {
            return None;
        }
        let end = (start + self.page_size).min(self.snapshot.len());

        self.current_page += 1;
        Some(self.snapshot[start..end].to_vec())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Pages<'_> {}

impl FusedIterator for Pages<'_> {}
