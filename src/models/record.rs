//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Field, Name, Phone, ValidationError};
use crate::error::{AddressBookError, AddressBookResult};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// A contact: a name, a birthday and an ordered list of unique phone numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RecordData")]
pub struct Record {
    /// Contact name, fixed after creation
    name: Name,

    /// Birthday
    birthday: Birthday,

    /// Phone numbers in insertion order
    phones: Vec<Phone>,
}

/// Wire shape of a record. Duplicate phones are dropped on conversion.
#[derive(Deserialize)]
struct RecordData {
    name: String,
    birthday: Birthday,
    #[serde(default)]
    phones: Vec<Phone>,
}

impl From<RecordData> for Record {
    fn from(data: RecordData) -> Self {
        let mut phones: Vec<Phone> = Vec::with_capacity(data.phones.len());
        for phone in data.phones {
            if !phones.contains(&phone) {
                phones.push(phone);
            }
        }
        Self {
            name: Name::new(data.name),
            birthday: data.birthday,
            phones,
        }
    }
}

impl Record {
    /// Create a record with no phones.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if `birthday` is not `YYYY.MM.DD`.
    pub fn new(name: impl Into<String>, birthday: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name),
            birthday: Birthday::new(birthday)?,
            phones: Vec::new(),
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn birthday(&self) -> &Birthday {
        &self.birthday
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Replace the birthday. The old value stays if `birthday` is malformed.
    pub fn set_birthday(&mut self, birthday: &str) -> AddressBookResult<()> {
        self.birthday.set_value(birthday)?;
        Ok(())
    }

    /// Validate and append a phone number.
    ///
    /// Adding a number that is already present is a no-op.
    pub fn add_phone(&mut self, phone: &str) -> AddressBookResult<()> {
        let phone = Phone::parse(phone).inspect_err(|e| {
            warn!(contact = %self.name, error = %e, "Rejected phone number");
        })?;

        if self.phones.contains(&phone) {
            debug!(contact = %self.name, phone = %phone, "Phone already present");
            return Ok(());
        }

        debug!(contact = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Find the phone entry equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Replace `old` with `new`, keeping its position in the list.
    ///
    /// If `new` is already stored elsewhere on the record, the `old` entry is
    /// removed instead so the list stays free of duplicates.
    ///
    /// # Errors
    ///
    /// - `AddressBookError::PhoneNotFound` if `old` is not on the record
    /// - `AddressBookError::Validation` if `new` is not a valid phone number
    pub fn edit_phone(&mut self, old: &str, new: &str) -> AddressBookResult<()> {
        let index = self
            .position(old)
            .ok_or_else(|| AddressBookError::PhoneNotFound(old.to_string()))?;

        let new = Phone::validate(new)?;

        match self.position(new) {
            Some(existing) if existing != index => {
                debug!(contact = %self.name, old, new, "Edited phone merges into existing entry");
                self.phones.remove(index);
            }
            _ => {
                debug!(contact = %self.name, old, new, "Editing phone");
                self.phones[index].set_value(new)?;
            }
        }
        Ok(())
    }

    /// Remove the phone entry equal to `phone`.
    ///
    /// # Errors
    ///
    /// Returns `AddressBookError::PhoneNotFound` if no entry matches.
    pub fn remove_phone(&mut self, phone: &str) -> AddressBookResult<()> {
        let index = self
            .position(phone)
            .ok_or_else(|| AddressBookError::PhoneNotFound(phone.to_string()))?;

        debug!(contact = %self.name, phone, "Removing phone");
        self.phones.remove(index);
        Ok(())
    }

    /// Days from today (local time) until the next birthday.
    pub fn days_to_birthday(&self) -> i64 {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next birthday.
    ///
    /// This year's date counts as long as `today` is not past it, so the
    /// result is 0 on the birthday itself. When the next occurrence would fall
    /// after `NaiveDate::MAX` the result saturates to 0.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> i64 {
        let next = match self.birthday.occurrence_in(today.year()) {
            Some(date) if date >= today => Some(date),
            _ => self.birthday.occurrence_in(today.year() + 1),
        };

        next.map(|date| (date - today).num_days()).unwrap_or(0)
    }

    fn position(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == phone)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            phones.join("; ")
        )
    }
}
