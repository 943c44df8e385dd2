//! Record model: one contact in the address book.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// A contact: a name, its phone numbers and an optional birthday.
///
/// Phones keep insertion order and may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number. Duplicates are allowed.
    pub fn add_phone(&mut self, raw: &str) -> BookResult<()> {
        let phone = Phone::new(raw)?;
        debug!(name = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `raw`.
    pub fn remove_phone(&mut self, raw: &str) -> BookResult<()> {
        let index = self
            .position_of(raw)
            .ok_or_else(|| BookError::PhoneNotFound(raw.to_string()))?;
        debug!(name = %self.name, phone = raw, "Removing phone");
        self.phones.remove(index);
        Ok(())
    }

    /// Replace `old_raw` with `new_raw`, keeping its position.
    ///
    /// # Errors
    ///
    /// `PhoneNotFound` if `old_raw` is not on the record, checked first.
    /// `Validation` if `new_raw` is not a valid phone; the old number stays.
    pub fn edit_phone(&mut self, old_raw: &str, new_raw: &str) -> BookResult<()> {
        let index = self
            .position_of(old_raw)
            .ok_or_else(|| BookError::PhoneNotFound(old_raw.to_string()))?;
        let phone = &mut self.phones[index];
        phone.replace(new_raw)?;
        debug!(name = %self.name, old = old_raw, new = new_raw, "Edited phone");
        Ok(())
    }

    /// Find a phone by exact value.
    pub fn find_phone(&self, raw: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| *p == raw)
    }

    fn position_of(&self, raw: &str) -> Option<usize> {
        self.phones.iter().position(|p| p == raw)
    }

    /// Set the birthday, propagating validation failures.
    ///
    /// On error the previous birthday (or its absence) is unchanged.
    pub fn try_set_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        let birthday = Birthday::new(raw)?;
        debug!(name = %self.name, birthday = %birthday, "Setting birthday");
        self.birthday = Some(birthday);
        Ok(())
    }

    /// Set the birthday without failing the call.
    ///
    /// An invalid value is logged and handed back as a diagnostic; the
    /// record keeps whatever birthday it had before.
    pub fn set_birthday(&mut self, raw: &str) -> Option<ValidationError> {
        match self.try_set_birthday(raw) {
            Ok(()) => None,
            Err(err) => {
                warn!(name = %self.name, input = raw, "Birthday not set: {}", err);
                Some(err)
            }
        }
    }

    /// The birthday as `DD.MM.YYYY`, if set.
    pub fn birthday_display(&self) -> Option<String> {
        self.birthday.map(|b| b.to_string())
    }

    /// Phones joined with `"; "`.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// One-line human readable summary.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            self.phones_display()
        )?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
