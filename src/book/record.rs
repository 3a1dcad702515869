//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, Phone};
use crate::error::{BookError, BookResult};
use serde::Serialize;
use std::fmt;

/// A single contact: a name, its phone numbers, and an optional birthday.
///
/// Phones keep insertion order, which is also display order. Duplicate
/// phone values are allowed; the book never deduplicates them. Records are
/// created through [`AddressBook::add_record`](crate::book::AddressBook::add_record)
/// and live exactly as long as the book holds them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The contact's phones, in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The contact's birthday, if one has been set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Append a phone to the record. Duplicates are kept as-is.
    pub fn add_phone(&mut self, phone: Phone) {
        self.phones.push(phone);
    }

    /// Find the first phone whose value equals `value`.
    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    /// Replace the first phone equal to `old` with `new`, preserving its
    /// position in the list.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` if the record has no such phone.
    pub fn edit_phone(&mut self, old: &str, new: Phone) -> BookResult<()> {
        match self.phones.iter_mut().find(|p| p.as_str() == old) {
            Some(slot) => {
                *slot = new;
                Ok(())
            }
            None => Err(BookError::PhoneNotFound {
                name: self.name.as_str().to_string(),
                phone: old.to_string(),
            }),
        }
    }

    /// Remove the first phone equal to `value` and return it.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` if the record has no such phone.
    pub fn remove_phone(&mut self, value: &str) -> BookResult<Phone> {
        match self.phones.iter().position(|p| p.as_str() == value) {
            Some(index) => Ok(self.phones.remove(index)),
            None => Err(BookError::PhoneNotFound {
                name: self.name.as_str().to_string(),
                phone: value.to_string(),
            }),
        }
    }

    /// Set the birthday, replacing any previous one.
    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }
}

impl fmt::Display for Record {
    /// Renders `"<name>: <phone1>; <phone2>[, birthday: <DD.MM.YYYY>]"`.
    ///
    /// A record with no phones renders `"<name>: no phones"`; the birthday
    /// suffix is omitted entirely when no birthday is set.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.name)?;

        if self.phones.is_empty() {
            write!(f, "no phones")?;
        } else {
            let phones: Vec<&str> = self.phones.iter().map(|p| p.as_str()).collect();
            write!(f, "{}", phones.join("; "))?;
        }

        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }

        Ok(())
    }
}
