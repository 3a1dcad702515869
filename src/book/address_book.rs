//! The address book: an insertion-ordered collection of contact records.

use crate::book::Record;
use crate::error::{BookError, BookResult};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::HashMap;

/// An entry returned by [`AddressBook::upcoming_birthdays`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// The contact's name.
    pub name: String,

    /// The day the contact should be congratulated on. This is the birthday
    /// occurrence rolled forward off weekends, not the raw occurrence.
    pub congratulation_date: NaiveDate,
}

/// The full collection of records, keyed by contact name.
///
/// Records are owned exclusively by the book: deleting an entry destroys
/// the record. Iteration order is record insertion order, which is also the
/// display order of `all` and the output order of `upcoming_birthdays`.
/// Every key equals its record's name; callers never touch the underlying
/// containers directly.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    // Insertion order of keys; kept in lockstep with `records`.
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its own name.
    ///
    /// A colliding name is rejected rather than overwritten, so phones
    /// already stored can never be lost silently. Merging a new phone into
    /// an existing contact is the command layer's job: look the record up
    /// with [`find_mut`](Self::find_mut) and call
    /// [`Record::add_phone`] on it.
    ///
    /// # Errors
    ///
    /// Returns `BookError::DuplicateContact` if a record with the same name
    /// already exists.
    pub fn add_record(&mut self, record: Record) -> BookResult<()> {
        let key = record.name().as_str().to_string();

        if self.records.contains_key(&key) {
            return Err(BookError::DuplicateContact(key));
        }

        self.order.push(key.clone());
        self.records.insert(key, record);
        Ok(())
    }

    /// Find a record by name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Find a record by name for mutation.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Delete the record stored under `name` and return it.
    ///
    /// # Errors
    ///
    /// Returns `BookError::ContactNotFound` if no such record exists.
    pub fn delete(&mut self, name: &str) -> BookResult<Record> {
        match self.records.remove(name) {
            Some(record) => {
                self.order.retain(|key| key != name);
                Ok(record)
            }
            None => Err(BookError::ContactNotFound(name.to_string())),
        }
    }

    /// Iterate over all records in insertion order.
    pub fn all(&self) -> impl Iterator<Item = &Record> {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts whose birthday falls within the next `horizon_days` days.
    ///
    /// For every record with a birthday set, the birthday's occurrence in
    /// `today`'s year is computed; if that occurrence already passed, the
    /// next year's occurrence is used instead. The record is included iff
    /// `0 <= occurrence - today <= horizon_days` (inclusive on both ends,
    /// so a birthday today counts). Occurrences landing on a Saturday or
    /// Sunday have their congratulation date moved to the following Monday;
    /// the window check uses the raw occurrence, not the rolled date.
    ///
    /// A Feb 29 birthday resolves to Mar 1 in non-leap target years.
    ///
    /// Results keep record insertion order.
    pub fn upcoming_birthdays(
        &self,
        today: NaiveDate,
        horizon_days: i64,
    ) -> Vec<UpcomingBirthday> {
        let mut upcoming = Vec::new();

        for record in self.all() {
            let Some(birthday) = record.birthday() else {
                continue;
            };

            let mut occurrence = occurrence_in_year(birthday.date(), today.year());
            if occurrence < today {
                occurrence = occurrence_in_year(birthday.date(), today.year() + 1);
            }

            let delta = (occurrence - today).num_days();
            if !(0..=horizon_days).contains(&delta) {
                continue;
            }

            let congratulation_date = match occurrence.weekday() {
                Weekday::Sat => occurrence + Duration::days(2),
                Weekday::Sun => occurrence + Duration::days(1),
                _ => occurrence,
            };

            upcoming.push(UpcomingBirthday {
                name: record.name().as_str().to_string(),
                congratulation_date,
            });
        }

        upcoming
    }
}

/// The calendar date a birthday falls on in `year`.
///
/// Feb 29 does not exist in non-leap years; it resolves to Mar 1.
fn occurrence_in_year(birthday: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()).unwrap_or_else(|| {
        NaiveDate::from_ymd_opt(year, 3, 1).expect("March 1 exists in every year")
    })
}
