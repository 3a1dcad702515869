//! Birthday value object.

use super::errors::ValidationError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Textual format birthdays are parsed from and rendered to.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// Shape check applied before calendar parsing, so `6.1.1990` and
/// `06.01.90` are rejected even though chrono would accept them.
static BIRTHDAY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("valid regex literal"));

/// A type-safe wrapper for a contact's birthday.
///
/// Parsed from the fixed textual format `DD.MM.YYYY` and stored as a
/// calendar date, so congratulation scheduling can do date arithmetic
/// without re-parsing. Impossible dates (31.02.2020, 00.01.2020) are
/// rejected at construction time.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("15.03.1995").unwrap();
/// assert_eq!(birthday.to_string(), "15.03.1995");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday from a `DD.MM.YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the input does not
    /// match the pattern or does not name a real Gregorian calendar date.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();

        if !BIRTHDAY_PATTERN.is_match(&raw) {
            return Err(ValidationError::InvalidBirthday(raw));
        }

        match NaiveDate::parse_from_str(&raw, BIRTHDAY_FORMAT) {
            Ok(date) => Ok(Self(date)),
            Err(_) => Err(ValidationError::InvalidBirthday(raw)),
        }
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

// Serde support - serialize in the canonical DD.MM.YYYY rendering
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
