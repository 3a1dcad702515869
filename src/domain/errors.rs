//! Domain validation errors.

use std::fmt;

/// Errors that can occur during field value validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty.
    EmptyName,

    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// The provided birthday is malformed or not a real calendar date.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::InvalidPhone(phone) => write!(
                f,
                "Invalid phone number '{}': must contain exactly 10 digits",
                phone
            ),
            Self::InvalidBirthday(date) => {
                write!(f, "Invalid date '{}': use DD.MM.YYYY", date)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
