//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when operating on the address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// No contact is stored under the given name
    #[error("Contact '{0}' not found")]
    ContactNotFound(String),

    /// The contact exists but has no phone with the given value
    #[error("Phone '{phone}' not found for contact '{name}'")]
    PhoneNotFound { name: String, phone: String },

    /// A record is already stored under the given name
    #[error("Contact '{0}' already exists")]
    DuplicateContact(String),
}

/// Errors surfaced to the user by the command layer.
///
/// Every core failure is translated into exactly one of these; the REPL
/// renders the `Display` text and moves on to the next input line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Command invoked with too few arguments
    #[error("{0}")]
    MissingArguments(String),

    /// A field value failed validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// An address book operation failed
    #[error("{0}")]
    Book(#[from] BookError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BookError::ContactNotFound("John".to_string());
        assert_eq!(err.to_string(), "Contact 'John' not found");

        let err = BookError::PhoneNotFound {
            name: "John".to_string(),
            phone: "1234567890".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Phone '1234567890' not found for contact 'John'"
        );

        let err = ConfigError::InvalidValue {
            var: "BIRTHDAY_HORIZON_DAYS".to_string(),
            reason: "Must be a positive number".to_string(),
        };
        assert!(err.to_string().contains("BIRTHDAY_HORIZON_DAYS"));
    }

    #[test]
    fn test_command_error_wraps_sources() {
        let err: CommandError = ValidationError::EmptyName.into();
        assert_eq!(err.to_string(), "Name cannot be empty");

        let err: CommandError = BookError::DuplicateContact("Ann".to_string()).into();
        assert_eq!(err.to_string(), "Contact 'Ann' already exists");
    }
}
