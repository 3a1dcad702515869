//! Contact Book - a console assistant bot for a personal address book.
//!
//! This library implements an in-memory contact directory with phone and
//! birthday tracking, driven by a line-oriented command interpreter.
//!
//! # Architecture
//!
//! - **domain**: Validated field value objects (names, phones, birthdays)
//! - **book**: Records and the address book that owns them, including the
//!   upcoming-birthday scheduling query
//! - **commands**: Line parsing, dispatch, and the handlers behind each
//!   command of the assistant bot
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;

pub use book::{AddressBook, Record, UpcomingBirthday};
pub use commands::{dispatch, parse_input, Dispatch};
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{BookError, CommandError, ConfigError};
