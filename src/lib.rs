//! Contact Book - a command-line contact manager with birthday reminders.
//!
//! Stores names, phone numbers and birthdays, persists them between runs,
//! and lists the contacts whose birthdays fall within the coming week,
//! moving weekend birthdays to the following Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects for names, phones and birthdays
//! - **models**: Contact records, the address book and the birthday query
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **repositories**: Loading and saving address book snapshots
//! - **cli**: Command parsing, handlers and the interactive loop

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;

pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{BookError, CommandError, ConfigError, StorageError};
pub use models::{AddressBook, Record, UpcomingBirthday};
pub use repositories::{AddressBookRepository, JsonFileRepository};
