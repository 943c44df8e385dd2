//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by record and address book operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The referenced phone number is not on the record
    #[error("Phone number {0} not found")]
    PhoneNotFound(String),

    /// A birthday's day and month do not exist in the year being checked
    #[error("Birthday of {name} cannot be placed in {year}")]
    UnrepresentableBirthday { name: String, year: i32 },
}

/// Errors that can occur while loading or saving a snapshot.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the snapshot file failed
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot could not be encoded or decoded
    #[error("Snapshot format error: {0}")]
    Json(#[from] serde_json::Error),

    /// The snapshot was written by an unknown format version
    #[error("Unsupported snapshot version: {0}")]
    UnsupportedVersion(u32),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors returned by command handlers, rendered to the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Wrong number of arguments for the command
    #[error("Invalid command format. Please try again.")]
    InvalidFormat,

    /// The named contact is not in the book
    #[error("Contact not found.")]
    ContactNotFound(String),

    /// A record or book operation failed
    #[error(transparent)]
    Book(#[from] BookError),

    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BookError::PhoneNotFound("1111111111".to_string());
        assert_eq!(err.to_string(), "Phone number 1111111111 not found");

        let err = BookError::UnrepresentableBirthday {
            name: "Leap".to_string(),
            year: 2025,
        };
        assert_eq!(err.to_string(), "Birthday of Leap cannot be placed in 2025");

        let err = StorageError::UnsupportedVersion(7);
        assert_eq!(err.to_string(), "Unsupported snapshot version: 7");

        let err = ConfigError::InvalidValue {
            var: "LOG_LEVEL".to_string(),
            reason: "unknown level".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for LOG_LEVEL: unknown level");

        let err = CommandError::ContactNotFound("John".to_string());
        assert_eq!(err.to_string(), "Contact not found.");

        let err = CommandError::InvalidFormat;
        assert_eq!(err.to_string(), "Invalid command format. Please try again.");
    }

    #[test]
    fn test_command_error_wraps_book_errors() {
        let err: CommandError = BookError::PhoneNotFound("1111111111".to_string()).into();
        assert_eq!(err.to_string(), "Phone number 1111111111 not found");

        let err: CommandError = ValidationError::InvalidPhone("1".to_string()).into();
        assert_eq!(err.to_string(), "phone must be 10 digits");
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let err: BookError = ValidationError::EmptyName.into();
        assert_eq!(err.to_string(), "empty name");
        assert_eq!(err, BookError::Validation(ValidationError::EmptyName));
    }
}
