//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty.
    EmptyName,

    /// The provided phone number is not exactly 10 digits.
    InvalidPhone(String),

    /// The provided birthday does not match `DD.MM.YYYY` or is not a real date.
    InvalidBirthday(String),
}

impl ValidationError {
    /// The raw input that failed validation, if any was kept.
    pub fn input(&self) -> Option<&str> {
        match self {
            Self::EmptyName => None,
            Self::InvalidPhone(value) | Self::InvalidBirthday(value) => Some(value),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "empty name"),
            Self::InvalidPhone(_) => write!(f, "phone must be 10 digits"),
            Self::InvalidBirthday(_) => {
                write!(f, "invalid date format, expected DD.MM.YYYY")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
