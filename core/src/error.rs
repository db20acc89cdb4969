//! Error types for input validation.

use thiserror::Error;

/// Errors returned when user input cannot be accepted.
///
/// Every variant describes invalid input. None of them are fatal: callers
/// are expected to report the message and ask again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("input cannot be empty")]
    Empty,
    #[error("invalid character '{0}' at position {1}: only 0 and 1 allowed")]
    InvalidCharacter(char, usize), // character, position
    #[error("binary data must be at least {min} bits long (found {found})")]
    TooShort { found: usize, min: usize },
    #[error("binary data cannot exceed {max} bits (found {found})")]
    TooLong { found: usize, max: usize },
    #[error("input cannot be empty: enter a number between {min} and {max}")]
    EmptyRange { min: i64, max: i64 },
    #[error("invalid input '{0}': enter an integer only")]
    NotInteger(String),
    #[error("{value} is out of range: enter a number between {min} and {max}")]
    OutOfRange { value: i64, min: i64, max: i64 },
    #[error("{raw} is out of range: enter a number between {min} and {max}")]
    Overflow { raw: String, min: i64, max: i64 },
}
