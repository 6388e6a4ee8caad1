use thiserror::Error;

/// Errors that can occur while reading and splitting the digit string
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Digit string cannot be empty")]
    EmptyDigitString,
    #[error("Digit string must contain only digits: {0}")]
    InvalidDigitString(String),
    #[error("Year must have at least {expected} characters, got '{found}'")]
    TooShort { expected: usize, found: String },
    #[error("Multi-digit group cannot start with zero: {0}")]
    LeadingZero(String),
    #[error("Invalid range: start={start}, end={end}, length={length}")]
    InvalidRange {
        start: usize,
        end: usize,
        length: usize,
    },
}
