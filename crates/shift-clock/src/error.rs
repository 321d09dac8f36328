//! Error types for shift-clock operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClockError {
    #[error("Invalid argument: {0}")]
    Validation(String),

    #[error("Invalid relative date expression: {0}")]
    InvalidFormat(String),

    #[error("Invalid conversion: {0}")]
    InvalidConversion(String),

    #[error("Nonexistent local time: {0}")]
    NonexistentTime(String),

    #[error("Ambiguous local time: {0}")]
    AmbiguousTime(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Setting lookup failed: {0}")]
    Settings(String),
}

pub type Result<T> = std::result::Result<T, ClockError>;
