//! Errors and error-handling for operations.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TimestampError {
    #[error("Timestamp `{0}` does not match the `YYYY-MM-DDTHH:MM:SS.ffffff` format.")]
    Malformed(String),
    #[error("Timestamp `{0}` is not a valid calendar date and time.")]
    Invalid(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum OperationError {
    #[error("Operation at position {index} is missing the `{field}` field.")]
    MissingField { index: usize, field: &'static str },
    #[error("Operation at position {index} has an unparseable date: {source}")]
    ParseError {
        index: usize,
        source: TimestampError,
    },
}
