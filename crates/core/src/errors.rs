//! Core error types for the tickfolio engine.
//!
//! Per-position failures (unknown securities, unpriceable options) are not
//! represented here: they degrade gracefully inside a recalculation cycle and
//! surface as skip records. The errors in this module are the ones returned
//! to callers, chiefly validation failures at the load boundary.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

use crate::pricing::PricingError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the monitoring engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Pricing failed: {0}")]
    Pricing(#[from] PricingError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for parsed input records.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{field}' is missing for symbol '{symbol}'")]
    MissingField { symbol: String, field: String },

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date: {0}")]
    DateParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
