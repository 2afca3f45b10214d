//! Error types for duration parsing.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DurationError {
    /// The input does not match `[sign] digits [" "] unit` in its entirety.
    #[error("Invalid duration string: '{0}'")]
    InvalidSyntax(String),

    /// The signed numeral, or its product with the unit, does not fit in an
    /// `i64` nanosecond count.
    #[error("Duration overflow: '{0}' exceeds the representable range")]
    Overflow(String),

    #[error("Unsupported unit: '{0}'")]
    UnsupportedUnit(String),

    #[error("Timestamp out of range: {0}")]
    TimestampOutOfRange(String),

    #[error("Invalid duration pattern: {0}")]
    Pattern(String),
}

pub type Result<T> = std::result::Result<T, DurationError>;
