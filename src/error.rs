//! Error types for baht text conversion.

use thiserror::Error;

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, BahtTextError>;

/// Errors that can occur while parsing, converting, or serving amounts.
#[derive(Error, Debug)]
pub enum BahtTextError {
    /// The amount carries more precision than satang can express.
    ///
    /// This is the only error the conversion itself can produce.
    #[error("amount has more than 2 decimal places")]
    TooManyFractionalDigits { scale: i64 },

    /// Input text is not a decimal numeral
    #[error("invalid number format: {input:?}")]
    InvalidNumber {
        input: String,
        #[source]
        source: bigdecimal::ParseBigDecimalError,
    },

    /// Input text was blank
    #[error("empty input")]
    EmptyInput,

    /// A digit string contained something other than `0`-`9`
    #[error("invalid digit {ch:?} at position {position}")]
    InvalidDigit { ch: char, position: usize },

    /// `PORT` could not be parsed
    #[error("invalid port {value:?}")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Failed to open, read, or write
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),
}
