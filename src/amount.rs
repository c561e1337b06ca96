//! Parsing user-supplied numerals into exact decimals.

use crate::error::{BahtTextError, Result};
use bigdecimal::BigDecimal;
use std::str::FromStr;

/// Parses a decimal numeral such as `"-1234.50"`.
///
/// Surrounding whitespace is ignored. Every digit of the literal is kept,
/// whatever its length, and so is its scale: `"1.230"` parses with three
/// fractional digits.
pub fn parse_amount(input: &str) -> Result<BigDecimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(BahtTextError::EmptyInput);
    }
    BigDecimal::from_str(trimmed).map_err(|source| BahtTextError::InvalidNumber {
        input: trimmed.to_string(),
        source,
    })
}
