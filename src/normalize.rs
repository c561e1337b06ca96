//! Splitting an amount into sign, baht digits, and satang.

use crate::digits::Digit;
use crate::error::{BahtTextError, Result};
use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::{BigInt, BigUint, Sign};
use rust_decimal::Decimal;

/// Satang have two digits of resolution.
pub const MAX_FRACTIONAL_DIGITS: i64 = 2;

/// An exact decimal that can be read aloud.
///
/// Amounts of any magnitude are handled as [`BigDecimal`]; fixed-width
/// types convert into it without loss.
pub trait ExactAmount {
    fn to_big_decimal(&self) -> BigDecimal;
}

impl ExactAmount for BigDecimal {
    fn to_big_decimal(&self) -> BigDecimal {
        self.clone()
    }
}

impl ExactAmount for Decimal {
    fn to_big_decimal(&self) -> BigDecimal {
        BigDecimal::new(BigInt::from(self.mantissa()), i64::from(self.scale()))
    }
}

/// An amount decomposed for reading aloud.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitAmount {
    /// `true` for amounts strictly below zero.
    pub is_negative: bool,

    /// Baht digits, most significant first, without sign.
    pub major: Vec<Digit>,

    /// Satang, always in `0..=99`.
    pub minor: u8,
}

/// Validates the precision of `amount` and splits it.
///
/// Fails with [`BahtTextError::TooManyFractionalDigits`] when the amount
/// has a scale above two, even if the extra digits are zero.
pub fn split<A: ExactAmount + ?Sized>(amount: &A) -> Result<SplitAmount> {
    let amount = amount.to_big_decimal();

    let (_, scale) = amount.as_bigint_and_exponent();
    if scale > MAX_FRACTIONAL_DIGITS {
        return Err(BahtTextError::TooManyFractionalDigits { scale });
    }

    // No-op for valid input; guards against a carry such as 1.999 -> 2.00.
    let amount = amount.with_scale_round(MAX_FRACTIONAL_DIGITS, RoundingMode::HalfUp);

    // At scale 2 the unscaled integer counts satang.
    let (satang, _) = amount.into_bigint_and_exponent();
    let is_negative = satang.sign() == Sign::Minus;
    let satang = satang.magnitude();

    let major = satang / 100u32;
    let minor = satang % 100u32;

    Ok(SplitAmount {
        is_negative,
        major: decimal_digits(&major),
        minor: decimal_digits(&minor)
            .iter()
            .fold(0, |acc, digit| acc * 10 + digit.value()),
    })
}

/// Digits of `value`, most significant first; zero yields `[Digit::Zero]`.
fn decimal_digits(value: &BigUint) -> Vec<Digit> {
    value
        .to_radix_be(10)
        .into_iter()
        .map(|d| Digit::ALL[usize::from(d)])
        .collect()
}
