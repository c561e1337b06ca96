//! Assembling the final baht text.

use crate::digits::digits_of;
use crate::error::Result;
use crate::normalize::{split, ExactAmount, SplitAmount};
use crate::transliterate::spell;
use crate::vocab;
use log::debug;

/// Converts an exact amount into Thai baht text.
///
/// Amounts with more than two fractional digits are rejected; every other
/// amount is accepted, whatever its magnitude.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use rust_decimal::Decimal;
/// use bahttext::to_baht_text;
///
/// let amount = Decimal::from_str("1000000.05").unwrap();
/// assert_eq!(to_baht_text(&amount).unwrap(), "หนึ่งล้านบาทห้าสตางค์");
/// ```
pub fn to_baht_text<A: ExactAmount + ?Sized>(amount: &A) -> Result<String> {
    let split = split(amount)?;
    debug!(
        "Split amount: negative={}, baht digits={}, satang={}",
        split.is_negative,
        split.major.len(),
        split.minor
    );
    Ok(assemble(&split))
}

/// Joins sign, baht words, and the satang suffix.
pub fn assemble(split: &SplitAmount) -> String {
    let mut text = String::new();

    if split.is_negative {
        text.push_str(vocab::NEGATIVE);
    }

    text.push_str(&spell(&split.major));
    text.push_str(vocab::BAHT);

    if split.minor == 0 {
        text.push_str(vocab::EVEN);
    } else {
        text.push_str(&spell(&digits_of(u128::from(split.minor))));
        text.push_str(vocab::SATANG);
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digits::Digit;
    use crate::error::BahtTextError;
    use bigdecimal::BigDecimal;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn baht(s: &str) -> String {
        to_baht_text(&BigDecimal::from_str(s).unwrap()).unwrap()
    }

    #[test]
    fn test_assemble_even() {
        let split = SplitAmount {
            is_negative: false,
            major: vec![Digit::Zero],
            minor: 0,
        };
        assert_eq!(assemble(&split), "ศูนย์บาทถ้วน");
    }

    #[test]
    fn test_assemble_negative_with_satang() {
        let split = SplitAmount {
            is_negative: true,
            major: vec![Digit::One],
            minor: 1,
        };
        assert_eq!(assemble(&split), "ลบหนึ่งบาทหนึ่งสตางค์");
    }

    #[test]
    fn test_satang_use_the_same_grammar() {
        assert_eq!(baht("0.11"), "ศูนย์บาทสิบเอ็ดสตางค์");
        assert_eq!(baht("2.25"), "สองบาทยี่สิบห้าสตางค์");
        assert_eq!(baht("1.10"), "หนึ่งบาทสิบสตางค์");
    }

    #[test]
    fn test_negative_prefixes_positive_text() {
        for s in ["12", "1.25", "1000000.05", "0.01"] {
            let positive = baht(s);
            let negative = baht(&format!("-{}", s));
            assert_eq!(negative, format!("ลบ{}", positive));
        }
    }

    #[test]
    fn test_fixed_width_and_big_decimals_agree() {
        for s in ["0", "11", "-1.25", "79228162514264337593543950335"] {
            let fixed = to_baht_text(&Decimal::from_str(s).unwrap()).unwrap();
            assert_eq!(fixed, baht(s));
        }
    }

    #[test]
    fn test_too_many_decimals_produces_no_text() {
        let result = to_baht_text(&Decimal::from_str("1.234").unwrap());
        assert!(matches!(
            result,
            Err(BahtTextError::TooManyFractionalDigits { .. })
        ));
    }
}
