//! Digit sequence to Thai number words.
//!
//! Digits are read left to right. Each digit may emit a digit word and a
//! place-value word; the only context carried between digits is what kind
//! of word was emitted last, which decides between หนึ่ง and เอ็ด.
//!
//! Place words repeat every six digits, so the ones position of each
//! higher block reads as ล้าน and blocks compound: 10^12 is
//! หนึ่งล้านล้าน.

use crate::digits::{parse_digits, Digit, PlaceClass, Position};
use crate::error::Result;
use crate::vocab;

/// What the most recently emitted word was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lookback {
    /// Nothing emitted yet; every digit so far was zero.
    Initial,
    /// Last word was สิบ or ร้อย.
    AfterTenOrHundred,
    AfterOther,
}

impl Lookback {
    fn after_place(class: PlaceClass) -> Self {
        match class {
            PlaceClass::Ten | PlaceClass::Hundred => Lookback::AfterTenOrHundred,
            PlaceClass::Million
            | PlaceClass::Thousand
            | PlaceClass::TenThousand
            | PlaceClass::HundredThousand => Lookback::AfterOther,
        }
    }
}

/// Word for `digit` at `position`, if it is spoken at all.
fn digit_word(digit: Digit, position: Position, last: Lookback) -> Option<&'static str> {
    match digit {
        // Only a number that is zero throughout is read as ศูนย์.
        Digit::Zero => match last {
            Lookback::Initial if position.is_ones() => Some(vocab::ZERO),
            _ => None,
        },
        Digit::One => match (position.class, last) {
            (PlaceClass::Ten, _) => None,
            (_, Lookback::AfterTenOrHundred) => Some(vocab::ONE_CONNECTIVE),
            _ => Some(vocab::ONE),
        },
        Digit::Two => match position.class {
            PlaceClass::Ten => Some(vocab::TWO_TENS),
            _ => Some(vocab::TWO),
        },
        Digit::Three => Some(vocab::THREE),
        Digit::Four => Some(vocab::FOUR),
        Digit::Five => Some(vocab::FIVE),
        Digit::Six => Some(vocab::SIX),
        Digit::Seven => Some(vocab::SEVEN),
        Digit::Eight => Some(vocab::EIGHT),
        Digit::Nine => Some(vocab::NINE),
    }
}

/// Whether the place word follows this digit.
///
/// Non-zero digits always carry their place word. A zero carries one only
/// on a block boundary after something has been spoken, so that an empty
/// interior block still contributes its ล้าน.
fn takes_place_word(digit: Digit, position: Position, last: Lookback) -> bool {
    !digit.is_zero() || (position.class == PlaceClass::Million && last != Lookback::Initial)
}

/// Spells out a non-negative integer given as its digits.
///
/// Leading zeros are insignificant. An empty slice yields an empty string.
///
/// # Examples
///
/// ```
/// use bahttext::digits::digits_of;
/// use bahttext::transliterate::spell;
///
/// assert_eq!(spell(&digits_of(21)), "ยี่สิบเอ็ด");
/// ```
pub fn spell(digits: &[Digit]) -> String {
    let len = digits.len();
    let (text, _) = digits.iter().enumerate().fold(
        (String::new(), Lookback::Initial),
        |(mut text, mut last), (index, &digit)| {
            let position = Position::in_sequence(index, len);

            if let Some(word) = digit_word(digit, position, last) {
                text.push_str(word);
                last = Lookback::AfterOther;
            }

            if takes_place_word(digit, position, last) {
                if let Some(word) = position.place_word() {
                    text.push_str(word);
                    last = Lookback::after_place(position.class);
                }
            }

            (text, last)
        },
    );
    text
}

/// Spells out a string of ASCII digits of any length.
pub fn spell_digits(text: &str) -> Result<String> {
    let digits = parse_digits(text)?;
    Ok(spell(&digits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digits::digits_of;

    fn spell_u(value: u128) -> String {
        spell(&digits_of(value))
    }

    #[test]
    fn test_zero() {
        assert_eq!(spell_u(0), "ศูนย์");
    }

    #[test]
    fn test_ten_has_no_leading_one() {
        assert_eq!(spell_u(10), "สิบ");
        assert_eq!(spell_u(110), "หนึ่งร้อยสิบ");
    }

    #[test]
    fn test_connective_one_after_ten_and_hundred() {
        assert_eq!(spell_u(11), "สิบเอ็ด");
        assert_eq!(spell_u(101), "หนึ่งร้อยเอ็ด");
        assert_eq!(spell_u(1001), "หนึ่งพันหนึ่ง");
        assert_eq!(spell_u(1), "หนึ่ง");
    }

    #[test]
    fn test_twenty_variant() {
        assert_eq!(spell_u(20), "ยี่สิบ");
        assert_eq!(spell_u(21), "ยี่สิบเอ็ด");
        assert_eq!(spell_u(22), "ยี่สิบสอง");
        assert_eq!(spell_u(200), "สองร้อย");
    }

    #[test]
    fn test_connective_one_before_million() {
        assert_eq!(spell_u(11_000_000), "สิบเอ็ดล้าน");
        assert_eq!(spell_u(101_000_000), "หนึ่งร้อยเอ็ดล้าน");
    }

    #[test]
    fn test_million_compounds_per_block() {
        assert_eq!(spell_u(1_000_000_000_000), "หนึ่งล้านล้าน");
        assert_eq!(spell_u(1_000_000_000_001), "หนึ่งล้านล้านหนึ่ง");
        assert_eq!(spell_u(1_000_000_000_000_000_000), "หนึ่งล้านล้านล้าน");
    }

    #[test]
    fn test_leading_zeros_are_absorbed() {
        assert_eq!(spell_digits("000123").unwrap(), spell_u(123));
        assert_eq!(spell_digits("0000001").unwrap(), "หนึ่ง");
        assert_eq!(spell_digits("0000000").unwrap(), "ศูนย์");
        assert_eq!(spell_digits("00").unwrap(), "ศูนย์");
    }

    #[test]
    fn test_beyond_native_integers() {
        let text = spell_digits(&format!("1{}", "0".repeat(42))).unwrap();
        assert_eq!(text, format!("หนึ่ง{}", "ล้าน".repeat(7)));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(spell(&[]), "");
    }
}
