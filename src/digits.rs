//! Digit and place-value enumerations.
//!
//! Both domains are small and closed, so every lookup is an exhaustive
//! `match` rather than a table indexed by raw integers.

use crate::error::{BahtTextError, Result};
use crate::vocab;

/// A single decimal digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Digit {
    Zero,
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
}

impl Digit {
    /// All digits, indexed by value.
    pub const ALL: [Digit; 10] = [
        Digit::Zero,
        Digit::One,
        Digit::Two,
        Digit::Three,
        Digit::Four,
        Digit::Five,
        Digit::Six,
        Digit::Seven,
        Digit::Eight,
        Digit::Nine,
    ];

    /// Converts an ASCII digit character.
    pub fn from_char(ch: char) -> Option<Digit> {
        ch.to_digit(10).map(|value| Digit::ALL[value as usize])
    }

    /// Numeric value, `0..=9`.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Returns `true` for `Digit::Zero`.
    pub fn is_zero(self) -> bool {
        self == Digit::Zero
    }
}

/// Returns the decimal digits of `value`, most significant first.
///
/// Zero yields a single `Digit::Zero`.
pub fn digits_of(mut value: u128) -> Vec<Digit> {
    let mut digits = Vec::new();
    loop {
        digits.push(Digit::ALL[(value % 10) as usize]);
        value /= 10;
        if value == 0 {
            break;
        }
    }
    digits.reverse();
    digits
}

/// Parses a string of ASCII digits, e.g. `"000123"`.
pub fn parse_digits(text: &str) -> Result<Vec<Digit>> {
    text.chars()
        .enumerate()
        .map(|(position, ch)| {
            Digit::from_char(ch).ok_or(BahtTextError::InvalidDigit { ch, position })
        })
        .collect()
}

/// A digit's place within its six-digit block (`power % 6`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceClass {
    /// Ones position of a block; reads as "million" above the lowest block.
    Million,
    Ten,
    Hundred,
    Thousand,
    TenThousand,
    HundredThousand,
}

impl PlaceClass {
    const BY_OFFSET: [PlaceClass; 6] = [
        PlaceClass::Million,
        PlaceClass::Ten,
        PlaceClass::Hundred,
        PlaceClass::Thousand,
        PlaceClass::TenThousand,
        PlaceClass::HundredThousand,
    ];

    /// Classifies a power of ten.
    pub fn of_power(power: usize) -> PlaceClass {
        Self::BY_OFFSET[power % 6]
    }

    /// The place-value word for this class.
    pub fn word(self) -> &'static str {
        match self {
            PlaceClass::Million => vocab::MILLION,
            PlaceClass::Ten => vocab::TEN,
            PlaceClass::Hundred => vocab::HUNDRED,
            PlaceClass::Thousand => vocab::THOUSAND,
            PlaceClass::TenThousand => vocab::TEN_THOUSAND,
            PlaceClass::HundredThousand => vocab::HUNDRED_THOUSAND,
        }
    }
}

/// Position of a digit within a digit sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Power of ten, counted from the right (ones place is 0).
    pub power: usize,
    pub class: PlaceClass,
}

impl Position {
    pub fn new(power: usize) -> Self {
        Position {
            power,
            class: PlaceClass::of_power(power),
        }
    }

    /// Position of the digit at `index` in a sequence of `len` digits.
    pub fn in_sequence(index: usize, len: usize) -> Self {
        Position::new(len - index - 1)
    }

    pub fn is_ones(self) -> bool {
        self.power == 0
    }

    /// The place-value word, or `None` for the ones position.
    pub fn place_word(self) -> Option<&'static str> {
        if self.is_ones() {
            None
        } else {
            Some(self.class.word())
        }
    }
}
