//! Digit arithmetic and input validation.
//!
//! A [`ThreeDigitNumber`] is the only way raw text enters the core. Leading
//! zeros are significant: `"007"` is valid and is not the same number as `"7"`.

use crate::error::InvalidInputError;
use std::fmt;
use std::str::FromStr;

/// A single decimal digit, always in `0..=9`.
pub type Digit = u8;

pub const DIGIT_COUNT: usize = 3;

/// Shifts a digit by `k` places around the 0-9 dial.
///
/// Uses the Euclidean remainder, so any `k` (including large negatives) lands in `0..=9`.
pub fn shift(d: Digit, k: i32) -> Digit {
    (i64::from(d) + i64::from(k)).rem_euclid(10) as Digit
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ThreeDigitNumber {
    digits: [Digit; DIGIT_COUNT],
}

impl ThreeDigitNumber {
    /// Trims `raw` and accepts it only if exactly three ASCII digits remain.
    pub fn parse(raw: &str) -> Result<Self, InvalidInputError> {
        let s = raw.trim();
        let bytes = s.as_bytes();

        if bytes.len() != DIGIT_COUNT || !bytes.iter().all(u8::is_ascii_digit) {
            return Err(InvalidInputError::new(raw));
        }

        let mut digits = [0; DIGIT_COUNT];
        for (slot, b) in digits.iter_mut().zip(bytes) {
            *slot = b - b'0';
        }
        Ok(Self { digits })
    }

    pub fn from_digits(digits: [Digit; DIGIT_COUNT]) -> Option<Self> {
        digits.iter().all(|&d| d <= 9).then_some(Self { digits })
    }

    /// Most significant digit first.
    pub fn digits(&self) -> [Digit; DIGIT_COUNT] {
        self.digits
    }

    pub fn value(&self) -> u16 {
        self.digits
            .iter()
            .fold(0u16, |acc, &d| acc * 10 + u16::from(d))
    }

    /// Applies [`shift`] to every digit.
    pub fn shifted(&self, k: i32) -> Self {
        Self {
            digits: self.digits.map(|d| shift(d, k)),
        }
    }

    /// Every number from `000` to `999`, in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0u16..1000).map(|n| Self {
            digits: [(n / 100) as Digit, (n / 10 % 10) as Digit, (n % 10) as Digit],
        })
    }
}

impl fmt::Display for ThreeDigitNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.digits;
        write!(f, "{}{}{}", a, b, c)
    }
}

impl FromStr for ThreeDigitNumber {
    type Err = InvalidInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
