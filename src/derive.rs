use crate::digits::ThreeDigitNumber;
use crate::error::InvalidInputError;
use strum_macros::{Display, EnumIter, EnumString};

/// The three fixed per-digit shifts that produce the grid rows.
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum Derivation {
    Mirror,
    FlipBelow,
    FlipAbove,
}

impl Derivation {
    pub fn offset(&self) -> i32 {
        match self {
            Self::Mirror => 5,
            Self::FlipBelow => 3,
            Self::FlipAbove => -3,
        }
    }

    /// Human-facing label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Mirror => "Mirror",
            Self::FlipBelow => "Flip↓",
            Self::FlipAbove => "Flip↑",
        }
    }

    pub fn apply(&self, n: &ThreeDigitNumber) -> ThreeDigitNumber {
        n.shifted(self.offset())
    }

    /// Validates `raw` on its own and returns the derived number as text.
    pub fn derive(&self, raw: &str) -> Result<String, InvalidInputError> {
        let n = ThreeDigitNumber::parse(raw)?;
        Ok(self.apply(&n).to_string())
    }
}

pub fn mirror_number(raw: &str) -> Result<String, InvalidInputError> {
    Derivation::Mirror.derive(raw)
}

pub fn flip_below(raw: &str) -> Result<String, InvalidInputError> {
    Derivation::FlipBelow.derive(raw)
}

pub fn flip_above(raw: &str) -> Result<String, InvalidInputError> {
    Derivation::FlipAbove.derive(raw)
}
