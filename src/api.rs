use crate::combos;
use crate::derive::{flip_above, flip_below, mirror_number, Derivation};
use crate::digits::ThreeDigitNumber;
use crate::error::InvalidInputError;
use crate::grid::Grid;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::debug;

/// Everything one run produces. Returned by value to whoever renders it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    pub input: String,
    pub mirror: String,
    pub flip_below: String,
    pub flip_above: String,
    pub grid: Grid,
    pub combos: Vec<String>,
    pub count: usize,
}

impl ResultRecord {
    pub fn derived(&self, which: Derivation) -> &str {
        match which {
            Derivation::Mirror => &self.mirror,
            Derivation::FlipBelow => &self.flip_below,
            Derivation::FlipAbove => &self.flip_above,
        }
    }

    pub fn combos_joined(&self) -> String {
        self.combos.join(" ")
    }

    /// `Mirror: 678   Flip↓: 456   Flip↑: 890`
    pub fn derived_labels(&self) -> String {
        Derivation::iter()
            .map(|d| format!("{}: {}", d.label(), self.derived(d)))
            .collect::<Vec<_>>()
            .join("   ")
    }

    pub fn status_line(&self) -> String {
        format!("OK. Generated {} combos from {}.", self.count, self.input)
    }
}

/// Validates `raw`, derives the three rows, builds the grid and enumerates combos.
///
/// The only failure is an [`InvalidInputError`] from validation.
pub fn run_system(raw: &str) -> Result<ResultRecord, InvalidInputError> {
    let input = ThreeDigitNumber::parse(raw)?.to_string();

    let mirror = mirror_number(&input)?;
    let flip_below = flip_below(&input)?;
    let flip_above = flip_above(&input)?;

    let grid = Grid::build(&mirror, &flip_below, &flip_above);
    let enumeration = combos::enumerate(&grid);

    debug!(
        "{} -> {} / {} / {}: {} paths, {} unique combos",
        input,
        mirror,
        flip_below,
        flip_above,
        enumeration.paths,
        enumeration.combos.len()
    );

    let count = enumeration.combos.len();
    Ok(ResultRecord {
        input,
        mirror,
        flip_below,
        flip_above,
        grid,
        combos: enumeration.combos,
        count,
    })
}
