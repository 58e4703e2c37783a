//! The fixed 3×3 lattice and its 8-directional adjacency.

use serde::{Deserialize, Serialize};

pub const GRID_SIZE: usize = 3;

const NEIGHBORS_8: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// All nine cells in row-major order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..GRID_SIZE).flat_map(|row| (0..GRID_SIZE).map(move |col| Cell::new(row, col)))
    }

    /// Chebyshev distance of exactly 1. A cell never touches itself.
    pub fn touches(&self, other: &Cell) -> bool {
        self != other && self.row.abs_diff(other.row) <= 1 && self.col.abs_diff(other.col) <= 1
    }

    /// In-bounds neighbours, in the fixed NW..SE order.
    pub fn neighbors(self) -> impl Iterator<Item = Cell> {
        NEIGHBORS_8.into_iter().filter_map(move |(dr, dc)| {
            let row = self.row.checked_add_signed(dr)?;
            let col = self.col.checked_add_signed(dc)?;
            (row < GRID_SIZE && col < GRID_SIZE).then_some(Cell::new(row, col))
        })
    }
}

/// Digit characters laid out with row 0 = Mirror, row 1 = Flip↓, row 2 = Flip↑.
///
/// Built once per run and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    cells: [[char; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// Rows must each be three characters long; this is not re-checked.
    pub fn build(top: &str, middle: &str, bottom: &str) -> Self {
        Self {
            cells: [split_row(top), split_row(middle), split_row(bottom)],
        }
    }

    pub fn get(&self, cell: Cell) -> char {
        self.cells[cell.row][cell.col]
    }

    pub fn rows(&self) -> &[[char; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    pub fn row_joined(&self, row: usize) -> String {
        self.cells[row]
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn split_row(s: &str) -> [char; GRID_SIZE] {
    debug_assert_eq!(s.chars().count(), GRID_SIZE, "grid row '{}' is not 3 chars", s);
    let mut row = [' '; GRID_SIZE];
    for (slot, ch) in row.iter_mut().zip(s.chars()) {
        *slot = ch;
    }
    row
}
