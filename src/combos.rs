//! Touching-combination enumeration over a [`Grid`].
//!
//! A combo is read off a walk of three distinct cells where each step moves to
//! a touching cell (diagonals included). The first and last cell do not have
//! to touch each other.

use crate::grid::{Cell, Grid};
use std::collections::HashSet;

pub const COMBO_LEN: usize = 3;

/// Number of valid walks on a 3×3 grid, independent of its contents.
pub const TOUCHING_PATH_COUNT: usize = 160;

pub type Path = [Cell; COMBO_LEN];

/// Every walk `c0 -> c1 -> c2` with no cell reused, in a fixed order.
pub fn touching_paths() -> impl Iterator<Item = Path> {
    Cell::all().flat_map(|c0| {
        c0.neighbors().flat_map(move |c1| {
            c1.neighbors()
                .filter(move |&c2| c2 != c0 && c2 != c1)
                .map(move |c2| [c0, c1, c2])
        })
    })
}

pub fn read_path(grid: &Grid, path: &Path) -> String {
    path.iter().map(|&cell| grid.get(cell)).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enumeration {
    /// Distinct combos, ascending by numeric value.
    pub combos: Vec<String>,
    /// Walks evaluated before deduplication.
    pub paths: usize,
}

pub fn enumerate(grid: &Grid) -> Enumeration {
    let mut seen: HashSet<String> = HashSet::new();
    let mut paths = 0;

    for path in touching_paths() {
        paths += 1;
        seen.insert(read_path(grid, &path));
    }

    let mut combos: Vec<String> = seen.into_iter().collect();
    sort_numeric(&mut combos);

    Enumeration { combos, paths }
}

pub fn touching_combos(grid: &Grid) -> Vec<String> {
    enumerate(grid).combos
}

/// Orders by numeric value ("007" < "019" < "090"). Non-numeric strings sort
/// first, then lexicographically, so the order stays total.
pub fn sort_numeric(combos: &mut [String]) {
    combos.sort_by(|a, b| {
        numeric_value(a)
            .cmp(&numeric_value(b))
            .then_with(|| a.cmp(b))
    });
}

fn numeric_value(s: &str) -> Option<u32> {
    s.parse().ok()
}
