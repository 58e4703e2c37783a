use pick3grid::grid::Grid;
use std::collections::BTreeSet;

/// Index-based reference walk, written independently of `Cell::neighbors`.
pub fn brute_force_combos(grid: &Grid) -> Vec<String> {
    let rows = grid.rows();
    let mut found = BTreeSet::new();

    for a in 0..9usize {
        for b in 0..9usize {
            for c in 0..9usize {
                if a == b || b == c || a == c {
                    continue;
                }
                if !touching(a, b) || !touching(b, c) {
                    continue;
                }
                let s: String = [a, b, c].iter().map(|&i| rows[i / 3][i % 3]).collect();
                found.insert((s.parse::<u32>().unwrap(), s));
            }
        }
    }

    found.into_iter().map(|(_, s)| s).collect()
}

fn touching(a: usize, b: usize) -> bool {
    let (ra, ca) = ((a / 3) as i32, (a % 3) as i32);
    let (rb, cb) = ((b / 3) as i32, (b % 3) as i32);
    (ra - rb).abs() <= 1 && (ca - cb).abs() <= 1
}
