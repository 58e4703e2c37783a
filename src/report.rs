use crate::api::ResultRecord;
use crate::derive::Derivation;
use crate::grid::GRID_SIZE;

/// Plain-text report meant for pasting elsewhere. No trailing newline.
pub fn make_report(r: &ResultRecord) -> String {
    let mut lines = vec![
        format!("Input: {}", r.input),
        format!("{}: {}", Derivation::Mirror.label(), r.mirror),
        // Flip labels are padded so the values line up under Mirror's.
        format!("{}:  {}", Derivation::FlipBelow.label(), r.flip_below),
        format!("{}:  {}", Derivation::FlipAbove.label(), r.flip_above),
        String::new(),
        "Grid:".to_string(),
    ];

    lines.extend((0..GRID_SIZE).map(|row| r.grid.row_joined(row)));

    lines.extend([
        String::new(),
        format!("Combos count: {}", r.count),
        "Combos:".to_string(),
        r.combos_joined(),
    ]);

    lines.join("\n")
}
