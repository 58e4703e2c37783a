use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use pick3grid::api::ResultRecord;
use pick3grid::derive::Derivation;
use pick3grid::grid::Grid;
use pick3grid::sweep::SweepSummary;
use strum::IntoEnumIterator;

pub fn print_record(r: &ResultRecord) {
    println!("\nInput: {}", r.input);
    print_derived(r);
    print_grid(&r.grid);

    println!("\nCombos ({}):", r.count);
    println!("{}", r.combos_joined());
}

fn print_derived(r: &ResultRecord) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.set_header(
        Derivation::iter()
            .map(|d| Cell::new(d.label()).add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );
    table.add_row(
        Derivation::iter()
            .map(|d| Cell::new(r.derived(d)).set_alignment(CellAlignment::Center))
            .collect::<Vec<_>>(),
    );
    println!("{}", table);
}

pub fn print_grid(grid: &Grid) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    for (row, label) in grid.rows().iter().zip(Derivation::iter()) {
        let mut cells = vec![Cell::new(label.label()).fg(Color::Cyan)];
        cells.extend(
            row.iter()
                .map(|ch| Cell::new(ch).set_alignment(CellAlignment::Center)),
        );
        table.add_row(cells);
    }
    println!("{}", table);
}

pub fn print_sweep_summary(s: &SweepSummary) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Inputs").add_attribute(Attribute::Bold),
        Cell::new("Min").fg(Color::Red),
        Cell::new("Max").fg(Color::Green),
        Cell::new("Mean").fg(Color::Cyan),
    ]);
    table.add_row(vec![
        Cell::new(s.inputs),
        Cell::new(s.min_count),
        Cell::new(s.max_count),
        Cell::new(format!("{:.2}", s.mean_count)),
    ]);
    for i in 0..4 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
    println!("\n📊 === SWEEP SUMMARY === 📊");
    println!("{}", table);

    if s.top.is_empty() {
        return;
    }

    let mut top = Table::new();
    top.load_preset(ASCII_FULL);
    top.set_header(vec![
        Cell::new("Rank"),
        Cell::new("Input").add_attribute(Attribute::Bold),
        Cell::new("Combos").fg(Color::Green),
    ]);
    for (i, (input, count)) in s.top.iter().enumerate() {
        top.add_row(vec![
            Cell::new(i + 1),
            Cell::new(input),
            Cell::new(count).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("\n🏆 Most combos:");
    println!("{}", top);
}
