use pick3grid::grid::{Cell, Grid, GRID_SIZE};
use rstest::rstest;

#[rstest]
#[case(Cell::new(1, 1), 8)] // centre
#[case(Cell::new(0, 0), 3)] // corner
#[case(Cell::new(2, 2), 3)]
#[case(Cell::new(0, 1), 5)] // edge
#[case(Cell::new(1, 0), 5)]
fn test_neighbor_counts(#[case] cell: Cell, #[case] expected: usize) {
    assert_eq!(cell.neighbors().count(), expected);
}

#[rstest]
#[case(Cell::new(0, 0), Cell::new(1, 1), true)] // diagonal
#[case(Cell::new(0, 0), Cell::new(0, 1), true)]
#[case(Cell::new(2, 1), Cell::new(1, 1), true)]
#[case(Cell::new(0, 0), Cell::new(0, 2), false)] // two columns apart
#[case(Cell::new(0, 0), Cell::new(2, 2), false)]
#[case(Cell::new(1, 1), Cell::new(1, 1), false)] // same cell
fn test_touches(#[case] a: Cell, #[case] b: Cell, #[case] expected: bool) {
    assert_eq!(a.touches(&b), expected);
    assert_eq!(b.touches(&a), expected);
}

#[test]
fn test_neighbors_agree_with_touches() {
    for a in Cell::all() {
        let from_neighbors: Vec<Cell> = a.neighbors().collect();
        let from_touches: Vec<Cell> = Cell::all().filter(|b| a.touches(b)).collect();
        assert_eq!(from_neighbors, from_touches, "mismatch at {:?}", a);
    }
}

#[test]
fn test_cells_row_major() {
    let cells: Vec<Cell> = Cell::all().collect();
    assert_eq!(cells.len(), GRID_SIZE * GRID_SIZE);
    assert_eq!(cells[0], Cell::new(0, 0));
    assert_eq!(cells[5], Cell::new(1, 2));
    assert_eq!(cells[8], Cell::new(2, 2));
}

#[test]
fn test_grid_rows_follow_inputs() {
    let grid = Grid::build("678", "456", "890");
    assert_eq!(
        grid.rows(),
        &[['6', '7', '8'], ['4', '5', '6'], ['8', '9', '0']]
    );
    assert_eq!(grid.get(Cell::new(2, 2)), '0');
    assert_eq!(grid.row_joined(1), "4 5 6");
}

#[test]
fn test_grid_serializes_as_nested_strings() {
    let grid = Grid::build("678", "456", "890");
    let json = serde_json::to_string(&grid).unwrap();
    assert_eq!(json, r#"[["6","7","8"],["4","5","6"],["8","9","0"]]"#);

    let back: Grid = serde_json::from_str(&json).unwrap();
    assert_eq!(back, grid);
}
