use pick3grid::sweep::{summarize, sweep_all, write_csv, SweepRow};
use std::fs;

#[test]
fn test_sweep_covers_every_input_in_order() {
    let rows = sweep_all(None).unwrap();
    assert_eq!(rows.len(), 1000);
    assert_eq!(rows[0].input, "000");
    assert_eq!(rows[123].input, "123");
    assert_eq!(rows[123].count, 127);
    assert_eq!(rows[999].input, "999");
}

#[test]
fn test_thread_count_does_not_change_result() {
    let single = sweep_all(Some(1)).unwrap();
    let many = sweep_all(Some(4)).unwrap();
    assert_eq!(single, many);
}

#[test]
fn test_summary() {
    let rows = vec![
        row("001", 20),
        row("002", 40),
        row("003", 40),
        row("004", 10),
    ];
    let s = summarize(&rows, 2);

    assert_eq!(s.inputs, 4);
    assert_eq!(s.min_count, 10);
    assert_eq!(s.max_count, 40);
    assert!((s.mean_count - 27.5).abs() < 1e-9);
    assert_eq!(s.top, vec![("002".to_string(), 40), ("003".to_string(), 40)]);
}

#[test]
fn test_summary_empty() {
    let s = summarize(&[], 5);
    assert_eq!(s.inputs, 0);
    assert_eq!(s.mean_count, 0.0);
    assert!(s.top.is_empty());
}

#[test]
fn test_csv_export() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("sweep.csv");

    let rows = vec![row("007", 17), row("123", 127)];
    write_csv(&rows, fs::File::create(&path).unwrap()).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "input,mirror,flip_below,flip_above,count");
    assert_eq!(lines[1], "007,m,b,a,17");
    assert_eq!(lines.len(), 3);
}

fn row(input: &str, count: usize) -> SweepRow {
    SweepRow {
        input: input.to_string(),
        mirror: "m".to_string(),
        flip_below: "b".to_string(),
        flip_above: "a".to_string(),
        count,
    }
}
