pub mod api;
pub mod combos;
pub mod config;
pub mod derive;
pub mod digits;
pub mod error;
pub mod grid;
pub mod report;
pub mod sweep;
// cmd and reports belong to the binary (main.rs); they only print.
