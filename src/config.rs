use clap::Args;
use std::path::PathBuf;
use strum_macros::{Display, EnumIter, EnumString};

/// How a single run is written to stdout.
#[derive(Debug, Clone, Copy, Default, EnumIter, EnumString, Display, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum OutputFormat {
    /// Plain-text report
    #[default]
    Report,
    /// Boxed tables for the derived numbers, grid and count
    Table,
    /// Pretty-printed JSON record
    Json,
    /// Space-joined combos only
    Combos,
}

#[derive(Args, Debug, Clone, Default)]
pub struct OutputParams {
    #[arg(short, long, default_value_t = OutputFormat::Report)]
    pub format: OutputFormat,
}

#[derive(Args, Debug, Clone)]
pub struct SweepParams {
    /// Worker threads (defaults to rayon's global pool)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// Write one CSV row per input here ("-" for stdout)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    #[arg(long, default_value_t = 5)]
    pub top: usize,
}

impl Default for SweepParams {
    fn default() -> Self {
        Self {
            threads: None,
            out: None,
            top: 5,
        }
    }
}
