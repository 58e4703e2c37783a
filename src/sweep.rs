//! Runs the generator over every input from `000` to `999`.

use crate::api::{run_system, ResultRecord};
use crate::digits::ThreeDigitNumber;
use crate::error::{P3Result, Pick3Error};
use rayon::prelude::*;
use serde::Serialize;
use std::io::Write;
use tracing::info;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SweepRow {
    pub input: String,
    pub mirror: String,
    pub flip_below: String,
    pub flip_above: String,
    pub count: usize,
}

impl From<ResultRecord> for SweepRow {
    fn from(r: ResultRecord) -> Self {
        Self {
            input: r.input,
            mirror: r.mirror,
            flip_below: r.flip_below,
            flip_above: r.flip_above,
            count: r.count,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SweepSummary {
    pub inputs: usize,
    pub min_count: usize,
    pub max_count: usize,
    pub mean_count: f64,
    /// Highest counts first; ties keep input order.
    pub top: Vec<(String, usize)>,
}

/// One row per input, in ascending input order regardless of thread count.
///
/// `threads = None` uses rayon's global pool.
pub fn sweep_all(threads: Option<usize>) -> P3Result<Vec<SweepRow>> {
    let inputs: Vec<String> = ThreeDigitNumber::all().map(|n| n.to_string()).collect();

    let work = || -> P3Result<Vec<SweepRow>> {
        inputs
            .par_iter()
            .map(|s| run_system(s).map(SweepRow::from).map_err(Pick3Error::from))
            .collect()
    };

    let rows = match threads {
        Some(n) => {
            info!("🔥 Sweeping {} inputs on {} threads", inputs.len(), n);
            let pool = rayon::ThreadPoolBuilder::new().num_threads(n).build()?;
            pool.install(work)?
        }
        None => {
            info!(
                "🔥 Sweeping {} inputs on {} threads",
                inputs.len(),
                rayon::current_num_threads()
            );
            work()?
        }
    };

    Ok(rows)
}

pub fn summarize(rows: &[SweepRow], top_n: usize) -> SweepSummary {
    let counts = rows.iter().map(|r| r.count);
    let total: usize = counts.clone().sum();

    let mut ranked: Vec<(String, usize)> =
        rows.iter().map(|r| (r.input.clone(), r.count)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(top_n);

    SweepSummary {
        inputs: rows.len(),
        min_count: counts.clone().min().unwrap_or(0),
        max_count: counts.max().unwrap_or(0),
        mean_count: if rows.is_empty() {
            0.0
        } else {
            total as f64 / rows.len() as f64
        },
        top: ranked,
    }
}

pub fn write_csv<W: Write>(rows: &[SweepRow], writer: W) -> P3Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
