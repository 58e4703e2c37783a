use crate::reports;
use clap::Args;
use pick3grid::config::SweepParams;
use pick3grid::error::P3Result;
use pick3grid::sweep::{summarize, sweep_all, write_csv};
use std::fs::File;
use std::io;
use std::time::Instant;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SweepArgs {
    #[command(flatten)]
    pub params: SweepParams,
}

pub fn run(args: SweepArgs) -> P3Result<()> {
    let start = Instant::now();
    let rows = sweep_all(args.params.threads)?;
    info!("✅ Swept {} inputs in {:.2?}", rows.len(), start.elapsed());

    match args.params.out.as_deref() {
        Some(path) if path.as_os_str() == "-" => write_csv(&rows, io::stdout().lock())?,
        Some(path) => {
            write_csv(&rows, File::create(path)?)?;
            info!("📄 Wrote {}", path.display());
        }
        None => {}
    }

    // Keep stdout clean for piping when the CSV goes there.
    let to_stdout = args.params.out.as_deref().is_some_and(|p| p.as_os_str() == "-");
    if !to_stdout {
        reports::print_sweep_summary(&summarize(&rows, args.params.top));
    }
    Ok(())
}
