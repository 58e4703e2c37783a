use crate::reports;
use clap::Args;
use pick3grid::api::run_system;
use pick3grid::config::{OutputFormat, OutputParams};
use pick3grid::error::P3Result;
use pick3grid::report::make_report;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Candidate number, exactly three digits (000-999)
    #[arg(allow_hyphen_values = true)]
    pub number: String,

    #[command(flatten)]
    pub output: OutputParams,
}

pub fn run(args: RunArgs) -> P3Result<()> {
    let record = run_system(&args.number)?;

    match args.output.format {
        OutputFormat::Report => println!("{}", make_report(&record)),
        OutputFormat::Table => reports::print_record(&record),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&record)?),
        OutputFormat::Combos => println!("{}", record.combos_joined()),
    }

    info!("{}", record.status_line());
    Ok(())
}
