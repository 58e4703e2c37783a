use clap::{Parser, Subcommand};
use std::process;
use tracing::{error, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Derive the grid and touching combos for one 3-digit number
    Run(cmd::run::RunArgs),
    /// Run every input from 000 to 999 and summarize the combo counts
    Sweep(cmd::sweep::SweepArgs),
}

fn main() {
    let cli = Cli::parse();

    // stdout carries only the requested output; logs go to stderr.
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Run(args) => cmd::run::run(args),
        Commands::Sweep(args) => cmd::sweep::run(args),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
