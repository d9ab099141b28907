//! block-strip CLI
//!
//! Removes delimited text blocks from a document by ordinal.

mod cli;
mod error;
mod strip;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::Cli;
use error::Result;
use strip::StripJob;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: &Cli) -> Result<()> {
    let job = StripJob::from_cli(cli)?;
    job.run()?;
    Ok(())
}

/// Logs always go to stderr; stdout may be carrying the result.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("{}: failed to set tracing subscriber", "warning".yellow().bold());
    }
    tracing::debug!("Verbose mode enabled");
}
