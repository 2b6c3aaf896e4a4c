//! Binary crate for the `berlin-weather` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration
//! - Human-friendly output formatting and exit codes

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod output;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cmd = match cli::Cli::try_parse() {
        Ok(cmd) => cmd,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(cli::usage_exit_status(&err));
        }
    };
    init_tracing(cmd.verbose);
    cmd.run().await
}

/// Logs go to stderr so stdout only ever carries the report.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "berlin_weather=debug,berlin_weather_core=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
