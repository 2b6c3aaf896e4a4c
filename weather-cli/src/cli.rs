use std::process::ExitCode;

use berlin_weather_core::{
    BERLIN, Config, FetchError, ReqwestTransport, TimeoutConfig, WeatherFetcher,
    WeatherObservation,
};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use inquire::{CustomType, Text};

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "berlin-weather",
    version,
    about = "Latest Bright Sky weather observation for Berlin"
)]
pub struct Cli {
    /// Log request details to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand, PartialEq)]
pub enum Command {
    /// Fetch and print the latest observation (the default).
    Show {
        /// Day to query as YYYY-MM-DD; defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Interactively edit endpoint, user agent and timeouts.
    Configure,

    /// Print where the config file lives.
    ConfigPath,
}

impl Cli {
    pub async fn run(self) -> ExitCode {
        match self.command.unwrap_or(Command::Show { date: None }) {
            Command::Show { date } => show(date).await,
            Command::Configure => finish(configure()),
            Command::ConfigPath => finish(
                Config::config_file_path().map(|path| println!("{}", path.display())),
            ),
        }
    }
}

/// Exit status after a failed parse: 0 for `--help`/`--version`, 1 for usage errors.
pub fn usage_exit_status(err: &clap::Error) -> u8 {
    if err.use_stderr() { 1 } else { 0 }
}

async fn show(date: Option<NaiveDate>) -> ExitCode {
    let date = date.unwrap_or_else(|| Local::now().date_naive());

    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => return finish(Err(err)),
    };

    match fetch(&config, date).await {
        Ok(obs) => {
            print!("{}", output::render(&BERLIN, date, &obs));
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(error = ?err, "fetch failed");
            eprintln!("{}", output::failure_line(&err));
            ExitCode::from(output::exit_status(&err))
        }
    }
}

/// The transport lives only for this call and is dropped on every return path.
async fn fetch(config: &Config, date: NaiveDate) -> Result<WeatherObservation, FetchError> {
    let transport = ReqwestTransport::new(config.timeouts(), &config.user_agent)?;
    let fetcher = WeatherFetcher::with_endpoint(transport, config.endpoint.as_str());
    fetcher.fetch(&BERLIN, date).await
}

fn configure() -> anyhow::Result<()> {
    let current = Config::load()?;

    let endpoint = Text::new("Bright Sky endpoint:")
        .with_default(&current.endpoint)
        .prompt()?;
    let user_agent = Text::new("User-Agent header:")
        .with_default(&current.user_agent)
        .prompt()?;
    let connect_ms = CustomType::<u64>::new("Connect timeout (ms):")
        .with_default(current.timeouts.connect_ms)
        .with_error_message("Please enter a whole number of milliseconds")
        .prompt()?;
    let total_ms = CustomType::<u64>::new("Total request timeout (ms):")
        .with_default(current.timeouts.total_ms)
        .with_error_message("Please enter a whole number of milliseconds")
        .prompt()?;

    let config = Config {
        endpoint,
        user_agent,
        timeouts: TimeoutConfig {
            connect_ms,
            total_ms,
        },
    };
    config.validate()?;
    config.save()?;

    println!(
        "Saved configuration to {}",
        Config::config_file_path()?.display()
    );
    Ok(())
}

fn finish(result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
