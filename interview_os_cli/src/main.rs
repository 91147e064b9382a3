//! `technotes` - browse, check and export the Interview OS catalog.

mod cli;
mod commands;
mod error;
mod logging;

use std::io;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use interview_os::{Aggregator, Settings};
use log::{error, info};

use crate::cli::Cli;
use crate::commands::Outcome;
use crate::error::CliError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(Outcome::Success) => ExitCode::SUCCESS,
        Ok(Outcome::IssuesFound) => ExitCode::from(1),
        Err(err) => {
            error!("{err}");
            eprintln!("technotes: {err}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<Outcome, CliError> {
    let command = cli.command.normalized();
    let settings = Settings::load(cli.config.as_deref(), Path::new("."))?;
    let env_level = std::env::var(logging::LOG_ENV_VAR).ok();
    let level = logging::effective_level(&settings.logging.level, env_level.as_deref())?;
    let _logger = logging::init_logging(level)?;

    info!(
        "technotes {} command={:?} level={}",
        env!("CARGO_PKG_VERSION"),
        command,
        level
    );

    let aggregator = Aggregator::new(settings.aggregator.clone());
    let data = commands::catalog_for(&command, &aggregator)?;
    let mut stdout = io::stdout().lock();
    commands::execute(&command, &data, &settings, &mut stdout)
}
