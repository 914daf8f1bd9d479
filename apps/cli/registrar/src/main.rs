use registrar::cli::Cli;
use registrar::commands::run;
use registrar::error::CliError;
use registrar::logger::{initialize as LoggerInitialize, level_for};

use common::ErrorLocation;

use std::fs::create_dir_all;
use std::panic::Location;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, error};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = setup_logging(&cli) {
        eprintln!("{e}");
        return ExitCode::from(e.exit_code());
    }

    debug!("{:?}", cli.command);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn setup_logging(cli: &Cli) -> Result<(), CliError> {
    if let Some(log_dir) = &cli.log_dir {
        create_dir_all(log_dir).map_err(|e| CliError::Logger {
            message: format!("Failed to create log directory: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;
    }

    LoggerInitialize(level_for(cli.verbose), cli.log_dir.as_deref())
}
