//! Subcommand execution.

use crate::cli::{Cli, Command};
use crate::config::resolve_config_path;
use crate::error::CliError;

use common::ErrorLocation;

use registrar_core::{FileSource, RegistrarClient, RemoteInvoker};

use models::{Contact, ContactUpdate};

use std::io::{Write, stdout};
use std::path::Path;

use log::info;
use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Serialize)]
struct Created<'a> {
    #[serde(rename = "idContact")]
    id: &'a str,
}

/// Connect with the command line's credentials and run its subcommand.
///
/// Results are written to stdout as JSON. The session is closed before returning.
pub fn run(cli: &Cli) -> Result<(), CliError> {
    let config = resolve_config_path(cli.config.as_deref())?;
    let source = FileSource::new(config);
    info!("Using credential file {}", source.path().display());

    let mut client =
        RegistrarClient::connect(cli.identity.as_deref(), cli.secret.as_deref(), &source)?;

    let mut out = stdout().lock();
    let result = execute(&mut client, &cli.command, &mut out);
    client.close();
    result
}

/// Run one subcommand against `client`, writing its result to `out`.
pub fn execute<I: RemoteInvoker>(
    client: &mut RegistrarClient<I>,
    command: &Command,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    match command {
        Command::Login => {
            client.session_open()?;
            info!("Credentials accepted");
            write_line(out, "ok")
        }
        Command::Info { id } => {
            let snapshot = client.contact_info(id)?;
            write_json(out, &snapshot)
        }
        Command::Create { file } => {
            let contact: Contact = read_json(file)?;
            let id = client.contact_create(&contact)?;
            write_json(out, &Created { id: &id })
        }
        Command::Update { id, file, owner } => {
            let update: ContactUpdate = read_json(file)?;
            let status = if *owner {
                client.contact_owner_update(id, &update)?
            } else {
                client.contact_update(id, &update)?
            };
            write_json(out, &status)
        }
        Command::Delete { id } => {
            let status = client.contact_delete(id)?;
            write_json(out, &status)
        }
    }
}

#[track_caller]
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let contents = std::fs::read_to_string(path).map_err(|e| CliError::Input {
        message: format!("Failed to read {}: {e}", path.display()),
        location: ErrorLocation::from(std::panic::Location::caller()),
    })?;

    serde_json::from_str(&contents).map_err(|e| CliError::Input {
        message: format!("Invalid JSON in {}: {e}", path.display()),
        location: ErrorLocation::from(std::panic::Location::caller()),
    })
}

#[track_caller]
fn write_json<T: Serialize>(out: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let text = serde_json::to_string_pretty(value).map_err(|e| CliError::Output {
        message: format!("Failed to encode result: {e}"),
        location: ErrorLocation::from(std::panic::Location::caller()),
    })?;
    write_line(out, &text)
}

#[track_caller]
fn write_line(out: &mut dyn Write, text: &str) -> Result<(), CliError> {
    writeln!(out, "{text}").map_err(|e| CliError::Output {
        message: format!("Failed to write result: {e}"),
        location: ErrorLocation::from(std::panic::Location::caller()),
    })
}
