use common::ErrorLocation;

use registrar_core::{ErrorKind, RegistrarError};

use thiserror::Error;

/// Errors that end a CLI run.
///
/// Registrar errors keep their own structure and location; everything else is
/// raised here with the location of the failing step.
#[derive(Debug, Error)]
pub enum CliError {
    /// Error from the registrar client
    #[error(transparent)]
    Registrar(#[from] RegistrarError),

    /// Unreadable or malformed input file
    #[error("Input Error: {message} {location}")]
    Input {
        message: String,
        location: ErrorLocation,
    },

    /// Writing results failed
    #[error("Output Error: {message} {location}")]
    Output {
        message: String,
        location: ErrorLocation,
    },

    /// Logger could not be set up
    #[error("Logger Error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    /// Process exit status for this error.
    ///
    /// 2 for problems fixable locally (configuration, credentials, input),
    /// 3 for refused authentication, 4 for not-found, 1 for everything else.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Registrar(e) if e.is_not_found() => 4,
            CliError::Registrar(e) if e.kind() == ErrorKind::AuthenticationFailed => 3,
            CliError::Registrar(e) if e.is_local() => 2,
            CliError::Input { .. } => 2,
            _ => 1,
        }
    }
}
