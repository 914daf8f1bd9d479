//! Caller-visible error taxonomy.
//!
//! Every failure a client can report is a [`RegistrarError`]: a closed set of
//! kinds, each carrying the originating operation, a message and the source
//! location where it was raised. Raw transport faults ([`InvokeFault`]) only
//! become caller-visible through [`translate`].

pub mod invoke;
pub mod translate;

pub use invoke::InvokeFault;
pub use translate::{translate, translate_login};

use common::{ErrorLocation, HttpStatusCode};

use models::ModelError;

use std::fmt;

use thiserror::Error as ThisError;

/// Discriminant of [`RegistrarError`], for exhaustive matching without payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    ConfigMissing,
    ConfigInvalid,
    CredentialMissing,
    Validation,
    AuthenticationFailed,
    SessionFault,
    TransportFault,
    ApplicationFault,
}

/// Refinement of an application fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationFaultKind {
    /// The addressed resource does not exist.
    NotFound,
    /// Any other business-rule rejection.
    Rejected,
}

impl fmt::Display for ApplicationFaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "not found"),
            Self::Rejected => write!(f, "rejected"),
        }
    }
}

#[derive(Debug, ThisError)]
pub enum RegistrarError {
    #[error("Config Missing Error: {operation}: {message} {location}")]
    ConfigMissing {
        operation: &'static str,
        message: String,
        location: ErrorLocation,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Config Invalid Error: {operation}: {message} {location}")]
    ConfigInvalid {
        operation: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Credential Missing Error: {operation}: {message} {location}")]
    CredentialMissing {
        operation: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Validation Error: {operation}: {field}: {message} {location}")]
    Validation {
        operation: &'static str,
        field: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Authentication Failed Error: {operation}: {message} {location}")]
    AuthenticationFailed {
        operation: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Session Fault Error: {operation}: {message} {location}")]
    SessionFault {
        operation: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Transport Fault Error: {operation}: {message} {location}")]
    TransportFault {
        operation: &'static str,
        message: String,
        is_timeout: bool,
        is_connection: bool,
        status_code: Option<HttpStatusCode>,
        location: ErrorLocation,
    },

    #[error("Application Fault Error: {operation}: {kind} [{code}]: {message} {location}")]
    ApplicationFault {
        operation: &'static str,
        kind: ApplicationFaultKind,
        code: i64,
        message: String,
        location: ErrorLocation,
    },
}

impl RegistrarError {
    #[track_caller]
    pub fn config_missing(
        operation: &'static str,
        message: impl Into<String>,
        source: Option<std::io::Error>,
    ) -> Self {
        RegistrarError::ConfigMissing {
            operation,
            message: message.into(),
            location: ErrorLocation::here(),
            source,
        }
    }

    #[track_caller]
    pub fn config_invalid(operation: &'static str, message: impl Into<String>) -> Self {
        RegistrarError::ConfigInvalid {
            operation,
            message: message.into(),
            location: ErrorLocation::here(),
        }
    }

    #[track_caller]
    pub fn credential_missing(operation: &'static str, message: impl Into<String>) -> Self {
        RegistrarError::CredentialMissing {
            operation,
            message: message.into(),
            location: ErrorLocation::here(),
        }
    }

    #[track_caller]
    pub fn validation(
        operation: &'static str,
        field: &'static str,
        message: impl Into<String>,
    ) -> Self {
        RegistrarError::Validation {
            operation,
            field,
            message: message.into(),
            location: ErrorLocation::here(),
        }
    }

    /// Attach the operation name to a record-level validation failure.
    ///
    /// The location of the original check is kept.
    pub fn from_model(operation: &'static str, error: ModelError) -> Self {
        match error {
            ModelError::Validation {
                field,
                message,
                location,
            } => RegistrarError::Validation {
                operation,
                field,
                message,
                location,
            },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            RegistrarError::ConfigMissing { .. } => ErrorKind::ConfigMissing,
            RegistrarError::ConfigInvalid { .. } => ErrorKind::ConfigInvalid,
            RegistrarError::CredentialMissing { .. } => ErrorKind::CredentialMissing,
            RegistrarError::Validation { .. } => ErrorKind::Validation,
            RegistrarError::AuthenticationFailed { .. } => ErrorKind::AuthenticationFailed,
            RegistrarError::SessionFault { .. } => ErrorKind::SessionFault,
            RegistrarError::TransportFault { .. } => ErrorKind::TransportFault,
            RegistrarError::ApplicationFault { .. } => ErrorKind::ApplicationFault,
        }
    }

    /// Name of the operation that produced this error.
    pub fn operation(&self) -> &'static str {
        match self {
            RegistrarError::ConfigMissing { operation, .. }
            | RegistrarError::ConfigInvalid { operation, .. }
            | RegistrarError::CredentialMissing { operation, .. }
            | RegistrarError::Validation { operation, .. }
            | RegistrarError::AuthenticationFailed { operation, .. }
            | RegistrarError::SessionFault { operation, .. }
            | RegistrarError::TransportFault { operation, .. }
            | RegistrarError::ApplicationFault { operation, .. } => operation,
        }
    }

    /// The diagnostic message, without kind or location decoration.
    pub fn message(&self) -> &str {
        match self {
            RegistrarError::ConfigMissing { message, .. }
            | RegistrarError::ConfigInvalid { message, .. }
            | RegistrarError::CredentialMissing { message, .. }
            | RegistrarError::Validation { message, .. }
            | RegistrarError::AuthenticationFailed { message, .. }
            | RegistrarError::SessionFault { message, .. }
            | RegistrarError::TransportFault { message, .. }
            | RegistrarError::ApplicationFault { message, .. } => message,
        }
    }

    pub fn location(&self) -> ErrorLocation {
        match self {
            RegistrarError::ConfigMissing { location, .. }
            | RegistrarError::ConfigInvalid { location, .. }
            | RegistrarError::CredentialMissing { location, .. }
            | RegistrarError::Validation { location, .. }
            | RegistrarError::AuthenticationFailed { location, .. }
            | RegistrarError::SessionFault { location, .. }
            | RegistrarError::TransportFault { location, .. }
            | RegistrarError::ApplicationFault { location, .. } => *location,
        }
    }

    /// True for an application fault refined as not-found.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RegistrarError::ApplicationFault {
                kind: ApplicationFaultKind::NotFound,
                ..
            }
        )
    }

    /// True when no request reached the registrar.
    pub fn is_local(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::ConfigMissing
                | ErrorKind::ConfigInvalid
                | ErrorKind::CredentialMissing
                | ErrorKind::Validation
        )
    }
}
