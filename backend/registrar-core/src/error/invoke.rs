//! Raw faults surfaced by a [`RemoteInvoker`](crate::transport::RemoteInvoker).
//!
//! Key design decisions:
//! - Three categories only: transport, session, application
//! - HTTP status codes stored directly (not parsed from strings)
//! - `#[track_caller]` for automatic location capture

use crate::error::ApplicationFaultKind;

use common::{ErrorLocation, HttpStatusCode};

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum InvokeFault {
    /// The registrar was not reached, or answered outside the protocol.
    #[error("Transport Error: {message} {location}")]
    Transport {
        message: String,
        is_timeout: bool,
        is_connection: bool,
        status_code: Option<HttpStatusCode>,
        location: ErrorLocation,
    },

    /// The session handle is unknown to the registrar or has expired.
    #[error("Session Error: [{code}] {message} {location}")]
    Session {
        code: i64,
        message: String,
        location: ErrorLocation,
    },

    /// A well-formed request rejected by registrar business rules.
    #[error("Application Error: {kind} [{code}] {message} {location}")]
    Application {
        kind: ApplicationFaultKind,
        code: i64,
        message: String,
        location: ErrorLocation,
    },
}

impl InvokeFault {
    #[track_caller]
    pub fn protocol(message: impl Into<String>) -> Self {
        InvokeFault::Transport {
            message: message.into(),
            is_timeout: false,
            is_connection: false,
            status_code: None,
            location: ErrorLocation::here(),
        }
    }

    #[track_caller]
    pub fn http_status(status_code: HttpStatusCode, body: impl Into<String>) -> Self {
        let class = if status_code.is_server_error() {
            "server error"
        } else if status_code.is_client_error() {
            "client error"
        } else {
            "unexpected status"
        };

        InvokeFault::Transport {
            message: format!("HTTP {} {} - {}", status_code, class, body.into()),
            is_timeout: false,
            is_connection: status_code.is_unavailable(),
            status_code: Some(status_code),
            location: ErrorLocation::here(),
        }
    }

    #[track_caller]
    pub fn session(code: i64, message: impl Into<String>) -> Self {
        InvokeFault::Session {
            code,
            message: message.into(),
            location: ErrorLocation::here(),
        }
    }

    #[track_caller]
    pub fn application(kind: ApplicationFaultKind, code: i64, message: impl Into<String>) -> Self {
        InvokeFault::Application {
            kind,
            code,
            message: message.into(),
            location: ErrorLocation::here(),
        }
    }

    pub fn is_session(&self) -> bool {
        matches!(self, InvokeFault::Session { .. })
    }
}

impl From<reqwest::Error> for InvokeFault {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        // Categorize before the error is flattened to a string
        InvokeFault::Transport {
            message: error.to_string(),
            is_timeout: error.is_timeout(),
            is_connection: error.is_connect(),
            status_code: error.status().map(|s| HttpStatusCode(s.as_u16())),
            location: ErrorLocation::here(),
        }
    }
}

impl From<serde_json::Error> for InvokeFault {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        InvokeFault::protocol(format!("malformed payload: {error}"))
    }
}
