//! Mapping from raw invoker faults to the caller-visible taxonomy.
//!
//! The original diagnostic message and source location survive translation;
//! the operation name is attached here.

use crate::error::{InvokeFault, RegistrarError};

/// Translate a fault raised while performing `operation`.
pub fn translate(operation: &'static str, fault: InvokeFault) -> RegistrarError {
    match fault {
        InvokeFault::Transport {
            message,
            is_timeout,
            is_connection,
            status_code,
            location,
        } => RegistrarError::TransportFault {
            operation,
            message,
            is_timeout,
            is_connection,
            status_code,
            location,
        },
        InvokeFault::Session {
            message, location, ..
        } => RegistrarError::SessionFault {
            operation,
            message,
            location,
        },
        InvokeFault::Application {
            kind,
            code,
            message,
            location,
        } => RegistrarError::ApplicationFault {
            operation,
            kind,
            code,
            message,
            location,
        },
    }
}

/// Translate a fault raised by the authentication call.
///
/// Any rejection by the registrar means the credentials were refused;
/// transport faults keep their own kind.
pub fn translate_login(operation: &'static str, fault: InvokeFault) -> RegistrarError {
    match fault {
        InvokeFault::Session {
            code,
            message,
            location,
        }
        | InvokeFault::Application {
            code,
            message,
            location,
            ..
        } => RegistrarError::AuthenticationFailed {
            operation,
            message: format!("[{code}] {message}"),
            location,
        },
        transport @ InvokeFault::Transport { .. } => translate(operation, transport),
    }
}
