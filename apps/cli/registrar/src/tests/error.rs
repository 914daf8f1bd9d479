// Unit tests for error module
// Exit status mapping is part of the CLI's scripting contract

use crate::error::CliError;

use common::ErrorLocation;

use registrar_core::{ApplicationFaultKind, InvokeFault, RegistrarError};
use registrar_core::error::translate;

use std::panic::Location;

/// **VALUE**: Verifies each error family maps onto its documented exit status.
///
/// **BUG THIS CATCHES**: Would catch a reordered match arm sending not-found
/// (4) through the generic application branch (1).
#[test]
fn given_each_error_family_when_exit_code_then_matches_contract() {
    let not_found: CliError = translate(
        "contactInfo",
        InvokeFault::application(ApplicationFaultKind::NotFound, -32002, "gone"),
    )
    .into();
    let rejected: CliError = translate(
        "contactCreate",
        InvokeFault::application(ApplicationFaultKind::Rejected, -32099, "no"),
    )
    .into();
    let auth: CliError = RegistrarError::AuthenticationFailed {
        operation: "sessionOpen",
        message: String::from("bad login"),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();
    let config: CliError = RegistrarError::config_invalid("resolveCredentials", "no url").into();
    let output = CliError::Output {
        message: String::from("broken pipe"),
        location: ErrorLocation::from(Location::caller()),
    };

    assert_eq!(not_found.exit_code(), 4);
    assert_eq!(rejected.exit_code(), 1);
    assert_eq!(auth.exit_code(), 3);
    assert_eq!(config.exit_code(), 2);
    assert_eq!(output.exit_code(), 1);
}

/// **VALUE**: Verifies registrar errors display unchanged through the CLI wrapper.
#[test]
fn given_registrar_error_when_displayed_then_text_is_transparent() {
    let inner = RegistrarError::credential_missing("resolveCredentials", "Missing secret");
    let expected = inner.to_string();

    let err = CliError::from(inner);

    assert_eq!(err.to_string(), expected);
}
