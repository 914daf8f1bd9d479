// Unit tests for argument parsing

use crate::cli::{Cli, Command};
use crate::config::SECRET_ENV;

use std::path::Path;

use clap::{CommandFactory, Parser};

/// **VALUE**: Verifies global options are accepted after the subcommand.
///
/// **BUG THIS CATCHES**: Would catch `global = true` being dropped, which
/// breaks `registrar info X -v`.
#[test]
fn given_global_flags_after_subcommand_when_parsing_then_they_apply() {
    let cli = Cli::try_parse_from([
        "registrar",
        "update",
        "BO001",
        "--file",
        "changes.json",
        "--owner",
        "-vv",
        "--config",
        "alt.toml",
    ])
    .unwrap();

    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.config.as_deref(), Some(Path::new("alt.toml")));
    match cli.command {
        Command::Update { id, file, owner } => {
            assert_eq!(id, "BO001");
            assert_eq!(file, Path::new("changes.json"));
            assert!(owner);
        }
        other => panic!("expected update, got {other:?}"),
    }
}

/// **VALUE**: Verifies a lone --identity parses; pairing is enforced by credential resolution.
#[test]
fn given_identity_without_secret_when_parsing_then_accepted() {
    let cli = Cli::try_parse_from(["registrar", "--identity", "u", "info", "BO001"]).unwrap();

    assert_eq!(cli.identity.as_deref(), Some("u"));
    assert!(cli.secret.is_none());
}

/// **VALUE**: Verifies required positional arguments are enforced.
#[test]
fn given_delete_without_id_when_parsing_then_error() {
    let result = Cli::try_parse_from(["registrar", "delete"]);

    assert!(result.is_err());
}

/// **VALUE**: Verifies the secret can come from the environment instead of argv.
///
/// **BUG THIS CATCHES**: Would catch the secret only being accepted on the
/// command line, where it leaks into shell history and process listings.
#[test]
fn given_secret_arg_when_inspecting_command_then_env_fallback_is_hidden() {
    // GIVEN
    let command = Cli::command();

    // WHEN
    let secret = command
        .get_arguments()
        .find(|arg| arg.get_id() == "secret")
        .expect("secret argument exists");

    // THEN: Backed by REGISTRAR_SECRET, and the value never shows in --help
    assert_eq!(secret.get_env(), Some(std::ffi::OsStr::new(SECRET_ENV)));
    assert!(secret.is_hide_env_values_set());
}
