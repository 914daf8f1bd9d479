use crate::helpers::{TEST_LOGIN, credential_file};

use registrar_core::{
    CredentialResolver, ErrorKind, FileSource, Locale, RegistrarClient, RegistrarError,
};

use std::time::Duration;

// ============================================================================
// Public API tests for file-backed credential resolution
// No test here opens a network connection
// ============================================================================

/// **VALUE**: Verifies a complete TOML file resolves every field.
///
/// **WHY THIS MATTERS**: The credential file is the production configuration
/// path; its field names are part of the public contract.
#[test]
fn given_complete_credential_file_when_resolving_then_all_fields_are_read() {
    // GIVEN: A credential file with every field
    let file = credential_file(
        r#"
login = "RESELLER01"
password = "hunter2"
url = "https://api.registrar.example/rpc"
language = "FR"
timeout = "5s"
"#,
    );
    let resolver = CredentialResolver::load(&FileSource::new(file.path())).unwrap();

    // WHEN
    let credentials = resolver.resolve(None, None).unwrap();

    // THEN
    assert_eq!(credentials.identity(), TEST_LOGIN);
    assert_eq!(credentials.secret().expose(), "hunter2");
    assert_eq!(
        credentials.endpoint().as_str(),
        "https://api.registrar.example/rpc"
    );
    assert_eq!(credentials.locale(), Locale::Fr);
    assert_eq!(resolver.request_timeout().unwrap(), Duration::from_secs(5));
}

/// **VALUE**: Verifies explicit credentials with a URL-only file (explicit mode).
#[test]
fn given_url_only_file_when_resolving_explicit_then_language_defaults_to_en() {
    let file = credential_file(
        r#"
url = "https://api.example/rpc"
language = "DE"
"#,
    );
    let resolver = CredentialResolver::load(&FileSource::new(file.path())).unwrap();

    let credentials = resolver.resolve(Some("u"), Some("p")).unwrap();

    assert_eq!(credentials.identity(), "u");
    assert_eq!(credentials.secret().expose(), "p");
    assert_eq!(credentials.locale(), Locale::En);
}

/// **VALUE**: Verifies a file without password fails with CredentialMissing before any request.
#[test]
fn given_file_without_password_when_connecting_then_credential_missing() {
    // GIVEN: Login and URL only
    let file = credential_file(
        r#"
login = "RESELLER01"
url = "https://api.example/rpc"
"#,
    );

    // WHEN
    let result = RegistrarClient::from_source(&FileSource::new(file.path()));

    // THEN
    let err = result.err().expect("connect should fail");
    assert_eq!(err.kind(), ErrorKind::CredentialMissing);
    assert!(err.message().contains("password"));
}

/// **VALUE**: Verifies a missing file is ConfigMissing with the I/O cause attached.
///
/// **BUG THIS CATCHES**: Would catch the explicit-credential path silently
/// skipping the file and then failing later with a less useful URL error.
#[test]
fn given_missing_file_when_connecting_explicit_then_config_missing() {
    // GIVEN: A path inside an empty directory
    let dir = tempfile::tempdir().unwrap();
    let source = FileSource::new(dir.path().join("registrar.toml"));
    assert_eq!(source.path(), dir.path().join("registrar.toml"));

    // WHEN
    let result = RegistrarClient::connect(Some("u"), Some("p"), &source);

    // THEN
    match result.err() {
        Some(RegistrarError::ConfigMissing { source, message, .. }) => {
            assert!(source.is_some());
            assert!(message.contains("registrar.toml"));
        }
        other => panic!("expected ConfigMissing, got {other:?}"),
    }
}

/// **VALUE**: Verifies malformed TOML is ConfigInvalid, not ConfigMissing.
#[test]
fn given_malformed_file_when_loading_then_config_invalid() {
    let file = credential_file("login = \"unterminated\nurl = 3\n");

    let err = CredentialResolver::load(&FileSource::new(file.path())).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
}

/// **VALUE**: Verifies connecting with valid configuration performs no network I/O.
///
/// **BUG THIS CATCHES**: Would catch an eager login in `connect`; the URL
/// below is unroutable and any request would fail the test.
#[test]
fn given_valid_file_when_connecting_then_session_stays_closed() {
    let file = credential_file(
        r#"
login = "RESELLER01"
password = "hunter2"
url = "http://127.0.0.1:9/rpc"
timeout = "200ms"
"#,
    );

    let mut client = RegistrarClient::from_source(&FileSource::new(file.path())).unwrap();

    assert!(!client.is_open());
    client.close();
}
