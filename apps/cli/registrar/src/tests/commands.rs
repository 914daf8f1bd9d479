// Unit tests for subcommand execution against a canned registrar

use crate::cli::Command;
use crate::commands::execute;
use crate::error::CliError;

use registrar_core::{
    ApplicationFaultKind, Credentials, InvokeFault, Locale, OperationRequest, RegistrarClient,
    RemoteInvoker, SessionHandle,
};

use std::cell::RefCell;
use std::io::Write;
use std::path::PathBuf;
use std::rc::Rc;

use serde_json::{Value, json};
use tempfile::NamedTempFile;

/// Answers by method name and records what was called.
#[derive(Clone, Default)]
struct CannedRegistrar {
    calls: Rc<RefCell<Vec<&'static str>>>,
}

impl RemoteInvoker for CannedRegistrar {
    fn invoke(
        &self,
        _session: Option<&SessionHandle>,
        request: &OperationRequest,
    ) -> Result<Value, InvokeFault> {
        self.calls.borrow_mut().push(request.method);
        match request.method {
            "sessionOpen" => Ok(json!("sess-1")),
            "sessionClose" => Ok(json!(true)),
            "contactCreate" => Ok(json!("NEW001")),
            "contactInfo" if request.params[0] == "BO001" => {
                Ok(json!({ "idContact": "BO001", "firstName": "barack", "lastName": "obama" }))
            }
            "contactInfo" => Err(InvokeFault::application(
                ApplicationFaultKind::NotFound,
                -32002,
                "no such contact",
            )),
            "contactUpdate" => Ok(json!({ "STATUS": "Done" })),
            "contactOwnerUpdate" => Ok(json!({ "STATUS": "Pending" })),
            "contactDelete" => Ok(json!({ "STATUS": "Done" })),
            other => panic!("unexpected method {other}"),
        }
    }
}

fn client(registrar: &CannedRegistrar) -> RegistrarClient<CannedRegistrar> {
    let credentials =
        Credentials::new("RESELLER01", "hunter2", "https://registrar.test/rpc", Locale::En)
            .unwrap();
    RegistrarClient::with_invoker(credentials, registrar.clone())
}

fn json_file(value: &Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{value}").unwrap();
    file
}

fn run(registrar: &CannedRegistrar, command: Command) -> (Result<(), CliError>, Value) {
    let mut client = client(registrar);
    let mut out = Vec::new();
    let result = execute(&mut client, &command, &mut out);
    let printed = serde_json::from_slice(&out).unwrap_or(Value::Null);
    (result, printed)
}

/// **VALUE**: Verifies info prints the contact as JSON on stdout.
#[test]
fn given_existing_contact_when_info_then_prints_snapshot() {
    let registrar = CannedRegistrar::default();

    let (result, printed) = run(
        &registrar,
        Command::Info {
            id: "BO001".into(),
        },
    );

    result.unwrap();
    assert_eq!(printed["idContact"], "BO001");
    assert_eq!(printed["lastName"], "obama");
}

/// **VALUE**: Verifies create reads the contact file and prints the new identifier.
#[test]
fn given_contact_file_when_create_then_prints_identifier() {
    let registrar = CannedRegistrar::default();
    let file = json_file(&json!({
        "firstName": "barack",
        "lastName": "obama",
        "address1": "1600 Pennsylvania Ave NW",
        "zipCode": "20500",
        "city": "Washington",
        "country": "US",
        "phone": "2024561111",
        "email": "barack.obama@gov.us",
        "language": "EN"
    }));

    let (result, printed) = run(
        &registrar,
        Command::Create {
            file: file.path().to_path_buf(),
        },
    );

    result.unwrap();
    assert_eq!(printed, json!({ "idContact": "NEW001" }));
}

/// **VALUE**: Verifies --owner routes the update to the owner method.
#[test]
fn given_owner_flag_when_update_then_uses_owner_method() {
    let registrar = CannedRegistrar::default();
    let file = json_file(&json!({ "city": "Chicago" }));

    let (result, printed) = run(
        &registrar,
        Command::Update {
            id: "BO001".into(),
            file: file.path().to_path_buf(),
            owner: true,
        },
    );

    result.unwrap();
    assert_eq!(printed["STATUS"], "Pending");
    assert!(registrar.calls.borrow().contains(&"contactOwnerUpdate"));
    assert!(!registrar.calls.borrow().contains(&"contactUpdate"));
}

/// **VALUE**: Verifies a misspelled field in an update file is rejected before any request.
///
/// **BUG THIS CATCHES**: Would catch unknown keys being silently dropped,
/// turning a typo into an empty (or wrong) update.
#[test]
fn given_update_file_with_unknown_field_when_update_then_input_error() {
    let registrar = CannedRegistrar::default();
    let file = json_file(&json!({ "citty": "Chicago" }));

    let (result, _) = run(
        &registrar,
        Command::Update {
            id: "BO001".into(),
            file: file.path().to_path_buf(),
            owner: false,
        },
    );

    let err = result.unwrap_err();
    assert!(matches!(err, CliError::Input { .. }));
    assert_eq!(err.exit_code(), 2);
    assert!(registrar.calls.borrow().is_empty());
}

/// **VALUE**: Verifies a missing input file is an input error.
#[test]
fn given_missing_file_when_create_then_input_error() {
    let registrar = CannedRegistrar::default();

    let (result, _) = run(
        &registrar,
        Command::Create {
            file: PathBuf::from("/nonexistent/contact.json"),
        },
    );

    assert!(matches!(result, Err(CliError::Input { .. })));
}

/// **VALUE**: Verifies an unknown contact maps onto the not-found exit status.
#[test]
fn given_unknown_contact_when_info_then_exit_code_is_not_found() {
    let registrar = CannedRegistrar::default();

    let (result, _) = run(
        &registrar,
        Command::Info {
            id: "NOPE".into(),
        },
    );

    assert_eq!(result.unwrap_err().exit_code(), 4);
}

/// **VALUE**: Verifies login only authenticates and reports success.
#[test]
fn given_valid_credentials_when_login_then_prints_ok() {
    let registrar = CannedRegistrar::default();
    let mut client = client(&registrar);
    let mut out = Vec::new();

    execute(&mut client, &Command::Login, &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "ok\n");
    assert_eq!(*registrar.calls.borrow(), vec!["sessionOpen"]);
    assert!(client.is_open());
}
