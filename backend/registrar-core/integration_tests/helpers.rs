//! Test helpers for integration tests.
//!
//! - [`FakeRegistrar`]: an in-memory registrar behind the `RemoteInvoker` seam
//! - credential file helpers backed by `tempfile`
//! - a wiremock responder that speaks JSON-RPC 2.0

use registrar_core::{
    ApplicationFaultKind, Credentials, InvokeFault, Locale, OperationRequest, RemoteInvoker,
    SessionHandle,
};

use models::{Contact, ContactBuilder};

use std::collections::{BTreeMap, HashSet};
use std::io::Write;
use std::sync::{Arc, Mutex};

use serde_json::{Value, json};
use tempfile::NamedTempFile;
use wiremock::{Request, ResponseTemplate};

/// Test constants for authentication
pub const TEST_LOGIN: &str = "RESELLER01";
pub const TEST_PASSWORD: &str = "hunter2";

// ============================================
// FAKE REGISTRAR
// ============================================

#[derive(Default)]
struct RegistrarState {
    live_sessions: HashSet<String>,
    sessions_issued: usize,
    contacts: BTreeMap<String, Value>,
    contacts_issued: usize,
    log: Vec<String>,
}

/// In-memory registrar: issues sessions, stores contacts, can expire sessions.
///
/// Clones share state, so a test keeps one handle while the client owns another.
#[derive(Clone, Default)]
pub struct FakeRegistrar {
    state: Arc<Mutex<RegistrarState>>,
}

impl FakeRegistrar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget every live session, as a server-side timeout would.
    pub fn expire_sessions(&self) {
        self.state.lock().unwrap().live_sessions.clear();
    }

    pub fn live_sessions(&self) -> usize {
        self.state.lock().unwrap().live_sessions.len()
    }

    /// Method names in call order.
    pub fn log(&self) -> Vec<String> {
        self.state.lock().unwrap().log.clone()
    }

    pub fn count(&self, method: &str) -> usize {
        self.log().iter().filter(|m| *m == method).count()
    }

    pub fn stored(&self, id: &str) -> Option<Value> {
        self.state.lock().unwrap().contacts.get(id).cloned()
    }
}

impl RemoteInvoker for FakeRegistrar {
    fn invoke(
        &self,
        session: Option<&SessionHandle>,
        request: &OperationRequest,
    ) -> Result<Value, InvokeFault> {
        let mut state = self.state.lock().unwrap();
        state.log.push(request.method.to_string());
        let params = &request.params;

        if request.method == "sessionOpen" {
            let accepted = params.first() == Some(&json!(TEST_LOGIN))
                && params.get(1) == Some(&json!(TEST_PASSWORD));
            if !accepted {
                return Err(InvokeFault::application(
                    ApplicationFaultKind::Rejected,
                    -32010,
                    "invalid login or password",
                ));
            }
            state.sessions_issued += 1;
            let handle = format!("sess-{}", state.sessions_issued);
            state.live_sessions.insert(handle.clone());
            return Ok(json!(handle));
        }

        let live = session.is_some_and(|s| state.live_sessions.contains(s.as_str()));
        if !live {
            return Err(InvokeFault::session(-32001, "session expired"));
        }

        let id = params
            .first()
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        match request.method {
            "sessionClose" => {
                if let Some(s) = session {
                    state.live_sessions.remove(s.as_str());
                }
                Ok(json!(true))
            }
            "contactCreate" => {
                state.contacts_issued += 1;
                let id = format!("FAKE{:03}", state.contacts_issued);
                let mut record = params[0].clone();
                record["idContact"] = json!(id);
                state.contacts.insert(id.clone(), record);
                Ok(json!(id))
            }
            "contactInfo" => state
                .contacts
                .get(&id)
                .cloned()
                .ok_or_else(|| not_found(&id)),
            "contactUpdate" | "contactOwnerUpdate" => {
                let method = request.method;
                let record = state.contacts.get_mut(&id).ok_or_else(|| not_found(&id))?;
                if let (Some(record), Some(changes)) =
                    (record.as_object_mut(), params[1].as_object())
                {
                    for (key, value) in changes {
                        record.insert(key.clone(), value.clone());
                    }
                }
                let status = if method == "contactOwnerUpdate" {
                    "Pending"
                } else {
                    "Done"
                };
                Ok(json!({ "STATUS": status, "TYPE_OPERATION": method }))
            }
            "contactDelete" => match state.contacts.remove(&id) {
                Some(_) => Ok(json!({ "STATUS": "Done", "TYPE_OPERATION": "contactDelete" })),
                None => Err(not_found(&id)),
            },
            other => Err(InvokeFault::application(
                ApplicationFaultKind::Rejected,
                -32601,
                format!("unknown method {other}"),
            )),
        }
    }
}

fn not_found(id: &str) -> InvokeFault {
    InvokeFault::application(
        ApplicationFaultKind::NotFound,
        -32002,
        format!("contact {id} does not exist"),
    )
}

pub fn fake_credentials() -> Credentials {
    Credentials::new(
        TEST_LOGIN,
        TEST_PASSWORD,
        "https://registrar.test/rpc",
        Locale::En,
    )
    .expect("Failed to build test credentials")
}

pub fn sample_contact() -> Contact {
    ContactBuilder::default()
        .with_name("barack", "obama")
        .with_address("1600 Pennsylvania Ave NW", "", "20500", "Washington")
        .with_area("DC")
        .with_country("US")
        .with_phone("2024561111")
        .with_email("barack.obama@gov.us")
        .with_language("EN")
        .build()
        .expect("Failed to build sample contact")
}

// ============================================
// CREDENTIAL FILES
// ============================================

/// Write `contents` to a temporary TOML file that lives as long as the handle.
pub fn credential_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write credential file");
    file
}

// ============================================
// JSON-RPC RESPONDERS
// ============================================

/// Build a JSON-RPC response echoing the request id, with `body` merged in.
pub fn rpc_reply(request: &Request, body: Value) -> ResponseTemplate {
    let envelope: Value = request.body_json().expect("Request body is not JSON");
    let mut reply = json!({ "jsonrpc": "2.0", "id": envelope["id"] });
    if let (Some(reply), Some(body)) = (reply.as_object_mut(), body.as_object()) {
        reply.extend(body.clone());
    }
    ResponseTemplate::new(200).set_body_json(reply)
}

pub fn rpc_result(result: Value) -> impl Fn(&Request) -> ResponseTemplate + Send + Sync {
    move |request: &Request| rpc_reply(request, json!({ "result": result }))
}

pub fn rpc_error(
    code: i64,
    message: &'static str,
) -> impl Fn(&Request) -> ResponseTemplate + Send + Sync {
    move |request: &Request| {
        rpc_reply(
            request,
            json!({ "error": { "code": code, "message": message } }),
        )
    }
}
