use crate::helpers::{credential_file, rpc_error, rpc_result};

use registrar_core::{
    ApplicationFaultKind, ErrorKind, FileSource, InvokeFault, JsonRpcTransport, OperationRequest,
    RegistrarClient, RegistrarError, RemoteInvoker, SessionHandle,
};

use std::time::Duration;

use serde_json::{Value, json};
use url::Url;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// JSON-RPC transport against a mock HTTP registrar
// The transport is blocking, so every call runs on a blocking thread
// ============================================================================

const RPC_PATH: &str = "/rpc";

fn endpoint(server: &MockServer) -> Url {
    Url::parse(&format!("{}{RPC_PATH}", server.uri())).unwrap()
}

/// Build the transport and run one invoke on a blocking thread.
///
/// The blocking client owns a runtime of its own, so it is created and
/// dropped off the async test runtime.
async fn invoke(
    endpoint: Url,
    timeout: Duration,
    session: Option<&'static str>,
    request: OperationRequest,
) -> Result<Value, InvokeFault> {
    tokio::task::spawn_blocking(move || {
        let transport = JsonRpcTransport::new(endpoint, timeout)?;
        let session = session.map(SessionHandle::new);
        transport.invoke(session.as_ref(), &request)
    })
    .await
    .expect("Blocking task panicked")
}

fn info_request(id: &str) -> OperationRequest {
    OperationRequest::new("contactInfo").with_param(id).unwrap()
}

/// **VALUE**: Verifies the envelope shape: method, JSON-RPC version, session first.
///
/// **WHY THIS MATTERS**: The registrar reads the handle from the first
/// positional parameter; anything else is an unauthenticated call.
#[tokio::test(flavor = "multi_thread")]
async fn given_session_when_invoking_then_handle_is_first_param() {
    // GIVEN: A mock that only answers the exact expected envelope
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(RPC_PATH))
        .and(body_partial_json(json!({
            "jsonrpc": "2.0",
            "method": "contactInfo",
            "params": ["sess-1", "BO001"]
        })))
        .respond_with(rpc_result(json!({ "idContact": "BO001" })))
        .expect(1)
        .mount(&server)
        .await;

    // WHEN
    let result = invoke(
        endpoint(&server),
        Duration::from_secs(5),
        Some("sess-1"),
        info_request("BO001"),
    )
    .await;

    // THEN
    assert_eq!(result.unwrap()["idContact"], "BO001");
}

/// **VALUE**: Verifies authentication calls carry no session parameter.
#[tokio::test(flavor = "multi_thread")]
async fn given_no_session_when_invoking_then_params_are_sent_as_is() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "method": "sessionOpen",
            "params": ["RESELLER01", "hunter2", "EN"]
        })))
        .respond_with(rpc_result(json!("sess-1")))
        .expect(1)
        .mount(&server)
        .await;

    let request = OperationRequest::new("sessionOpen")
        .with_param("RESELLER01")
        .and_then(|r| r.with_param("hunter2"))
        .and_then(|r| r.with_param("EN"))
        .unwrap();
    let result = invoke(endpoint(&server), Duration::from_secs(5), None, request).await;

    assert_eq!(result.unwrap(), json!("sess-1"));
}

/// **VALUE**: Verifies fault codes map onto session, not-found, rejected and protocol categories.
///
/// **BUG THIS CATCHES**: Would catch a session fault classified as an
/// application fault, which would disable transparent re-authentication.
#[tokio::test(flavor = "multi_thread")]
async fn given_error_codes_when_invoking_then_faults_are_categorized() {
    let cases: [(i64, &'static str); 4] = [
        (-32001, "session"),
        (-32002, "not found"),
        (-32050, "rejected"),
        (-32600, "transport"),
    ];

    for (code, expected) in cases {
        // GIVEN: A registrar answering with `code`
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(rpc_error(code, "nope"))
            .mount(&server)
            .await;

        // WHEN
        let fault = invoke(
            endpoint(&server),
            Duration::from_secs(5),
            Some("sess-1"),
            info_request("BO001"),
        )
        .await
        .unwrap_err();

        // THEN
        let actual = match fault {
            InvokeFault::Session { .. } => "session",
            InvokeFault::Application {
                kind: ApplicationFaultKind::NotFound,
                ..
            } => "not found",
            InvokeFault::Application {
                kind: ApplicationFaultKind::Rejected,
                ..
            } => "rejected",
            InvokeFault::Transport { .. } => "transport",
        };
        assert_eq!(actual, expected, "code {code}");
    }
}

/// **VALUE**: Verifies a non-2xx HTTP answer is a transport fault carrying the status.
#[tokio::test(flavor = "multi_thread")]
async fn given_http_500_when_invoking_then_transport_fault_with_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let fault = invoke(
        endpoint(&server),
        Duration::from_secs(5),
        Some("sess-1"),
        info_request("BO001"),
    )
    .await
    .unwrap_err();

    match fault {
        InvokeFault::Transport {
            status_code,
            message,
            ..
        } => {
            assert_eq!(status_code.map(|s| s.0), Some(500));
            assert!(message.contains("boom"));
            assert!(message.contains("server error"));
        }
        other => panic!("expected transport fault, got {other:?}"),
    }
}

/// **VALUE**: Verifies a body that is not JSON-RPC is a transport fault.
#[tokio::test(flavor = "multi_thread")]
async fn given_html_body_when_invoking_then_transport_fault() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let fault = invoke(
        endpoint(&server),
        Duration::from_secs(5),
        Some("sess-1"),
        info_request("BO001"),
    )
    .await
    .unwrap_err();

    assert!(matches!(fault, InvokeFault::Transport { .. }));
}

/// **VALUE**: Verifies a response for another request id is rejected.
#[tokio::test(flavor = "multi_thread")]
async fn given_mismatched_id_when_invoking_then_transport_fault() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": "someone-else",
            "result": true
        })))
        .mount(&server)
        .await;

    let fault = invoke(
        endpoint(&server),
        Duration::from_secs(5),
        Some("sess-1"),
        info_request("BO001"),
    )
    .await
    .unwrap_err();

    assert!(matches!(fault, InvokeFault::Transport { .. }));
}

/// **VALUE**: Verifies an error reply addressed to another request is not
/// mistaken for this call's fault.
///
/// **BUG THIS CATCHES**: Would catch the error object being classified before
/// the id is checked, so a stray session fault triggers a needless re-login.
#[tokio::test(flavor = "multi_thread")]
async fn given_error_reply_with_mismatched_id_when_invoking_then_transport_fault() {
    // GIVEN: A registrar answering with a session fault for a different id
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": "someone-else",
            "error": { "code": -32001, "message": "expired" }
        })))
        .mount(&server)
        .await;

    // WHEN: Invoking
    let fault = invoke(
        endpoint(&server),
        Duration::from_secs(5),
        Some("sess-1"),
        info_request("BO001"),
    )
    .await
    .unwrap_err();

    // THEN: The reply is a protocol violation, not a session fault
    match fault {
        InvokeFault::Transport { message, .. } => assert!(message.contains("someone-else")),
        other => panic!("expected transport fault, got {other:?}"),
    }
}

/// **VALUE**: Verifies an error reply the server could not attribute still
/// surfaces its code.
#[tokio::test(flavor = "multi_thread")]
async fn given_error_reply_with_null_id_when_invoking_then_error_classified() {
    // GIVEN: A registrar answering with a null-id session fault
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": null,
            "error": { "code": -32001, "message": "expired" }
        })))
        .mount(&server)
        .await;

    // WHEN: Invoking
    let fault = invoke(
        endpoint(&server),
        Duration::from_secs(5),
        Some("sess-1"),
        info_request("BO001"),
    )
    .await
    .unwrap_err();

    // THEN: The error object is classified as usual
    assert!(fault.is_session());
}

/// **VALUE**: Verifies the transport reports the endpoint it was built for.
#[tokio::test(flavor = "multi_thread")]
async fn given_endpoint_when_building_transport_then_endpoint_is_kept() {
    let server = MockServer::start().await;
    let expected = endpoint(&server);

    let bound = tokio::task::spawn_blocking({
        let expected = expected.clone();
        move || {
            let transport = JsonRpcTransport::new(expected, Duration::from_secs(5)).unwrap();
            transport.endpoint().clone()
        }
    })
    .await
    .unwrap();

    assert_eq!(bound, expected);
}

/// **VALUE**: Verifies a slow registrar trips the per-call timeout.
///
/// **BUG THIS CATCHES**: Would catch the configured timeout not reaching the
/// HTTP client, leaving calls to hang indefinitely.
#[tokio::test(flavor = "multi_thread")]
async fn given_slow_registrar_when_invoking_then_timeout_fault() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(1500)))
        .mount(&server)
        .await;

    let fault = invoke(
        endpoint(&server),
        Duration::from_millis(200),
        Some("sess-1"),
        info_request("BO001"),
    )
    .await
    .unwrap_err();

    match fault {
        InvokeFault::Transport { is_timeout, .. } => assert!(is_timeout),
        other => panic!("expected transport fault, got {other:?}"),
    }
}

// ============================================================================
// Full client over HTTP
// ============================================================================

/// **VALUE**: Verifies the real wiring: file source, login, call, logout on drop.
#[tokio::test(flavor = "multi_thread")]
async fn given_mock_registrar_when_client_fetches_contact_then_logs_in_and_out() {
    // GIVEN: A registrar accepting login, info and logout
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "method": "sessionOpen" })))
        .respond_with(rpc_result(json!("sess-42")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "method": "contactInfo",
            "params": ["sess-42", "BO001"]
        })))
        .respond_with(rpc_result(json!({
            "idContact": "BO001",
            "firstName": "barack",
            "lastName": "obama",
            "isOwner": "1"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "method": "sessionClose", "params": ["sess-42"] })))
        .respond_with(rpc_result(json!(true)))
        .expect(1)
        .mount(&server)
        .await;

    let file = credential_file(&format!(
        "login = \"RESELLER01\"\npassword = \"hunter2\"\nurl = \"{}{RPC_PATH}\"\n",
        server.uri()
    ));
    let path = file.path().to_path_buf();

    // WHEN: A client fetches one contact and is dropped
    let snapshot = tokio::task::spawn_blocking(move || {
        let mut client = RegistrarClient::from_source(&FileSource::new(path))?;
        client.contact_info("BO001")
    })
    .await
    .expect("Blocking task panicked")
    .unwrap();

    // THEN: Contact decoded; expectations verified when the server drops
    assert_eq!(snapshot.contact.last_name, "obama");
    assert!(snapshot.contact.is_owner);
}

/// **VALUE**: Verifies an unreachable endpoint surfaces as a connection transport fault.
#[tokio::test(flavor = "multi_thread")]
async fn given_unreachable_endpoint_when_calling_then_transport_fault() {
    let file = credential_file(
        "login = \"RESELLER01\"\npassword = \"hunter2\"\nurl = \"http://127.0.0.1:9/rpc\"\ntimeout = \"2s\"\n",
    );
    let path = file.path().to_path_buf();

    let result: Result<_, RegistrarError> = tokio::task::spawn_blocking(move || {
        let mut client = RegistrarClient::from_source(&FileSource::new(path))?;
        client.contact_info("BO001")
    })
    .await
    .expect("Blocking task panicked");

    let err = result.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TransportFault);
    assert_eq!(err.operation(), "sessionOpen");
}
