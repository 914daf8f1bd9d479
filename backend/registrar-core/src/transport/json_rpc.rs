//! JSON-RPC 2.0 over HTTP POST.
//!
//! The session handle is sent as the first positional parameter, ahead of the
//! operation's own parameters.
//!
//! # Fault codes
//!
//! | code            | category                         |
//! |-----------------|----------------------------------|
//! | -32700, -32600  | transport (protocol violation)   |
//! | -32001          | session invalid or expired       |
//! | -32002          | application, resource not found  |
//! | anything else   | application, rejected            |

use crate::error::{ApplicationFaultKind, InvokeFault};
use crate::session::SessionHandle;
use crate::transport::{OperationRequest, RemoteInvoker};

use common::HttpStatusCode;

use std::time::Duration;

use log::{debug, trace};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;
use uuid::Uuid;

pub const PARSE_ERROR_CODE: i64 = -32700;
pub const INVALID_REQUEST_CODE: i64 = -32600;
pub const SESSION_FAULT_CODE: i64 = -32001;
pub const NOT_FOUND_CODE: i64 = -32002;

const JSONRPC_VERSION: &str = "2.0";
const CLIENT_NAME: &str = "registrar-core";
const USER_AGENT: &str = const_format::concatcp!(CLIENT_NAME, "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: String,
    method: &'a str,
    params: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcError>,
}

#[derive(Debug, Deserialize)]
struct RpcError {
    code: i64,
    message: String,
}

/// Blocking JSON-RPC transport bound to one registrar endpoint.
#[derive(Debug, Clone)]
pub struct JsonRpcTransport {
    endpoint: Url,
    client: Client,
}

impl JsonRpcTransport {
    /// Build a transport whose every call is bounded by `timeout`.
    ///
    /// # Errors
    ///
    /// [`InvokeFault::Transport`] if the HTTP client cannot be built.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, InvokeFault> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl RemoteInvoker for JsonRpcTransport {
    fn invoke(
        &self,
        session: Option<&SessionHandle>,
        request: &OperationRequest,
    ) -> Result<Value, InvokeFault> {
        let mut params = Vec::with_capacity(request.params.len() + 1);
        if let Some(session) = session {
            params.push(Value::String(session.as_str().to_string()));
        }
        params.extend(request.params.iter().cloned());

        let id = Uuid::new_v4().to_string();
        let body = RpcRequest {
            jsonrpc: JSONRPC_VERSION,
            id: id.clone(),
            method: request.method,
            params,
        };

        debug!("-> {} [{}]", request.method, id);

        let response = self.client.post(self.endpoint.clone()).json(&body).send()?;

        let status = HttpStatusCode(response.status().as_u16());
        if !status.is_success() {
            return Err(InvokeFault::http_status(
                status,
                response.text().unwrap_or_default(),
            ));
        }

        let envelope: RpcResponse = serde_json::from_str(&response.text()?)?;
        trace!("<- {} [{}] {:?}", request.method, id, envelope);

        // A null id is only legal on an error reply the server could not attribute
        let unattributed =
            matches!(envelope.id, None | Some(Value::Null)) && envelope.error.is_some();
        match envelope.id {
            Some(Value::String(ref echoed)) if *echoed == id => {}
            _ if unattributed => {}
            other => {
                return Err(InvokeFault::protocol(format!(
                    "response id {other:?} does not match request id {id}"
                )));
            }
        }

        if let Some(error) = envelope.error {
            return Err(classify(error));
        }

        Ok(envelope.result.unwrap_or(Value::Null))
    }
}

fn classify(error: RpcError) -> InvokeFault {
    match error.code {
        PARSE_ERROR_CODE | INVALID_REQUEST_CODE => InvokeFault::protocol(format!(
            "registrar rejected the request envelope: [{}] {}",
            error.code, error.message
        )),
        SESSION_FAULT_CODE => InvokeFault::session(error.code, error.message),
        NOT_FOUND_CODE => {
            InvokeFault::application(ApplicationFaultKind::NotFound, error.code, error.message)
        }
        code => InvokeFault::application(ApplicationFaultKind::Rejected, code, error.message),
    }
}
