//! Scripted in-memory invoker for unit tests.

use crate::error::InvokeFault;
use crate::session::{SESSION_CLOSE, SESSION_OPEN, SessionHandle};
use crate::transport::{OperationRequest, RemoteInvoker};
use crate::{Credentials, Locale};

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use serde_json::{Value, json};

pub const TEST_ENDPOINT: &str = "https://api.example/rpc";

pub fn test_credentials() -> Credentials {
    Credentials::new("user1", "pw1", TEST_ENDPOINT, Locale::Fr).expect("valid test credentials")
}

/// One recorded invocation.
#[derive(Debug, Clone)]
pub struct Call {
    pub method: &'static str,
    pub session: Option<String>,
    pub params: Vec<Value>,
}

#[derive(Default)]
struct ScriptState {
    calls: Vec<Call>,
    queued: HashMap<&'static str, VecDeque<Result<Value, InvokeFault>>>,
    sessions_issued: usize,
}

/// Records every call and answers from per-method queues.
///
/// Without a queued answer: `sessionOpen` issues `session-N`, `sessionClose`
/// returns `true`, everything else returns `null`.
#[derive(Clone, Default)]
pub struct ScriptedInvoker {
    state: Arc<Mutex<ScriptState>>,
}

impl ScriptedInvoker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an answer for the next call of `method`.
    pub fn push(&self, method: &'static str, answer: Result<Value, InvokeFault>) -> &Self {
        self.state
            .lock()
            .unwrap()
            .queued
            .entry(method)
            .or_default()
            .push_back(answer);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn methods(&self) -> Vec<&'static str> {
        self.calls().iter().map(|c| c.method).collect()
    }

    pub fn count(&self, method: &str) -> usize {
        self.calls().iter().filter(|c| c.method == method).count()
    }
}

impl RemoteInvoker for ScriptedInvoker {
    fn invoke(
        &self,
        session: Option<&SessionHandle>,
        request: &OperationRequest,
    ) -> Result<Value, InvokeFault> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call {
            method: request.method,
            session: session.map(|s| s.as_str().to_string()),
            params: request.params.clone(),
        });

        if let Some(answer) = state
            .queued
            .get_mut(request.method)
            .and_then(VecDeque::pop_front)
        {
            return answer;
        }

        match request.method {
            SESSION_OPEN => {
                state.sessions_issued += 1;
                Ok(json!(format!("session-{}", state.sessions_issued)))
            }
            SESSION_CLOSE => Ok(json!(true)),
            _ => Ok(Value::Null),
        }
    }
}
