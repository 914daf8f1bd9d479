//! The remote procedure boundary.
//!
//! A [`RemoteInvoker`] sends one method call with ordered parameters under the
//! current session and reports the structured result or a categorized
//! [`InvokeFault`]. It never retries; retry policy belongs to the caller.

pub mod json_rpc;

pub use json_rpc::JsonRpcTransport;

use crate::error::InvokeFault;
use crate::session::SessionHandle;

use serde::Serialize;
use serde_json::Value;

/// One method call, built per operation and dropped afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRequest {
    pub method: &'static str,
    pub params: Vec<Value>,
}

impl OperationRequest {
    pub fn new(method: &'static str) -> Self {
        Self {
            method,
            params: Vec::new(),
        }
    }

    /// Append a positional parameter.
    ///
    /// # Errors
    ///
    /// [`InvokeFault::Transport`] if the value cannot be encoded.
    #[track_caller]
    pub fn with_param<T: Serialize + ?Sized>(mut self, value: &T) -> Result<Self, InvokeFault> {
        self.params.push(serde_json::to_value(value)?);
        Ok(self)
    }
}

/// Transport capability used by the session manager and the facade.
pub trait RemoteInvoker {
    /// Perform `request`, under `session` when one is given.
    ///
    /// Authentication calls pass `None`; every other call passes the open handle.
    fn invoke(
        &self,
        session: Option<&SessionHandle>,
        request: &OperationRequest,
    ) -> Result<Value, InvokeFault>;
}
