//! Session lifecycle.
//!
//! [`SessionManager`] owns the authenticated session handle and is the only
//! place that mutates it.
//!
//! ```text
//! Closed --sessionOpen ok--> Open
//! Closed --sessionOpen fails--> Closed
//! Open   --any call--> Open
//! Open   --close (any logout outcome)--> Closed
//! Open   --session fault--> Closed (invalidate, no logout)
//! ```
//!
//! Dropping the manager closes the session, so every exit path of the owning
//! client ends with a logout attempt. Closing early is still recommended in
//! long-running processes: the registrar caps concurrent sessions per account.

use crate::credentials::Credentials;
use crate::error::{InvokeFault, RegistrarError, translate_login};
use crate::transport::{OperationRequest, RemoteInvoker};

use common::ErrorLocation;

use std::fmt;

use log::{debug, info, warn};
use serde_json::Value;

pub const SESSION_OPEN: &str = "sessionOpen";
pub const SESSION_CLOSE: &str = "sessionClose";

/// Opaque session identifier issued by the registrar.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionHandle(String);

impl SessionHandle {
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// The handle authenticates requests, so only a prefix is ever printed
impl fmt::Debug for SessionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix: String = self.0.chars().take(4).collect();
        write!(f, "SessionHandle({prefix}…)")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Closed,
    Open,
}

/// Lazily opened, idempotently closed registrar session.
///
/// Not designed for concurrent first use; every mutating method takes
/// `&mut self`, so sharing across threads needs external synchronization.
pub struct SessionManager<I: RemoteInvoker> {
    credentials: Credentials,
    invoker: I,
    handle: Option<SessionHandle>,
}

impl<I: RemoteInvoker> SessionManager<I> {
    pub fn new(credentials: Credentials, invoker: I) -> Self {
        Self {
            credentials,
            invoker,
            handle: None,
        }
    }

    /// Return the open handle, authenticating first if the session is closed.
    ///
    /// A no-op when already open. On failure the session stays closed and no
    /// retry is attempted.
    ///
    /// # Errors
    ///
    /// - [`RegistrarError::AuthenticationFailed`] if the registrar refuses the credentials
    /// - [`RegistrarError::TransportFault`] if it cannot be reached
    pub fn ensure_open(&mut self) -> Result<&SessionHandle, RegistrarError> {
        let handle = match self.handle.take() {
            Some(handle) => handle,
            None => self.authenticate()?,
        };

        let handle: &SessionHandle = self.handle.insert(handle);
        Ok(handle)
    }

    /// Close the session. Safe to call any number of times.
    ///
    /// Logout is best effort: its failure is logged, and the local state
    /// ends `Closed` regardless.
    pub fn close(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };

        match self
            .invoker
            .invoke(Some(&handle), &OperationRequest::new(SESSION_CLOSE))
        {
            Ok(_) => info!("Session closed for '{}'", self.credentials.identity()),
            Err(e) => warn!(
                "Logout failed for '{}', session discarded locally: {}",
                self.credentials.identity(),
                e
            ),
        }
    }

    /// Forget a handle the registrar no longer recognises, without logging out.
    pub fn invalidate(&mut self) {
        if let Some(handle) = self.handle.take() {
            debug!("Discarding rejected session {:?}", handle);
        }
    }

    pub fn is_open(&self) -> bool {
        self.handle.is_some()
    }

    pub fn state(&self) -> SessionState {
        if self.is_open() {
            SessionState::Open
        } else {
            SessionState::Closed
        }
    }

    /// Perform `request` under `handle`.
    pub fn invoke(
        &self,
        handle: &SessionHandle,
        request: &OperationRequest,
    ) -> Result<Value, InvokeFault> {
        self.invoker.invoke(Some(handle), request)
    }

    fn authenticate(&self) -> Result<SessionHandle, RegistrarError> {
        let request = OperationRequest::new(SESSION_OPEN)
            .with_param(self.credentials.identity())
            .and_then(|r| r.with_param(self.credentials.secret().expose()))
            .and_then(|r| r.with_param(self.credentials.locale().as_str()))
            .map_err(|fault| translate_login(SESSION_OPEN, fault))?;

        let result = self
            .invoker
            .invoke(None, &request)
            .map_err(|fault| translate_login(SESSION_OPEN, fault))?;

        let handle = match result {
            Value::String(handle) if !handle.is_empty() => SessionHandle::new(handle),
            other => {
                return Err(RegistrarError::AuthenticationFailed {
                    operation: SESSION_OPEN,
                    message: format!("registrar returned no session handle: {other}"),
                    location: ErrorLocation::here(),
                });
            }
        };

        info!(
            "Session opened for '{}' at {}",
            self.credentials.identity(),
            self.credentials.endpoint()
        );
        Ok(handle)
    }
}

impl<I: RemoteInvoker> Drop for SessionManager<I> {
    fn drop(&mut self) {
        if self.is_open() {
            debug!("Closing session on drop");
        }
        self.close();
    }
}
