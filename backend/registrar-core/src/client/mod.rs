//! The registrar client facade.
//!
//! Each typed operation is a single blocking call from the caller's point of
//! view: local validation, lazy session open, one request, translation of
//! any fault. A session fault is answered with exactly one re-authentication
//! and one retry.
//!
//! # Examples
//!
//! ```no_run
//! use registrar_core::{FileSource, RegistrarClient};
//!
//! fn main() -> Result<(), registrar_core::RegistrarError> {
//!     let source = FileSource::new("registrar.toml");
//!     let mut client = RegistrarClient::connect(None, None, &source)?;
//!
//!     let contact = client.contact_info("GK521")?;
//!     println!("{} {}", contact.contact.first_name, contact.contact.last_name);
//!
//!     // Optional: dropping the client closes the session too
//!     client.close();
//!     Ok(())
//! }
//! ```

pub mod contact;

use crate::credentials::{CredentialResolver, CredentialSource, Credentials};
use crate::error::{InvokeFault, RegistrarError, translate};
use crate::session::{SessionManager, SessionState};
use crate::transport::{JsonRpcTransport, OperationRequest, RemoteInvoker};

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde_json::Value;

const CONNECT_OPERATION: &str = "connect";

/// Session-managed client for one registrar account.
pub struct RegistrarClient<I: RemoteInvoker = JsonRpcTransport> {
    session: SessionManager<I>,
}

impl RegistrarClient<JsonRpcTransport> {
    /// Build a client over JSON-RPC.
    ///
    /// `identity` and `secret` must be given together or not at all; when
    /// absent they are read from `source`. Endpoint, language and timeout
    /// always come from `source`. No network I/O happens here.
    ///
    /// # Errors
    ///
    /// `ConfigMissing`, `ConfigInvalid` or `CredentialMissing` from resolution.
    pub fn connect(
        identity: Option<&str>,
        secret: Option<&str>,
        source: &dyn CredentialSource,
    ) -> Result<Self, RegistrarError> {
        let resolver = CredentialResolver::load(source)?;
        let credentials = resolver.resolve(identity, secret)?;
        let timeout = resolver.request_timeout()?;

        let transport = JsonRpcTransport::new(credentials.endpoint().clone(), timeout)
            .map_err(|fault| translate(CONNECT_OPERATION, fault))?;
        debug!("Registrar transport bound to {}", transport.endpoint());

        Ok(Self::with_invoker(credentials, transport))
    }

    /// Build a client entirely from the credential source.
    pub fn from_source(source: &dyn CredentialSource) -> Result<Self, RegistrarError> {
        Self::connect(None, None, source)
    }
}

impl<I: RemoteInvoker> RegistrarClient<I> {
    /// Build a client over any invoker with already resolved credentials.
    pub fn with_invoker(credentials: Credentials, invoker: I) -> Self {
        Self {
            session: SessionManager::new(credentials, invoker),
        }
    }

    /// Open the session now instead of on the first operation.
    pub fn session_open(&mut self) -> Result<(), RegistrarError> {
        self.session.ensure_open().map(|_| ())
    }

    /// Log out and close the session. Idempotent; never fails.
    pub fn close(&mut self) {
        self.session.close();
    }

    pub fn session_state(&self) -> SessionState {
        self.session.state()
    }

    pub fn is_open(&self) -> bool {
        self.session.is_open()
    }

    /// Run `request`, re-authenticating and retrying once on a session fault.
    fn call(&mut self, request: OperationRequest) -> Result<Value, RegistrarError> {
        match self.attempt(&request)? {
            Ok(value) => Ok(value),
            Err(InvokeFault::Session { message, .. }) => {
                warn!(
                    "{} hit an invalid session ({message}), re-authenticating once",
                    request.method
                );
                self.session.invalidate();

                let outcome = self.attempt(&request)?;
                if outcome.as_ref().err().is_some_and(InvokeFault::is_session) {
                    // The fresh handle was rejected too; never reuse it
                    self.session.invalidate();
                }
                outcome.map_err(|fault| translate(request.method, fault))
            }
            Err(fault) => Err(translate(request.method, fault)),
        }
    }

    /// One open-then-invoke round.
    ///
    /// The outer error means no session could be opened; the inner result is
    /// the raw outcome of the call itself.
    fn attempt(
        &mut self,
        request: &OperationRequest,
    ) -> Result<Result<Value, InvokeFault>, RegistrarError> {
        let handle = self.session.ensure_open()?.clone();
        Ok(self.session.invoke(&handle, request))
    }
}

/// Decode a successful result into the operation's declared shape.
///
/// A result the registrar should never send is reported as a transport fault.
fn decode<T: DeserializeOwned>(operation: &'static str, value: Value) -> Result<T, RegistrarError> {
    serde_json::from_value(value).map_err(|e| translate(operation, InvokeFault::from(e)))
}

/// Build a request, reporting encoding problems against `operation`.
fn encode(
    request: Result<OperationRequest, InvokeFault>,
    operation: &'static str,
) -> Result<OperationRequest, RegistrarError> {
    request.map_err(|fault| translate(operation, fault))
}
