//! Session-managed client core for a registrar account API.
//!
//! - [`credentials`]: resolve identity, secret, endpoint and locale
//! - [`session`]: lazy authentication, idempotent close, close on drop
//! - [`transport`]: the remote procedure boundary and its JSON-RPC implementation
//! - [`error`]: the closed error taxonomy and fault translation
//! - [`client`]: typed contact operations

pub mod client;
pub mod credentials;
pub mod error;
pub mod session;
pub mod transport;

#[cfg(test)]
mod tests;

pub use client::RegistrarClient;
pub use credentials::{
    CredentialResolver, CredentialSource, Credentials, FileSource, Locale, SourceFields,
    StaticSource,
};
pub use error::{ApplicationFaultKind, ErrorKind, InvokeFault, RegistrarError};
pub use session::{SessionHandle, SessionManager, SessionState};
pub use transport::{JsonRpcTransport, OperationRequest, RemoteInvoker};
