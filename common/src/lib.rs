//! Shared primitives for the registrar client workspace.
//!
//! This crate holds the small building blocks every other crate leans on:
//! error location capture, secret handling and HTTP status classification.
//!
//! ## Architecture
//!
//! - **common** (this crate): Cross-cutting primitives
//! - **models**: Registrar resource records and their validation policy
//! - **registrar-core**: Credentials, session lifecycle, transport and the contact facade
//! - **registrar**: Command-line front end wiring everything together

pub mod error;
pub mod http_status;
pub mod redacted_secret;


pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_secret::RedactedSecret;
