//! Registrar resource records.
//!
//! Pure data structures exchanged with the registrar backend, plus the
//! required/optional field policy that is checked before any request is sent.
//! Field declaration order is the order the backend expects on the wire.

pub mod contact;
pub mod error;
pub mod operation;

#[cfg(test)]
mod tests;

pub use contact::builder::ContactBuilder;
pub use contact::{BodyForm, Contact, ContactSnapshot, ContactUpdate};
pub use error::model_error::ModelError;
pub use operation::{OperationState, OperationStatus};
