//! Operation status records returned by mutating registrar calls.

use serde::{Deserialize, Serialize};

/// Processing state reported by the registrar.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OperationState {
    Done,
    /// Accepted for asynchronous processing; the final outcome arrives later.
    Pending,
    Failed,
    #[serde(other)]
    Unknown,
}

/// Acknowledgement of an update or delete.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OperationStatus {
    #[serde(rename = "STATUS")]
    pub state: OperationState,
    #[serde(rename = "ID_OPERATION", default)]
    pub operation_id: Option<String>,
    #[serde(rename = "TYPE_OPERATION", default)]
    pub operation_type: Option<String>,
    #[serde(rename = "MESSAGE", default)]
    pub message: Option<String>,
}

impl OperationStatus {
    /// The request was accepted, whether completed or still pending.
    pub fn is_success(&self) -> bool {
        matches!(self.state, OperationState::Done | OperationState::Pending)
    }

    pub fn is_pending(&self) -> bool {
        self.state == OperationState::Pending
    }
}
