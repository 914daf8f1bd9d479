use crate::{OperationState, OperationStatus};

use serde_json::json;

/// **VALUE**: Verifies that pending operations count as accepted but not finished.
///
/// **WHY THIS MATTERS**: Some registrar operations are asynchronous; callers must be
/// able to tell "accepted, still running" from "done" and from "failed".
///
/// **BUG THIS CATCHES**: Would catch a success flag that treats Pending as failure.
#[test]
fn given_pending_status_when_inspected_then_success_and_pending() {
    // GIVEN: A pending operation response
    let payload = json!({
        "STATUS": "Pending",
        "ID_OPERATION": "4242",
        "TYPE_OPERATION": "contactUpdate"
    });

    // WHEN: Deserializing
    let status: OperationStatus = serde_json::from_value(payload).expect("deserialize status");

    // THEN: Accepted and pending
    assert_eq!(status.state, OperationState::Pending);
    assert!(status.is_success());
    assert!(status.is_pending());
    assert_eq!(status.operation_id.as_deref(), Some("4242"));
    assert_eq!(status.message, None);
}

#[test]
fn given_failed_status_when_inspected_then_not_success() {
    let status: OperationStatus =
        serde_json::from_value(json!({ "STATUS": "Failed", "MESSAGE": "locked" }))
            .expect("deserialize status");

    assert!(!status.is_success());
    assert!(!status.is_pending());
    assert_eq!(status.message.as_deref(), Some("locked"));
}

#[test]
fn given_unrecognized_status_when_deserialized_then_maps_to_unknown() {
    let status: OperationStatus =
        serde_json::from_value(json!({ "STATUS": "Queued" })).expect("deserialize status");

    assert_eq!(status.state, OperationState::Unknown);
    assert!(!status.is_success());
}
