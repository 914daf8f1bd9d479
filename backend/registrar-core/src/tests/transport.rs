// Unit tests for request building

use crate::transport::OperationRequest;

use serde_json::json;

/// **VALUE**: Verifies parameters are kept in call order with their JSON shape.
#[test]
fn given_params_when_building_request_then_order_is_preserved() {
    let request = OperationRequest::new("contactUpdate")
        .with_param("BO001")
        .and_then(|r| r.with_param(&json!({ "city": "Paris" })))
        .unwrap();

    assert_eq!(request.method, "contactUpdate");
    assert_eq!(request.params, vec![json!("BO001"), json!({ "city": "Paris" })]);
}
