use crate::{BodyForm, Contact, ContactSnapshot, ContactUpdate};

use serde_json::json;

/// **VALUE**: Verifies the camelCase wire names and the 0/1 owner flag.
///
/// **WHY THIS MATTERS**: The registrar matches fields by name; a snake_case key is
/// silently ignored and the contact is created with blanks.
///
/// **BUG THIS CATCHES**: Would catch removal of `rename_all` or the owner flag serializer.
#[test]
fn given_contact_when_serialized_then_uses_wire_field_names() {
    // GIVEN: An owner contact
    let contact = Contact {
        first_name: "elon".into(),
        body_form: BodyForm::Association,
        zip_code: "18022".into(),
        is_owner: true,
        ..Contact::default()
    };

    // WHEN: Serializing
    let value = serde_json::to_value(&contact).expect("serialize contact");

    // THEN: Keys and encodings match the registrar contract
    assert_eq!(value["firstName"], "elon");
    assert_eq!(value["bodyForm"], "ASS");
    assert_eq!(value["zipCode"], "18022");
    assert_eq!(value["isOwner"], 1);
    assert_eq!(value["fax"], "");
}

/// **VALUE**: Verifies that a `contactInfo` payload deserializes into a snapshot.
///
/// **BUG THIS CATCHES**: Would catch a broken `flatten` or an owner flag that only
/// accepts one encoding.
#[test]
fn given_contact_info_payload_when_deserialized_then_builds_snapshot() {
    // GIVEN: A backend payload with extra unknown fields and a string owner flag
    let payload = json!({
        "idContact": "BJ007",
        "firstName": "james",
        "lastName": "bond",
        "bodyForm": "IND",
        "country": "GB",
        "isOwner": "0",
        "editableFields": "phone,email"
    });

    // WHEN: Deserializing
    let snapshot: ContactSnapshot = serde_json::from_value(payload).expect("deserialize snapshot");

    // THEN: Identifier and fields are populated, missing fields default to empty
    assert_eq!(snapshot.id, "BJ007");
    assert_eq!(snapshot.contact.last_name, "bond");
    assert_eq!(snapshot.contact.country, "GB");
    assert!(!snapshot.contact.is_owner);
    assert!(snapshot.contact.address1.is_empty());
}

#[test]
fn given_partial_update_when_serialized_then_only_set_fields_are_sent() {
    let update = ContactUpdate {
        phone: Some("0102030405".into()),
        ..ContactUpdate::default()
    };

    let value = serde_json::to_value(&update).expect("serialize update");

    assert_eq!(value, json!({ "phone": "0102030405" }));
}

/// **VALUE**: Verifies update input is strict about field names.
///
/// **BUG THIS CATCHES**: Would catch a typo such as `zipcode` being dropped,
/// leaving an update that silently changes nothing.
#[test]
fn given_update_payload_with_unknown_key_when_deserialized_then_fails() {
    let valid: Result<ContactUpdate, _> = serde_json::from_value(json!({ "zipCode": "75001" }));
    let typo: Result<ContactUpdate, _> = serde_json::from_value(json!({ "zipcode": "75001" }));

    assert_eq!(valid.unwrap().zip_code.as_deref(), Some("75001"));
    assert!(typo.is_err());
}
