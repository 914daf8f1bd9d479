use crate::{BodyForm, ContactBuilder, ModelError};

fn complete_builder() -> ContactBuilder {
    ContactBuilder::default()
        .with_name("barack", "obama")
        .with_address("1600 Pennsylvania Ave NW", "", "20500", "Washington")
        .with_area("DC")
        .with_country("US")
        .with_phone("2024561111")
        .with_email("barack.obama@gov.us")
        .with_language("EN")
}

/// **VALUE**: Verifies that a fully populated builder yields a contact.
///
/// **WHY THIS MATTERS**: The builder is the documented way to assemble a contact
/// for `contact_create`; if it rejects valid input, nothing can be created.
///
/// **BUG THIS CATCHES**: Would catch an over-eager rule (e.g. requiring `fax`).
#[test]
fn given_complete_fields_when_building_contact_then_succeeds() {
    // GIVEN: Builder with every required field
    let builder = complete_builder().with_owner(false);

    // WHEN: Building
    let result = builder.build();

    // THEN: Contact is produced with optional fields left empty
    let contact = result.expect("complete contact should build");
    assert_eq!(contact.first_name, "barack");
    assert_eq!(contact.body_form, BodyForm::Individual);
    assert!(contact.fax.is_empty());
    assert!(!contact.is_owner);
}

/// **VALUE**: Verifies that a missing last name is rejected.
///
/// **BUG THIS CATCHES**: Would catch if required-field checks are bypassed in `build()`.
#[test]
fn given_missing_last_name_when_building_then_returns_validation_error() {
    // GIVEN: Builder with an empty last name
    let builder = complete_builder().with_name("barack", "");

    // WHEN: Attempting to build
    let result = builder.build();

    // THEN: Should return validation error naming the field
    match result.unwrap_err() {
        ModelError::Validation { field, message, .. } => {
            assert_eq!(field, "last_name");
            assert_eq!(message, "is required");
        }
    }
}

/// **VALUE**: Verifies that organisations must carry a body name.
///
/// **WHY THIS MATTERS**: The registrar rejects ORG contacts without a company name;
/// catching it locally saves a round trip and gives a clearer error.
///
/// **BUG THIS CATCHES**: Would catch if the conditional body_name rule is dropped.
#[test]
fn given_organization_without_body_name_when_building_then_returns_validation_error() {
    // GIVEN: An organisation contact without its name
    let builder = complete_builder().with_body(BodyForm::Organization, "  ");

    // WHEN: Attempting to build
    let result = builder.build();

    // THEN: body_name is reported
    match result.unwrap_err() {
        ModelError::Validation { field, .. } => assert_eq!(field, "body_name"),
    }
}

#[test]
fn given_organization_with_body_name_when_building_then_succeeds() {
    let contact = complete_builder()
        .with_body(BodyForm::Organization, "Acme")
        .with_company_number("123 456 789")
        .with_vat_number("FR00123456789")
        .build()
        .expect("organisation with name should build");

    assert_eq!(contact.body_name, "Acme");
    assert_eq!(contact.vat_number, "FR00123456789");
}
