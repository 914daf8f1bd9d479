use crate::{Contact, ContactUpdate, ModelError};

fn field_of(error: ModelError) -> &'static str {
    match error {
        ModelError::Validation { field, .. } => field,
    }
}

fn valid_contact() -> Contact {
    Contact {
        first_name: "bill".into(),
        last_name: "gates".into(),
        address1: "1 hollywood bvd".into(),
        zip_code: "18022".into(),
        area: "LA".into(),
        city: "Los Angeles".into(),
        country: "US".into(),
        phone: "2024531111".into(),
        email: "bill.gates@microsoft.com".into(),
        language: "EN".into(),
        is_owner: true,
        ..Contact::default()
    }
}

/// **VALUE**: Verifies that malformed country codes are rejected.
///
/// **BUG THIS CATCHES**: Would catch a regex that accepts lowercase or three-letter codes.
#[test]
fn given_bad_country_codes_when_validated_then_country_is_reported() {
    for country in ["us", "USA", "U", "1A"] {
        // GIVEN: A contact with an invalid country
        let contact = Contact {
            country: country.into(),
            ..valid_contact()
        };

        // WHEN / THEN: country is the offending field
        assert_eq!(field_of(contact.validate().unwrap_err()), "country", "{country}");
    }
}

#[test]
fn given_bad_email_when_validated_then_email_is_reported() {
    for email in ["plainaddress", "a@b", "a b@c.d", "@example.com"] {
        let contact = Contact {
            email: email.into(),
            ..valid_contact()
        };

        assert_eq!(field_of(contact.validate().unwrap_err()), "email", "{email}");
    }
}

#[test]
fn given_valid_contact_when_validated_then_passes() {
    assert!(valid_contact().validate().is_ok());
}

/// **VALUE**: Verifies that an empty update is refused.
///
/// **WHY THIS MATTERS**: Sending an update that changes nothing still opens a
/// session and costs a backend operation.
///
/// **BUG THIS CATCHES**: Would catch if `is_empty()` drifts out of sync with the fields.
#[test]
fn given_empty_update_when_validated_then_returns_validation_error() {
    // GIVEN: An update with nothing set
    let update = ContactUpdate::default();

    // WHEN: Validating
    let result = update.validate();

    // THEN: Rejected as a whole-record problem
    assert_eq!(field_of(result.unwrap_err()), "contact");
}

#[test]
fn given_update_blanking_required_field_when_validated_then_returns_validation_error() {
    let update = ContactUpdate {
        city: Some(String::new()),
        ..ContactUpdate::default()
    };

    assert_eq!(field_of(update.validate().unwrap_err()), "city");
}

#[test]
fn given_partial_update_when_validated_then_passes() {
    let update = ContactUpdate {
        phone: Some("0102030405".into()),
        email: Some("new@example.fr".into()),
        ..ContactUpdate::default()
    };

    assert!(update.validate().is_ok());
    assert!(!update.is_empty());
}
