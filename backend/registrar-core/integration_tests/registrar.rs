use crate::helpers::{FakeRegistrar, fake_credentials, sample_contact};

use registrar_core::{Credentials, ErrorKind, Locale, RegistrarClient, SessionState};

use models::{ContactUpdate, OperationState};

// ============================================================================
// Contact lifecycle against an in-memory registrar
// ============================================================================

fn connect(registrar: &FakeRegistrar) -> RegistrarClient<FakeRegistrar> {
    RegistrarClient::with_invoker(fake_credentials(), registrar.clone())
}

/// **VALUE**: Verifies create, read, update, delete on one session.
///
/// **WHY THIS MATTERS**: This is the everyday path: a caller creates a
/// contact, reads it back and edits it without ever managing sessions.
#[test]
fn given_valid_contact_when_running_full_lifecycle_then_every_step_succeeds() {
    // GIVEN
    let registrar = FakeRegistrar::new();
    let mut client = connect(&registrar);
    let contact = sample_contact();

    // WHEN: Create then read back
    let id = client.contact_create(&contact).unwrap();
    let snapshot = client.contact_info(&id).unwrap();

    // THEN: Same record, with its identifier
    assert_eq!(snapshot.id, id);
    assert_eq!(snapshot.contact, contact);

    // WHEN: Partial update
    let update = ContactUpdate {
        city: Some("Chicago".into()),
        ..ContactUpdate::default()
    };
    let status = client.contact_update(&id, &update).unwrap();

    // THEN: Only the city changed
    assert_eq!(status.state, OperationState::Done);
    let updated = client.contact_info(&id).unwrap();
    assert_eq!(updated.contact.city, "Chicago");
    assert_eq!(updated.contact.first_name, "barack");

    // WHEN: Delete
    client.contact_delete(&id).unwrap();

    // THEN: Gone, and reported as not found
    let err = client.contact_info(&id).unwrap_err();
    assert!(err.is_not_found());
    assert!(registrar.stored(&id).is_none());
    assert_eq!(registrar.count("sessionOpen"), 1);
}

/// **VALUE**: Verifies owner edits go through the owner method and come back pending.
#[test]
fn given_owner_contact_when_owner_update_then_pending() {
    let registrar = FakeRegistrar::new();
    let mut client = connect(&registrar);
    let mut contact = sample_contact();
    contact.is_owner = true;
    let id = client.contact_create(&contact).unwrap();

    let status = client
        .contact_owner_update(
            &id,
            &ContactUpdate {
                phone: Some("2024561414".into()),
                ..ContactUpdate::default()
            },
        )
        .unwrap();

    assert!(status.is_pending());
    assert_eq!(registrar.count("contactOwnerUpdate"), 1);
    assert_eq!(registrar.stored(&id).unwrap()["isOwner"], 1);
}

/// **VALUE**: Verifies a server-side session expiry between calls is invisible to the caller.
///
/// **BUG THIS CATCHES**: Would catch the client keeping a dead handle and
/// failing every call after the registrar's idle timeout.
#[test]
fn given_expired_session_when_calling_then_client_recovers_transparently() {
    // GIVEN: A created contact, then the registrar drops all sessions
    let registrar = FakeRegistrar::new();
    let mut client = connect(&registrar);
    let id = client.contact_create(&sample_contact()).unwrap();
    registrar.expire_sessions();

    // WHEN
    let snapshot = client.contact_info(&id).unwrap();

    // THEN
    assert_eq!(snapshot.id, id);
    assert_eq!(registrar.count("sessionOpen"), 2);
    assert_eq!(registrar.live_sessions(), 1);
}

/// **VALUE**: Verifies dropping the client logs out, on success and on error paths.
#[test]
fn given_open_client_when_dropped_after_error_then_session_is_closed() {
    let registrar = FakeRegistrar::new();
    {
        let mut client = connect(&registrar);
        let err = client.contact_delete("MISSING").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(registrar.live_sessions(), 1);
    }

    assert_eq!(registrar.live_sessions(), 0);
    assert_eq!(registrar.count("sessionClose"), 1);
}

/// **VALUE**: Verifies explicit close followed by drop sends a single logout.
#[test]
fn given_closed_client_when_dropped_then_no_second_logout() {
    let registrar = FakeRegistrar::new();
    let mut client = connect(&registrar);
    client.session_open().unwrap();

    client.close();
    assert_eq!(client.session_state(), SessionState::Closed);
    drop(client);

    assert_eq!(registrar.count("sessionClose"), 1);
}

/// **VALUE**: Verifies wrong credentials fail on first use and nothing else is sent.
#[test]
fn given_wrong_password_when_calling_then_authentication_failed() {
    let registrar = FakeRegistrar::new();
    let credentials =
        Credentials::new("RESELLER01", "wrong", "https://registrar.test/rpc", Locale::En).unwrap();
    let mut client = RegistrarClient::with_invoker(credentials, registrar.clone());

    let err = client.contact_info("ANY").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::AuthenticationFailed);
    assert_eq!(registrar.log(), vec!["sessionOpen"]);
    drop(client);
    assert_eq!(registrar.count("sessionClose"), 0);
}
