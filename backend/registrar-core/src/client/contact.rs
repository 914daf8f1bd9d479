//! Contact operations.

use crate::client::{RegistrarClient, decode, encode};
use crate::error::RegistrarError;
use crate::transport::{OperationRequest, RemoteInvoker};

use models::{Contact, ContactSnapshot, ContactUpdate, OperationStatus};

use log::{debug, info};

pub const CONTACT_CREATE: &str = "contactCreate";
pub const CONTACT_INFO: &str = "contactInfo";
pub const CONTACT_UPDATE: &str = "contactUpdate";
pub const CONTACT_OWNER_UPDATE: &str = "contactOwnerUpdate";
pub const CONTACT_DELETE: &str = "contactDelete";

impl<I: RemoteInvoker> RegistrarClient<I> {
    /// Create a contact and return its identifier.
    ///
    /// # Errors
    ///
    /// [`RegistrarError::Validation`] before any request if `contact` breaks
    /// the required-field policy; otherwise any fault of the call.
    pub fn contact_create(&mut self, contact: &Contact) -> Result<String, RegistrarError> {
        contact
            .validate()
            .map_err(|e| RegistrarError::from_model(CONTACT_CREATE, e))?;

        let request = encode(
            OperationRequest::new(CONTACT_CREATE).with_param(contact),
            CONTACT_CREATE,
        )?;
        let id: String = decode(CONTACT_CREATE, self.call(request)?)?;

        info!("Contact created: {id}");
        Ok(id)
    }

    /// Fetch the full record of a contact.
    ///
    /// Unknown identifiers surface as an application fault refined as
    /// not-found, exactly as the registrar reports them.
    pub fn contact_info(&mut self, id: &str) -> Result<ContactSnapshot, RegistrarError> {
        require_identifier(CONTACT_INFO, id)?;

        let request = encode(
            OperationRequest::new(CONTACT_INFO).with_param(id),
            CONTACT_INFO,
        )?;
        let snapshot = decode(CONTACT_INFO, self.call(request)?)?;

        debug!("Contact {id} fetched");
        Ok(snapshot)
    }

    /// Apply a partial edit to a contact.
    pub fn contact_update(
        &mut self,
        id: &str,
        update: &ContactUpdate,
    ) -> Result<OperationStatus, RegistrarError> {
        self.edit(CONTACT_UPDATE, id, update)
    }

    /// Apply a partial edit to an owner contact.
    ///
    /// Owner contacts go through a dedicated registrar method because the
    /// change may require holder confirmation; expect a pending status.
    pub fn contact_owner_update(
        &mut self,
        id: &str,
        update: &ContactUpdate,
    ) -> Result<OperationStatus, RegistrarError> {
        self.edit(CONTACT_OWNER_UPDATE, id, update)
    }

    /// Delete a contact.
    pub fn contact_delete(&mut self, id: &str) -> Result<OperationStatus, RegistrarError> {
        require_identifier(CONTACT_DELETE, id)?;

        let request = encode(
            OperationRequest::new(CONTACT_DELETE).with_param(id),
            CONTACT_DELETE,
        )?;
        let status: OperationStatus = decode(CONTACT_DELETE, self.call(request)?)?;

        info!("Contact {id} delete: {:?}", status.state);
        Ok(status)
    }

    fn edit(
        &mut self,
        operation: &'static str,
        id: &str,
        update: &ContactUpdate,
    ) -> Result<OperationStatus, RegistrarError> {
        require_identifier(operation, id)?;
        update
            .validate()
            .map_err(|e| RegistrarError::from_model(operation, e))?;

        let request = encode(
            OperationRequest::new(operation)
                .with_param(id)
                .and_then(|r| r.with_param(update)),
            operation,
        )?;
        let status: OperationStatus = decode(operation, self.call(request)?)?;

        info!("Contact {id} {operation}: {:?}", status.state);
        Ok(status)
    }
}

#[track_caller]
fn require_identifier(operation: &'static str, id: &str) -> Result<(), RegistrarError> {
    if id.trim().is_empty() {
        return Err(RegistrarError::validation(
            operation,
            "id",
            "contact identifier is required",
        ));
    }
    Ok(())
}
