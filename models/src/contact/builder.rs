use crate::contact::{BodyForm, Contact};
use crate::error::model_error::ModelError;

/// Builder for creating validated [`Contact`] records.
///
/// Unset text fields default to empty strings; `build()` applies the
/// required-field policy.
#[derive(Debug, Default)]
pub struct ContactBuilder {
    contact: Contact,
}

impl ContactBuilder {
    pub fn with_name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.contact.first_name = first_name.into();
        self.contact.last_name = last_name.into();
        self
    }

    /// Set the legal form, and the organisation name for anything but individuals.
    pub fn with_body(mut self, form: BodyForm, name: impl Into<String>) -> Self {
        self.contact.body_form = form;
        self.contact.body_name = name.into();
        self
    }

    pub fn with_address(
        mut self,
        address1: impl Into<String>,
        address2: impl Into<String>,
        zip_code: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        self.contact.address1 = address1.into();
        self.contact.address2 = address2.into();
        self.contact.zip_code = zip_code.into();
        self.contact.city = city.into();
        self
    }

    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.contact.area = area.into();
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.contact.country = country.into();
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.contact.phone = phone.into();
        self
    }

    pub fn with_fax(mut self, fax: impl Into<String>) -> Self {
        self.contact.fax = fax.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.contact.email = email.into();
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.contact.language = language.into();
        self
    }

    pub fn with_owner(mut self, is_owner: bool) -> Self {
        self.contact.is_owner = is_owner;
        self
    }

    pub fn with_company_number(mut self, company_number: impl Into<String>) -> Self {
        self.contact.company_number = company_number.into();
        self
    }

    pub fn with_vat_number(mut self, vat_number: impl Into<String>) -> Self {
        self.contact.vat_number = vat_number.into();
        self
    }

    /// Build the contact with validation.
    #[track_caller]
    pub fn build(self) -> Result<Contact, ModelError> {
        self.contact.validate()?;
        Ok(self.contact)
    }
}
