//! Required-field policy for contacts.
//!
//! Checked locally so that obviously incomplete records never cost a round trip.
//!
//! | Field        | Policy                                   |
//! |--------------|------------------------------------------|
//! | first_name   | required                                 |
//! | last_name    | required                                 |
//! | body_name    | required unless body_form is IND         |
//! | address1     | required                                 |
//! | zip_code     | required                                 |
//! | city         | required                                 |
//! | country      | required, two uppercase letters          |
//! | phone        | required                                 |
//! | email        | required, `local@domain.tld` shape       |
//! | language     | required, two letters                    |
//! | everything else | optional                              |

use crate::contact::{BodyForm, Contact, ContactUpdate};
use crate::error::model_error::ModelError;

use std::sync::OnceLock;

use regex::Regex;

const COUNTRY_PATTERN: &str = r"^[A-Z]{2}$";
const LANGUAGE_PATTERN: &str = r"^[A-Za-z]{2}$";
const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

static COUNTRY_REGEX: OnceLock<Regex> = OnceLock::new();
static LANGUAGE_REGEX: OnceLock<Regex> = OnceLock::new();
static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn country_regex() -> &'static Regex {
    COUNTRY_REGEX.get_or_init(|| Regex::new(COUNTRY_PATTERN).expect("valid regex pattern"))
}

fn language_regex() -> &'static Regex {
    LANGUAGE_REGEX.get_or_init(|| Regex::new(LANGUAGE_PATTERN).expect("valid regex pattern"))
}

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("valid regex pattern"))
}

impl Contact {
    /// Validate the record against the required-field policy.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Validation`] naming the first offending field.
    #[track_caller]
    pub fn validate(&self) -> Result<(), ModelError> {
        require("first_name", &self.first_name)?;
        require("last_name", &self.last_name)?;

        if self.body_form != BodyForm::Individual {
            require("body_name", &self.body_name)?;
        }

        require("address1", &self.address1)?;
        require("zip_code", &self.zip_code)?;
        require("city", &self.city)?;
        check_country(&self.country)?;
        require("phone", &self.phone)?;
        check_email(&self.email)?;
        check_language(&self.language)?;

        Ok(())
    }
}

impl ContactUpdate {
    /// Validate a partial edit.
    ///
    /// An edit must change something, and may not blank out a required field.
    #[track_caller]
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.is_empty() {
            return Err(ModelError::validation(
                "contact",
                "update must set at least one field",
            ));
        }

        let required = [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("address1", &self.address1),
            ("zip_code", &self.zip_code),
            ("city", &self.city),
            ("phone", &self.phone),
        ];
        for (field, value) in required {
            if let Some(value) = value {
                require(field, value)?;
            }
        }

        let needs_body_name = matches!(self.body_form, Some(form) if form != BodyForm::Individual);
        if let (true, Some(body_name)) = (needs_body_name, &self.body_name) {
            require("body_name", body_name)?;
        }

        if let Some(country) = &self.country {
            check_country(country)?;
        }
        if let Some(email) = &self.email {
            check_email(email)?;
        }
        if let Some(language) = &self.language {
            check_language(language)?;
        }

        Ok(())
    }
}

#[track_caller]
fn require(field: &'static str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::validation(field, "is required"));
    }
    Ok(())
}

#[track_caller]
fn check_country(country: &str) -> Result<(), ModelError> {
    require("country", country)?;
    if !country_regex().is_match(country) {
        return Err(ModelError::validation(
            "country",
            format!("expected a two-letter uppercase code, got '{country}'"),
        ));
    }
    Ok(())
}

#[track_caller]
fn check_email(email: &str) -> Result<(), ModelError> {
    require("email", email)?;
    if !email_regex().is_match(email) {
        return Err(ModelError::validation(
            "email",
            format!("'{email}' is not an email address"),
        ));
    }
    Ok(())
}

#[track_caller]
fn check_language(language: &str) -> Result<(), ModelError> {
    require("language", language)?;
    if !language_regex().is_match(language) {
        return Err(ModelError::validation(
            "language",
            format!("expected a two-letter code, got '{language}'"),
        ));
    }
    Ok(())
}
