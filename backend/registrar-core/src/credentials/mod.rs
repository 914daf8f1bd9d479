//! Credential resolution.
//!
//! Credentials come either fully from explicit arguments (identity and secret)
//! or fully from the credential source. Endpoint, locale and timeout always
//! come from the source. There is no partial-override mode.
//!
//! Resolution never touches the network.

pub mod source;

pub use source::{CredentialSource, FileSource, SourceFields, StaticSource};

use crate::error::RegistrarError;

use common::RedactedSecret;

use std::fmt;
use std::time::Duration;

use log::{debug, info};
use url::Url;

/// Operation name recorded on resolution errors.
pub const RESOLVE_OPERATION: &str = "resolveCredentials";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

// ============================================
// LOCALE
// ============================================

/// Language of registrar responses and messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Fr,
}

impl Locale {
    /// Map a configured value onto a recognized locale.
    ///
    /// Anything outside the recognized set, including absent or empty values,
    /// yields the default. This is a policy, not an error.
    pub fn resolve(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("EN") => Locale::En,
            Some("FR") => Locale::Fr,
            Some(other) => {
                debug!("Unrecognized language '{other}', using {}", Locale::default());
                Locale::default()
            }
            None => Locale::default(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "EN",
            Locale::Fr => "FR",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================
// CREDENTIALS
// ============================================

/// Resolved, immutable authentication material for one client.
#[derive(Debug, Clone)]
pub struct Credentials {
    identity: String,
    secret: RedactedSecret,
    endpoint: Url,
    locale: Locale,
}

impl Credentials {
    /// Build credentials directly, bypassing a source.
    ///
    /// # Errors
    ///
    /// Same field checks as [`CredentialResolver::resolve`].
    #[track_caller]
    pub fn new(
        identity: impl Into<String>,
        secret: impl Into<String>,
        endpoint: &str,
        locale: Locale,
    ) -> Result<Self, RegistrarError> {
        let identity = identity.into();
        let secret = RedactedSecret::new(secret);
        require_explicit(&identity, &secret)?;

        Ok(Self {
            identity,
            secret,
            endpoint: parse_endpoint(endpoint, "explicit endpoint")?,
            locale,
        })
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn secret(&self) -> &RedactedSecret {
        &self.secret
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }
}

// ============================================
// RESOLVER
// ============================================

/// Resolves [`Credentials`] against one loaded credential source.
#[derive(Debug)]
pub struct CredentialResolver {
    fields: SourceFields,
    origin: String,
}

impl CredentialResolver {
    /// Load the source once.
    ///
    /// # Errors
    ///
    /// Whatever [`CredentialSource::load`] reports; the source is required even
    /// when identity and secret are explicit, because the endpoint lives there.
    pub fn load(source: &dyn CredentialSource) -> Result<Self, RegistrarError> {
        Ok(Self {
            fields: source.load()?,
            origin: source.describe(),
        })
    }

    /// Resolve credentials from explicit arguments or the source, all-or-nothing.
    ///
    /// # Errors
    ///
    /// - [`RegistrarError::CredentialMissing`] if only one explicit argument is
    ///   given, an explicit argument is empty, or (source mode) login or
    ///   password is missing or empty
    /// - [`RegistrarError::ConfigInvalid`] if `url` is missing, empty or not an
    ///   absolute http(s) URL
    #[track_caller]
    pub fn resolve(
        &self,
        identity: Option<&str>,
        secret: Option<&str>,
    ) -> Result<Credentials, RegistrarError> {
        let (identity, secret) = match (identity, secret) {
            (Some(identity), Some(secret)) => {
                let secret = RedactedSecret::new(secret);
                require_explicit(identity, &secret)?;
                debug!("Using explicit credentials for '{identity}'");
                (identity.to_string(), secret)
            }
            (None, None) => self.source_identity()?,
            (Some(_), None) => {
                return Err(RegistrarError::credential_missing(
                    RESOLVE_OPERATION,
                    "identity given without secret; supply both or neither",
                ));
            }
            (None, Some(_)) => {
                return Err(RegistrarError::credential_missing(
                    RESOLVE_OPERATION,
                    "secret given without identity; supply both or neither",
                ));
            }
        };

        let url = match self.fields.url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => url,
            _ => {
                return Err(RegistrarError::config_invalid(
                    RESOLVE_OPERATION,
                    format!("Missing or empty url in {}", self.origin),
                ));
            }
        };
        let endpoint = parse_endpoint(url, &self.origin)?;
        let locale = Locale::resolve(self.fields.language.as_deref());

        info!(
            "Credentials resolved for '{identity}' ({} char secret) against {endpoint} [{locale}]",
            secret.len()
        );

        Ok(Credentials {
            identity,
            secret,
            endpoint,
            locale,
        })
    }

    /// Per-call transport timeout from the source, default 30s.
    ///
    /// # Errors
    ///
    /// [`RegistrarError::ConfigInvalid`] for unparseable or zero durations.
    #[track_caller]
    pub fn request_timeout(&self) -> Result<Duration, RegistrarError> {
        let Some(raw) = self.fields.timeout.as_deref() else {
            return Ok(DEFAULT_TIMEOUT);
        };

        let timeout = humantime::parse_duration(raw.trim()).map_err(|e| {
            RegistrarError::config_invalid(
                RESOLVE_OPERATION,
                format!("Invalid timeout '{raw}' in {}: {e}", self.origin),
            )
        })?;

        if timeout.is_zero() {
            return Err(RegistrarError::config_invalid(
                RESOLVE_OPERATION,
                format!("Timeout must be positive in {}", self.origin),
            ));
        }

        Ok(timeout)
    }

    #[track_caller]
    fn source_identity(&self) -> Result<(String, RedactedSecret), RegistrarError> {
        let login = self
            .fields
            .login
            .as_deref()
            .map(str::trim)
            .filter(|login| !login.is_empty())
            .ok_or_else(|| {
                RegistrarError::credential_missing(
                    RESOLVE_OPERATION,
                    format!("Missing or empty login in {}", self.origin),
                )
            })?;

        let password = self
            .fields
            .password
            .as_ref()
            .map(|p| p.expose().trim())
            .filter(|p| !p.is_empty())
            .ok_or_else(|| {
                RegistrarError::credential_missing(
                    RESOLVE_OPERATION,
                    format!("Missing or empty password in {}", self.origin),
                )
            })?;

        Ok((login.to_string(), RedactedSecret::new(password)))
    }
}

#[track_caller]
fn require_explicit(identity: &str, secret: &RedactedSecret) -> Result<(), RegistrarError> {
    if identity.trim().is_empty() {
        return Err(RegistrarError::credential_missing(
            RESOLVE_OPERATION,
            "Missing identity",
        ));
    }
    if secret.expose().trim().is_empty() {
        return Err(RegistrarError::credential_missing(
            RESOLVE_OPERATION,
            "Missing secret",
        ));
    }
    Ok(())
}

#[track_caller]
fn parse_endpoint(raw: &str, origin: &str) -> Result<Url, RegistrarError> {
    let endpoint = Url::parse(raw).map_err(|e| {
        RegistrarError::config_invalid(
            RESOLVE_OPERATION,
            format!("Invalid url '{raw}' in {origin}: {e}"),
        )
    })?;

    if !matches!(endpoint.scheme(), "http" | "https") {
        return Err(RegistrarError::config_invalid(
            RESOLVE_OPERATION,
            format!("Unsupported url scheme '{}' in {origin}", endpoint.scheme()),
        ));
    }

    Ok(endpoint)
}
