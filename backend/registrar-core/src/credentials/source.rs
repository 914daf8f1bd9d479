//! Fallback configuration sources for credential resolution.
//!
//! The source is always handed to the resolver explicitly; nothing here looks
//! at ambient locations on its own.

use crate::credentials::RESOLVE_OPERATION;
use crate::error::RegistrarError;

use common::RedactedSecret;

use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Deserialize;

/// Raw fields as read from a credential source. Any of them may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceFields {
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub password: Option<RedactedSecret>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    /// Per-call transport timeout, humantime syntax (`"30s"`, `"1m 30s"`).
    #[serde(default)]
    pub timeout: Option<String>,
}

/// Where the fallback configuration comes from.
pub trait CredentialSource {
    /// Read the fields.
    ///
    /// # Errors
    ///
    /// [`RegistrarError::ConfigMissing`] when the source does not exist,
    /// [`RegistrarError::ConfigInvalid`] when it cannot be parsed.
    fn load(&self) -> Result<SourceFields, RegistrarError>;

    /// Human-readable origin for error messages.
    fn describe(&self) -> String;
}

/// A TOML credential file at an explicit path.
///
/// ```toml
/// login = "RESELLER01"
/// password = "secret"
/// url = "https://api.registrar.example/rpc"
/// language = "FR"
/// timeout = "30s"
/// ```
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialSource for FileSource {
    fn load(&self) -> Result<SourceFields, RegistrarError> {
        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            let message = if e.kind() == IoErrorKind::NotFound {
                format!("Missing credential file {}", self.path.display())
            } else {
                format!("Cannot read credential file {}", self.path.display())
            };
            RegistrarError::config_missing(RESOLVE_OPERATION, message, Some(e))
        })?;

        let fields: SourceFields = toml::from_str(&contents).map_err(|e| {
            RegistrarError::config_invalid(
                RESOLVE_OPERATION,
                format!("{}: {}", self.path.display(), e),
            )
        })?;

        info!("Credential source loaded from {}", self.path.display());
        Ok(fields)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Fields supplied in memory, for embedding applications and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    fields: SourceFields,
}

impl StaticSource {
    pub fn new(fields: SourceFields) -> Self {
        Self { fields }
    }

    pub fn with_login(mut self, login: impl Into<String>) -> Self {
        self.fields.login = Some(login.into());
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.fields.password = Some(RedactedSecret::new(password));
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.fields.url = Some(url.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.fields.language = Some(language.into());
        self
    }

    pub fn with_timeout(mut self, timeout: impl Into<String>) -> Self {
        self.fields.timeout = Some(timeout.into());
        self
    }
}

impl CredentialSource for StaticSource {
    fn load(&self) -> Result<SourceFields, RegistrarError> {
        debug!("Using in-memory credential source");
        Ok(self.fields.clone())
    }

    fn describe(&self) -> String {
        String::from("in-memory source")
    }
}
