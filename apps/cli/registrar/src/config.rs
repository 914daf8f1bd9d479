//! Locating the credential file.

use registrar_core::RegistrarError;
use registrar_core::credentials::RESOLVE_OPERATION;

use std::path::{Path, PathBuf};

use log::debug;

/// Environment variable naming the credential file.
pub const CONFIG_ENV: &str = "REGISTRAR_CONFIG";

/// Environment variable holding the account secret
pub const SECRET_ENV: &str = "REGISTRAR_SECRET";

const APP_DIR: &str = "registrar";
const CONFIG_FILE_NAME: &str = "registrar.toml";

/// The credential file to use: `explicit` if given, else the per-user default.
///
/// `explicit` already reflects `--config` and `REGISTRAR_CONFIG`.
///
/// # Errors
///
/// [`RegistrarError::ConfigMissing`] when no explicit path is given and the
/// platform has no configuration directory.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf, RegistrarError> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    let path = default_config_path().ok_or_else(|| {
        RegistrarError::config_missing(
            RESOLVE_OPERATION,
            format!("No configuration directory; pass --config or set {CONFIG_ENV}"),
            None,
        )
    })?;
    debug!("Using default credential file {}", path.display());
    Ok(path)
}

/// `<config dir>/registrar/registrar.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE_NAME))
}
