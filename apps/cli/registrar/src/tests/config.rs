use crate::config::{default_config_path, resolve_config_path};

use std::path::Path;

/// **VALUE**: Verifies an explicit path wins over the per-user default.
#[test]
fn given_explicit_path_when_resolving_config_then_uses_it() {
    let path = resolve_config_path(Some(Path::new("/etc/registrar/alt.toml"))).unwrap();

    assert_eq!(path, Path::new("/etc/registrar/alt.toml"));
}

/// **VALUE**: Verifies the default location layout.
#[test]
fn given_no_explicit_path_when_resolving_config_then_uses_app_config_dir() {
    if let Some(default) = default_config_path() {
        assert!(default.ends_with("registrar/registrar.toml"));
        assert_eq!(resolve_config_path(None).unwrap(), default);
    }
}
