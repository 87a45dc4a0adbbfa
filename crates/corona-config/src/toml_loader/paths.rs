//! Where the config file lives, and writing the documented default.

use corona_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::info;

use super::template::default_config_toml;

const APP_DIR: &str = "corona";
const FILE_NAME: &str = "config.toml";

/// `<platform config dir>/corona/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(FILE_NAME))
        .ok_or_else(|| ConfigError::ParseError("no platform config directory available".into()))
}

/// An explicit path wins; otherwise the platform default.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => default_config_path(),
    }
}

/// Write the commented template to `path`, creating parent directories.
///
/// An existing file is only replaced when `overwrite` is set.
pub fn create_default_config(path: &Path, overwrite: bool) -> Result<(), ConfigError> {
    if path.exists() && !overwrite {
        return Err(ConfigError::AlreadyExists(path.to_path_buf()));
    }

    let io_err = |action: &str, target: &Path, e: std::io::Error| {
        ConfigError::ParseError(format!("failed to {action} {}: {e}", target.display()))
    };

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|e| io_err("create directory", dir, e))?;
    }
    std::fs::write(path, default_config_toml()).map_err(|e| io_err("write", path, e))?;

    info!(path = %path.display(), "wrote default config");
    Ok(())
}
