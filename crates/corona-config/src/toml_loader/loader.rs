//! Reading and parsing config files.

use crate::schema::CoronaConfig;
use crate::validation;
use corona_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Parse TOML text into a config. Missing sections and fields take their
/// defaults. `origin` only labels log output.
pub fn parse_config(text: &str, origin: &Path) -> Result<CoronaConfig, ConfigError> {
    let config: CoronaConfig = toml::from_str(text).map_err(|e| {
        ConfigError::ParseError(format!("{}: {e}", origin.display()))
    })?;

    // Lenient here; `load_config` is the strict entry point.
    if let Err(e) = validation::validate(&config) {
        warn!(origin = %origin.display(), "config has invalid values: {e}");
    }
    Ok(config)
}

/// Load config from a TOML file.
pub fn load_from_path(path: &Path) -> Result<CoronaConfig, ConfigError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "failed to read {}: {e}",
                path.display()
            )))
        }
    };

    let config = parse_config(&text, path)?;
    info!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Load config from [`default_config_path`], writing the documented
/// template there first if nothing exists yet.
pub fn load_default() -> Result<CoronaConfig, ConfigError> {
    let path = default_config_path()?;
    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            create_default_config(&path, false)?;
            Ok(CoronaConfig::default())
        }
        other => other,
    }
}
