//! Corona configuration system.
//!
//! TOML-based configuration for the ring scene. Every section uses serde
//! defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use corona_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{CoronaConfig, CONFIG_SCHEMA_VERSION};

use corona_common::ConfigError;
use std::path::Path;

/// Load and validate the config.
///
/// With `path = None` the platform default location is used and a
/// documented default file is created if none exists.
pub fn load_config(path: Option<&Path>) -> Result<CoronaConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &CoronaConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
