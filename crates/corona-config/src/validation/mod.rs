//! Full configuration validation.
//!
//! Validates numeric ranges, sampling range ordering and color formats.
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod misc;
mod modulation;
mod palette;
mod rings;
mod sun;


use crate::schema::CoronaConfig;
use corona_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &CoronaConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    rings::validate_rings(&mut errors, config);
    modulation::validate_modulation(&mut errors, config);
    palette::validate_palette(&mut errors, config);
    sun::validate_sun(&mut errors, config);
    misc::validate_clock(&mut errors, config);
    misc::validate_performance(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
