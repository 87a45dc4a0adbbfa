//! Configuration schema types for Corona.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields fall back to the default sun-and-rings scene.

mod clock;
mod modulation;
mod palette;
mod rings;
mod sun;
mod system;

pub use clock::*;
pub use modulation::*;
pub use palette::*;
pub use rings::*;
pub use sun::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for a Corona scene.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct CoronaConfig {
    pub rings: RingsConfig,
    pub modulation: ModulationConfig,
    pub palette: PaletteConfig,
    pub sun: SunConfig,
    pub clock: ClockConfig,
    pub performance: PerformanceConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_correct_rings() {
        let config = CoronaConfig::default();
        assert_eq!(config.rings.count, 1000);
        assert_eq!(config.rings.segments, 128);
        assert_eq!(config.rings.seed, None);
        assert!((config.rings.radius.min - 1.5).abs() < f64::EPSILON);
        assert!((config.rings.radius.max - 4.5).abs() < f64::EPSILON);
        assert!((config.rings.amplitude.min - 0.02).abs() < f64::EPSILON);
        assert!((config.rings.amplitude.max - 0.10).abs() < f64::EPSILON);
        assert!((config.rings.frequency.min - 2.0).abs() < f64::EPSILON);
        assert!((config.rings.frequency.max - 6.0).abs() < f64::EPSILON);
        assert!((config.rings.seed_range - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn default_config_has_correct_modulation() {
        let config = CoronaConfig::default();
        let m = &config.modulation;
        assert!(m.enabled);
        assert!((m.floor - 0.0).abs() < f64::EPSILON);
        assert!((m.span - 1.0).abs() < f64::EPSILON);
        assert_eq!(m.terms.len(), 3);
        assert!((m.terms[0].weight - 0.4).abs() < f64::EPSILON);
        assert!((m.terms[1].rate - 0.13).abs() < f64::EPSILON);
        assert_eq!(m.terms[1].seed, 1);
        assert!((m.terms[2].seed_scale - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn default_config_has_correct_palette() {
        let config = CoronaConfig::default();
        let p = &config.palette;
        assert!(p.enabled);
        assert!((p.base_hue - 40.0).abs() < f64::EPSILON);
        assert!((p.hue_spread - 20.0).abs() < f64::EPSILON);
        assert!((p.hue_rate - 8.0).abs() < f64::EPSILON);
        assert!((p.saturation - 1.0).abs() < f64::EPSILON);
        assert!((p.lightness - 0.6).abs() < f64::EPSILON);
    }

    #[test]
    fn default_config_has_correct_sun() {
        let config = CoronaConfig::default();
        let s = &config.sun;
        assert!(s.enabled);
        assert_eq!(s.wave, SunWave::Sine);
        assert!((s.speed - 0.05).abs() < f64::EPSILON);
        assert!((s.exponent - 0.8).abs() < f64::EPSILON);
        assert!((s.edge_softness - 0.12).abs() < f64::EPSILON);
        assert_eq!(s.emissive_color, "#ffaa00");
    }

    #[test]
    fn default_config_has_correct_clock_and_perf() {
        let config = CoronaConfig::default();
        assert!((config.clock.step - 0.01).abs() < f64::EPSILON);
        assert!((config.clock.time_scale - 1.0).abs() < f64::EPSILON);
        assert_eq!(config.performance.frame_rate, 60);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[rings]
count = 250

[sun]
wave = "cosine"
"#;
        let config: CoronaConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.rings.count, 250);
        assert_eq!(config.rings.segments, 128);
        assert_eq!(config.sun.wave, SunWave::Cosine);
        assert!((config.sun.speed - 0.05).abs() < f64::EPSILON);
        assert_eq!(config.modulation.terms.len(), 3);
    }

    #[test]
    fn modulation_terms_from_toml_array() {
        let toml_str = r#"
[modulation]
floor = 0.5

[[modulation.terms]]
weight = 1.0
rate = 0.2

[[modulation.terms]]
weight = 0.5
rate = 0.4
seed = 1
"#;
        let config: CoronaConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.modulation.terms.len(), 2);
        assert_eq!(config.modulation.terms[0].seed, 0);
        assert!((config.modulation.terms[0].seed_scale - 1.0).abs() < f64::EPSILON);
        assert_eq!(config.modulation.terms[1].seed, 1);
        assert!((config.modulation.floor - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn ranges_from_inline_tables() {
        let toml_str = r#"
[rings]
radius = { min = 2.0, max = 2.0 }
"#;
        let config: CoronaConfig = toml::from_str(toml_str).unwrap();
        assert!((config.rings.radius.min - 2.0).abs() < f64::EPSILON);
        assert!((config.rings.radius.max - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_toml_gives_defaults() {
        let config: CoronaConfig = toml::from_str("").unwrap();
        assert_eq!(config.rings.count, 1000);
        assert!(config.palette.enabled);
    }
}
