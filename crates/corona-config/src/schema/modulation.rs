//! Amplitude modulation ("breathing") configuration types.

use serde::{Deserialize, Serialize};

/// One slow sine wave contributing to a ring's amplitude breathing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModulationTermConfig {
    pub weight: f64,
    /// Angular rate in radians per time unit.
    pub rate: f64,
    /// Which of the ring's two seeds offsets this wave (0 or 1).
    pub seed: u32,
    /// Multiplier applied to the seed before it is used as a phase.
    pub seed_scale: f64,
}

impl Default for ModulationTermConfig {
    fn default() -> Self {
        Self {
            weight: 1.0,
            rate: 0.1,
            seed: 0,
            seed_scale: 1.0,
        }
    }
}

impl ModulationTermConfig {
    pub fn new(weight: f64, rate: f64, seed: u32, seed_scale: f64) -> Self {
        Self {
            weight,
            rate,
            seed,
            seed_scale,
        }
    }
}

/// Amplitude modulation settings.
///
/// The summed waves are normalised into a level in `[0, 1]`; the ring's
/// effective amplitude is `amplitude * (floor + span * level)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModulationConfig {
    pub enabled: bool,
    pub floor: f64,
    pub span: f64,
    pub terms: Vec<ModulationTermConfig>,
}

impl Default for ModulationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            floor: 0.0,
            span: 1.0,
            terms: vec![
                ModulationTermConfig::new(0.4, 0.07, 0, 1.0),
                ModulationTermConfig::new(0.3, 0.13, 1, 1.0),
                ModulationTermConfig::new(0.3, 0.21, 0, 0.5),
            ],
        }
    }
}
