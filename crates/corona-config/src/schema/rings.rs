//! Ring pool configuration types.

use serde::{Deserialize, Serialize};

/// A half-open `[min, max)` sampling range. `min == max` yields the constant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FloatRange {
    pub min: f64,
    pub max: f64,
}

impl FloatRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Ring pool settings. Every ring parameter is drawn once from these
/// ranges when the scene is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RingsConfig {
    /// Number of rings in the pool (valid range: 1-5000).
    pub count: u32,
    /// Vertices per ring loop (valid range: 3-4096).
    pub segments: u32,
    /// RNG seed. A random seed is drawn and logged when absent.
    pub seed: Option<u64>,
    pub radius: FloatRange,
    pub amplitude: FloatRange,
    pub frequency: FloatRange,
    /// Modulation seeds are drawn from `[0, seed_range)`.
    pub seed_range: f64,
    pub opacity: FloatRange,
}

impl Default for RingsConfig {
    fn default() -> Self {
        Self {
            count: 1000,
            segments: 128,
            seed: None,
            radius: FloatRange::new(1.5, 4.5),
            amplitude: FloatRange::new(0.02, 0.10),
            frequency: FloatRange::new(2.0, 6.0),
            seed_range: 100.0,
            opacity: FloatRange::new(0.05, 0.25),
        }
    }
}
