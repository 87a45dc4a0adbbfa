//! Per-vertex color pass configuration.

use serde::{Deserialize, Serialize};

/// Hue animation settings for the ring color pass.
///
/// `hue = base_hue + hue_spread * sin(t * hue_rate + angle + phase)` in degrees,
/// converted with HSL at the given saturation and lightness.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Recompute colors every tick. When off, the initial palette is kept.
    pub enabled: bool,
    pub base_hue: f64,
    pub hue_spread: f64,
    pub hue_rate: f64,
    pub saturation: f64,
    pub lightness: f64,
    /// Random hue jitter (degrees) of the initial rainbow palette.
    pub initial_jitter: f64,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_hue: 40.0,
            hue_spread: 20.0,
            hue_rate: 8.0,
            saturation: 1.0,
            lightness: 0.6,
            initial_jitter: 30.0,
        }
    }
}
