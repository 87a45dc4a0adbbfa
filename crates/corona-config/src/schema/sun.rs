//! Sun phase effect configuration types.

use serde::{Deserialize, Serialize};

/// Base oscillator of the sun's phase sweep.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum SunWave {
    #[default]
    Sine,
    Cosine,
}

/// Sun settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SunConfig {
    pub enabled: bool,
    pub wave: SunWave,
    /// Phase sweep speed (radians per time unit).
    pub speed: f64,
    /// Shaping exponent applied to the raw cycle (`sign(c) * |c|^exponent`).
    pub exponent: f64,
    /// How far the cutoff travels from the disc center (in UV units).
    pub sweep: f64,
    /// Half-width of the soft lit/unlit boundary.
    pub edge_softness: f64,
    pub color: String,
    pub emissive_color: String,
    pub pulse_amount: f64,
    pub pulse_rate: f64,
}

impl Default for SunConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            wave: SunWave::Sine,
            speed: 0.05,
            exponent: 0.8,
            sweep: 0.4,
            edge_softness: 0.12,
            color: "#ffcc00".into(),
            emissive_color: "#ffaa00".into(),
            pulse_amount: 0.2,
            pulse_rate: 1.5,
        }
    }
}
