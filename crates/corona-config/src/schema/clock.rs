//! Scene clock configuration types.

use serde::{Deserialize, Serialize};

/// Fixed-step clock settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    /// Time added per tick (valid range: (0, 1]).
    pub step: f64,
    /// Multiplier applied to every advance.
    pub time_scale: f64,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            step: 0.01,
            time_scale: 1.0,
        }
    }
}
