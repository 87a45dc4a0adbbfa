//! Validated, immutable ring parameters.

use corona_common::RingError;
use serde::Serialize;

/// Wave parameters of one ring, fixed at creation.
///
/// Fields are private so a constructed value is always valid: finite,
/// positive radius and frequency, non-negative amplitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RingParams {
    radius: f32,
    amplitude: f32,
    frequency: f32,
    phase: f32,
    seeds: [f32; 2],
    opacity: f32,
}

impl RingParams {
    /// Create parameters with zero modulation seeds and full opacity.
    pub fn new(radius: f32, amplitude: f32, frequency: f32, phase: f32) -> Result<Self, RingError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(RingError::InvalidRadius(radius));
        }
        if !amplitude.is_finite() || amplitude < 0.0 {
            return Err(RingError::InvalidAmplitude(amplitude));
        }
        if !frequency.is_finite() || frequency <= 0.0 {
            return Err(RingError::InvalidFrequency(frequency));
        }
        if !phase.is_finite() {
            return Err(RingError::NonFinitePhase(phase));
        }
        Ok(Self {
            radius,
            amplitude,
            frequency,
            phase,
            seeds: [0.0, 0.0],
            opacity: 1.0,
        })
    }

    /// Attach the two amplitude-modulation seeds.
    pub fn with_seeds(mut self, seeds: [f32; 2]) -> Result<Self, RingError> {
        if let Some(bad) = seeds.iter().copied().find(|s| !s.is_finite()) {
            return Err(RingError::NonFiniteSeed(bad));
        }
        self.seeds = seeds;
        Ok(self)
    }

    pub fn with_opacity(mut self, opacity: f32) -> Result<Self, RingError> {
        if !(0.0..=1.0).contains(&opacity) {
            return Err(RingError::InvalidOpacity(opacity));
        }
        self.opacity = opacity;
        Ok(self)
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn amplitude(&self) -> f32 {
        self.amplitude
    }

    pub fn frequency(&self) -> f32 {
        self.frequency
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn seeds(&self) -> [f32; 2] {
        self.seeds
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }
}
