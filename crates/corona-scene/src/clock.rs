//! Scene clock.
//!
//! The scene has no timer of its own. Hosts either tick a fixed step per
//! displayed frame (`0.01` by default) or feed real
//! frame deltas through [`SceneClock::advance`].

use corona_config::schema::ClockConfig;

/// Accumulating scene time.
///
/// Accumulates in `f64` so long sessions do not lose precision; the scene
/// reads it back as `f32`.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneClock {
    elapsed: f64,
    step: f64,
    time_scale: f64,
}

impl Default for SceneClock {
    fn default() -> Self {
        Self::from_config(&ClockConfig::default())
    }
}

impl SceneClock {
    pub fn new(step: f64, time_scale: f64) -> Self {
        Self {
            elapsed: 0.0,
            step,
            time_scale,
        }
    }

    pub fn from_config(config: &ClockConfig) -> Self {
        Self::new(config.step, config.time_scale)
    }

    /// Advance by one fixed step and return the new elapsed time.
    pub fn tick(&mut self) -> f32 {
        self.elapsed += self.step * self.time_scale;
        self.elapsed()
    }

    /// Advance by `dt` (scaled) and return the new elapsed time.
    /// Non-finite or negative deltas are ignored.
    pub fn advance(&mut self, dt: f64) -> f32 {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt * self.time_scale;
        }
        self.elapsed()
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_adds_step() {
        let mut clock = SceneClock::default();
        for _ in 0..100 {
            clock.tick();
        }
        assert!((clock.elapsed() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn time_scale_applies_to_tick_and_advance() {
        let mut clock = SceneClock::new(0.5, 2.0);
        assert!((clock.tick() - 1.0).abs() < 1e-6);
        assert!((clock.advance(0.25) - 1.5).abs() < 1e-6);
    }

    #[test]
    fn advance_ignores_bad_deltas() {
        let mut clock = SceneClock::default();
        clock.advance(1.0);
        clock.advance(-5.0);
        clock.advance(f64::NAN);
        assert!((clock.elapsed() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn elapsed_is_monotonic() {
        let mut clock = SceneClock::default();
        let mut last = clock.elapsed();
        for _ in 0..1000 {
            let now = clock.tick();
            assert!(now >= last);
            last = now;
        }
    }
}
