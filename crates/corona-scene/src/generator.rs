//! Seedable ring parameter generator.
//!
//! Every random draw of scene construction goes through one `StdRng`, so
//! a seed plus a config reproduces the exact same pool.

use std::f32::consts::TAU;

use corona_common::RingError;
use corona_config::schema::{FloatRange, RingsConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::palette::HuePalette;
use crate::ring::{Ring, RingParams, RingPool};

/// Draws ring parameters (and the initial palette jitter) from a seeded RNG.
pub struct RingGenerator {
    rng: StdRng,
    seed: u64,
    config: RingsConfig,
}

impl RingGenerator {
    pub fn new(config: &RingsConfig, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
            config: config.clone(),
        }
    }

    /// Use the configured seed, or draw and log a fresh one so the run can
    /// be reproduced.
    pub fn from_config(config: &RingsConfig) -> Self {
        let seed = resolve_seed(config.seed);
        Self::new(config, seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw one ring's parameters.
    pub fn sample(&mut self) -> Result<RingParams, RingError> {
        let radius = self.draw("radius", self.config.radius)?;
        let amplitude = self.draw("amplitude", self.config.amplitude)?;
        let frequency = self.draw("frequency", self.config.frequency)?;
        let phase = self.rng.gen_range(0.0..TAU);
        let seed_range = self.config.seed_range;
        let seeds = [
            self.draw_upto("seed", seed_range)?,
            self.draw_upto("seed", seed_range)?,
        ];
        let opacity = self.draw("opacity", self.config.opacity)?;

        RingParams::new(radius, amplitude, frequency, phase)?
            .with_seeds(seeds)?
            .with_opacity(opacity)
    }

    /// Build the full pool. With a palette, each ring gets a color buffer
    /// seeded with the jittered rainbow.
    pub fn build_pool(
        &mut self,
        palette: Option<(&HuePalette, f32)>,
    ) -> Result<RingPool, RingError> {
        let palette = palette
            .map(|(palette, jitter)| {
                finite_bounds("initial_jitter", 0.0, f64::from(jitter)).map(|(_, j)| (palette, j))
            })
            .transpose()?;

        let segments = self.config.segments as usize;
        let mut rings = Vec::with_capacity(self.config.count as usize);
        for _ in 0..self.config.count {
            let params = self.sample()?;
            let mut ring = Ring::new(params, segments)?;
            if let Some((palette, jitter)) = palette {
                let rng = &mut self.rng;
                ring = ring.with_colors(|_, angle| {
                    let offset = if jitter > 0.0 {
                        rng.gen_range(0.0..jitter)
                    } else {
                        0.0
                    };
                    palette.rainbow_at(angle, offset)
                });
            }
            rings.push(ring);
        }
        info!(
            rings = rings.len(),
            segments,
            seed = self.seed,
            "built ring pool"
        );
        Ok(RingPool::new(rings, segments))
    }

    fn draw(&mut self, name: &'static str, range: FloatRange) -> Result<f32, RingError> {
        let (min, max) = finite_bounds(name, range.min, range.max)?;
        Ok(if min < max {
            self.rng.gen_range(min..max)
        } else {
            min
        })
    }

    fn draw_upto(&mut self, name: &'static str, max: f64) -> Result<f32, RingError> {
        let (_, max) = finite_bounds(name, 0.0, max)?;
        Ok(if max > 0.0 {
            self.rng.gen_range(0.0..max)
        } else {
            0.0
        })
    }
}

/// Narrow a sampling range to `f32`. Both ends and their span must stay
/// finite or the uniform sampler cannot be built.
fn finite_bounds(name: &'static str, min: f64, max: f64) -> Result<(f32, f32), RingError> {
    let (lo, hi) = (min as f32, max as f32);
    if lo.is_finite() && hi.is_finite() && (hi - lo).is_finite() {
        Ok((lo, hi))
    } else {
        Err(RingError::InvalidRange(name, lo, hi))
    }
}

/// Pick the configured seed or draw one from the thread RNG.
pub fn resolve_seed(configured: Option<u64>) -> u64 {
    match configured {
        Some(seed) => seed,
        None => {
            let seed = rand::random::<u64>();
            info!(seed, "no ring seed configured, drew a random one");
            seed
        }
    }
}
