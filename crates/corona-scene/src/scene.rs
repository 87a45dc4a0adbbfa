//! Scene context: the owned state a host drives once per displayed frame.
//!
//! Holds the ring pool, the palette and modulation shared by all rings,
//! the sun, and the clock. Updates take `&mut self`, so ticks are
//! sequential and every buffer has exactly one writer.

use corona_common::RingError;
use corona_config::CoronaConfig;
use serde::Serialize;
use tracing::{debug, info};

use crate::clock::SceneClock;
use crate::generator::RingGenerator;
use crate::modulation::AmplitudeModulation;
use crate::palette::HuePalette;
use crate::ring::{RingParams, RingPool};
use crate::sun::{SunPhase, SunUniforms};

pub struct Scene {
    pool: RingPool,
    modulation: AmplitudeModulation,
    /// `None` when the per-tick color pass is disabled.
    palette: Option<HuePalette>,
    sun: Option<SunPhase>,
    sun_uniforms: SunUniforms,
    clock: SceneClock,
    seed: u64,
    elapsed: f32,
    frames: u64,
}

impl Scene {
    /// Build a scene, taking the ring seed from config (or drawing one).
    pub fn from_config(config: &CoronaConfig) -> Result<Self, RingError> {
        Self::build(config, RingGenerator::from_config(&config.rings))
    }

    /// Build a scene with an explicit ring seed, ignoring `rings.seed`.
    pub fn with_seed(config: &CoronaConfig, seed: u64) -> Result<Self, RingError> {
        Self::build(config, RingGenerator::new(&config.rings, seed))
    }

    fn build(config: &CoronaConfig, mut generator: RingGenerator) -> Result<Self, RingError> {
        let palette = HuePalette::from_config(&config.palette);
        let jitter = config.palette.initial_jitter as f32;
        let pool = generator.build_pool(Some((&palette, jitter)))?;

        let sun = config.sun.enabled.then(|| SunPhase::from_config(&config.sun));
        let sun_uniforms = sun.as_ref().map(|s| s.uniforms(0.0)).unwrap_or_default();

        info!(
            rings = pool.len(),
            segments = pool.segment_count(),
            seed = generator.seed(),
            modulated = config.modulation.enabled,
            colors = config.palette.enabled,
            sun = config.sun.enabled,
            "scene ready"
        );

        Ok(Self {
            pool,
            modulation: AmplitudeModulation::from_config(&config.modulation),
            palette: config.palette.enabled.then_some(palette),
            sun,
            sun_uniforms,
            clock: SceneClock::from_config(&config.clock),
            seed: generator.seed(),
            elapsed: 0.0,
            frames: 0,
        })
    }

    /// Recompute every ring and the sun for `elapsed` time units.
    ///
    /// Caller-chosen cadence; there is no internal timer. Does not touch
    /// the scene clock.
    pub fn update(&mut self, elapsed: f32) {
        self.pool
            .update(elapsed, &self.modulation, self.palette.as_ref());
        if let Some(sun) = &self.sun {
            self.sun_uniforms = sun.uniforms(elapsed);
        }
        self.elapsed = elapsed;
        self.frames += 1;
        if self.frames % 600 == 0 {
            debug!(frames = self.frames, elapsed, "scene update");
        }
    }

    /// Advance the clock by one fixed step and update.
    pub fn tick(&mut self) -> f32 {
        let t = self.clock.tick();
        self.update(t);
        t
    }

    /// Advance the clock by a real frame delta and update.
    pub fn advance(&mut self, dt: f64) -> f32 {
        let t = self.clock.advance(dt);
        self.update(t);
        t
    }

    pub fn rings(&self) -> &RingPool {
        &self.pool
    }

    pub fn sun(&self) -> Option<&SunPhase> {
        self.sun.as_ref()
    }

    /// Uniforms from the last update; zeroed when the sun is disabled.
    pub fn sun_uniforms(&self) -> &SunUniforms {
        &self.sun_uniforms
    }

    pub fn modulation(&self) -> &AmplitudeModulation {
        &self.modulation
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Time of the last update.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Number of updates applied.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Serializable copy of the current frame.
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            elapsed: self.elapsed,
            frames: self.frames,
            seed: self.seed,
            sun: self.sun.as_ref().map(|_| self.sun_uniforms),
            rings: self
                .pool
                .iter()
                .map(|ring| RingSnapshot {
                    params: *ring.params(),
                    positions: ring.positions().to_vec(),
                    colors: ring.colors().map(<[_]>::to_vec),
                })
                .collect(),
        }
    }
}

/// One ring of a [`FrameSnapshot`].
#[derive(Debug, Clone, Serialize)]
pub struct RingSnapshot {
    pub params: RingParams,
    pub positions: Vec<[f32; 3]>,
    pub colors: Option<Vec<[f32; 3]>>,
}

/// A frame's full output: every ring buffer plus the sun uniforms.
#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot {
    pub elapsed: f32,
    pub frames: u64,
    pub seed: u64,
    pub sun: Option<SunUniforms>,
    pub rings: Vec<RingSnapshot>,
}

// =============================================================================
// Tests
// =============================================================================
