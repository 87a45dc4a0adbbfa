use corona_common::Color;
use corona_config::schema::{SunConfig, SunWave};
use tracing::warn;

use super::types::SunUniforms;

const FALLBACK_COLOR: [f32; 3] = [1.0, 0.8, 0.0];
const FALLBACK_EMISSIVE: [f32; 3] = [1.0, 2.0 / 3.0, 0.0];

/// Time-driven sun phase parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SunPhase {
    pub wave: SunWave,
    pub speed: f32,
    pub exponent: f32,
    pub sweep: f32,
    pub edge_softness: f32,
    pub color: [f32; 3],
    pub emissive: [f32; 3],
    pub pulse_amount: f32,
    pub pulse_rate: f32,
}

impl Default for SunPhase {
    fn default() -> Self {
        Self::from_config(&SunConfig::default())
    }
}

impl SunPhase {
    pub fn from_config(config: &SunConfig) -> Self {
        Self {
            wave: config.wave,
            speed: config.speed as f32,
            exponent: config.exponent as f32,
            sweep: config.sweep as f32,
            edge_softness: config.edge_softness as f32,
            color: parse_color("sun.color", &config.color, FALLBACK_COLOR),
            emissive: parse_color(
                "sun.emissive_color",
                &config.emissive_color,
                FALLBACK_EMISSIVE,
            ),
            pulse_amount: config.pulse_amount as f32,
            pulse_rate: config.pulse_rate as f32,
        }
    }

    /// Raw oscillator value in `[-1, 1]`.
    pub fn cycle(&self, t: f32) -> f32 {
        let x = t * self.speed;
        match self.wave {
            SunWave::Sine => x.sin(),
            SunWave::Cosine => x.cos(),
        }
    }

    /// Shaped phase `sign(c) * |c|^exponent`, still in `[-1, 1]`.
    pub fn phase(&self, t: f32) -> f32 {
        let c = self.cycle(t);
        if c == 0.0 {
            return 0.0;
        }
        c.signum() * c.abs().powf(self.exponent)
    }

    /// U coordinate of the boundary, in `[0.5 - sweep, 0.5 + sweep]`.
    pub fn cutoff_center(&self, t: f32) -> f32 {
        0.5 + self.phase(t) * self.sweep
    }

    pub fn illuminated_fraction(&self, t: f32) -> f32 {
        (1.0 - self.cutoff_center(t)).clamp(0.0, 1.0)
    }

    /// Pulsating mesh scale.
    pub fn scale(&self, t: f32) -> f32 {
        1.0 + self.pulse_amount * (t * self.pulse_rate).sin()
    }

    /// Visibility of disc point `(u, v)` at time `t`, in `[0, 1]`.
    ///
    /// Zero outside the unit disc centred at `(0.5, 0.5)`; the rim fades
    /// out between radius 0.4 and 0.5.
    pub fn mask(&self, t: f32, u: f32, v: f32) -> f32 {
        let d = ((u - 0.5).powi(2) + (v - 0.5).powi(2)).sqrt();
        if d > 0.5 {
            return 0.0;
        }
        let center = self.cutoff_center(t);
        let cutoff = smoothstep(center - self.edge_softness, center + self.edge_softness, u);
        let fade = 1.0 - smoothstep(0.4, 0.5, d);
        smoothstep(0.0, 1.0, cutoff * fade)
    }

    pub fn uniforms(&self, t: f32) -> SunUniforms {
        SunUniforms {
            time: t,
            speed: self.speed,
            edge_softness: self.edge_softness,
            cutoff_center: self.cutoff_center(t),
            color: self.color,
            scale: self.scale(t),
            emissive: self.emissive,
            illuminated_fraction: self.illuminated_fraction(t),
        }
    }
}

/// GLSL-style smoothstep. A zero-width edge degrades to a step at `e0`.
pub fn smoothstep(e0: f32, e1: f32, x: f32) -> f32 {
    if e1 <= e0 {
        return if x < e0 { 0.0 } else { 1.0 };
    }
    let t = ((x - e0) / (e1 - e0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

fn parse_color(name: &str, value: &str, fallback: [f32; 3]) -> [f32; 3] {
    match Color::from_hex(value) {
        Some(c) => c.to_rgb_f32(),
        None => {
            warn!("{name} = \"{value}\" is not a hex color, using fallback");
            fallback
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
