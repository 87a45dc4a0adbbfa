//! Amplitude modulation: the slow per-ring "breathing" of wave amplitude.

use corona_config::schema::ModulationConfig;

/// One slow sine wave of the breathing sum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModulationTerm {
    pub weight: f32,
    pub rate: f32,
    /// Index into the ring's seed pair (0 or 1).
    pub seed: usize,
    pub seed_scale: f32,
}

impl ModulationTerm {
    pub const fn new(weight: f32, rate: f32, seed: usize, seed_scale: f32) -> Self {
        Self {
            weight,
            rate,
            seed,
            seed_scale,
        }
    }
}

/// How a ring's amplitude evolves over time.
#[derive(Debug, Clone, PartialEq)]
pub enum AmplitudeModulation {
    /// The ring's amplitude is used as-is.
    Static,
    /// `amplitude * (floor + span * level(t))` with `level` in `[0, 1]`.
    Breathing {
        terms: Vec<ModulationTerm>,
        floor: f32,
        span: f32,
    },
}

impl Default for AmplitudeModulation {
    fn default() -> Self {
        Self::Breathing {
            terms: vec![
                ModulationTerm::new(0.4, 0.07, 0, 1.0),
                ModulationTerm::new(0.3, 0.13, 1, 1.0),
                ModulationTerm::new(0.3, 0.21, 0, 0.5),
            ],
            floor: 0.0,
            span: 1.0,
        }
    }
}

impl AmplitudeModulation {
    pub fn from_config(config: &ModulationConfig) -> Self {
        if !config.enabled {
            return Self::Static;
        }
        Self::Breathing {
            terms: config
                .terms
                .iter()
                .map(|t| {
                    ModulationTerm::new(
                        t.weight as f32,
                        t.rate as f32,
                        t.seed.min(1) as usize,
                        t.seed_scale as f32,
                    )
                })
                .collect(),
            floor: config.floor as f32,
            span: config.span as f32,
        }
    }

    /// Normalised breathing level in `[0, 1]`.
    ///
    /// Terms are weighted by `|weight| / Σ|weight|`; no terms (or all-zero
    /// weights) gives the midpoint 0.5. `Static` is always fully open.
    pub fn level(&self, seeds: [f32; 2], t: f32) -> f32 {
        let terms = match self {
            Self::Static => return 1.0,
            Self::Breathing { terms, .. } => terms,
        };
        let total: f32 = terms.iter().map(|term| term.weight.abs()).sum();
        if total <= 0.0 {
            return 0.5;
        }
        let sum: f32 = terms
            .iter()
            .map(|term| {
                let seed = seeds[term.seed.min(1)] * term.seed_scale;
                term.weight * (t * term.rate + seed).sin()
            })
            .sum();
        (0.5 + 0.5 * sum / total).clamp(0.0, 1.0)
    }

    /// Effective amplitude at time `t` for a ring with base `amplitude`.
    pub fn amplitude_at(&self, amplitude: f32, seeds: [f32; 2], t: f32) -> f32 {
        match self {
            Self::Static => amplitude,
            Self::Breathing { floor, span, .. } => {
                amplitude * (floor + span * self.level(seeds, t))
            }
        }
    }

    /// Largest amplitude [`Self::amplitude_at`] can return for `amplitude`.
    pub fn ceiling(&self, amplitude: f32) -> f32 {
        match self {
            Self::Static => amplitude,
            Self::Breathing { floor, span, .. } => amplitude * (floor + span),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_returns_base() {
        let m = AmplitudeModulation::Static;
        assert_eq!(m.amplitude_at(0.15, [3.0, 4.0], 99.0), 0.15);
        assert_eq!(m.ceiling(0.15), 0.15);
    }

    #[test]
    fn level_stays_in_unit_interval() {
        let m = AmplitudeModulation::default();
        for step in 0..2000 {
            let t = step as f32 * 0.9;
            let level = m.level([12.5, 88.1], t);
            assert!((0.0..=1.0).contains(&level), "t={t} level={level}");
        }
    }

    #[test]
    fn default_rescales_into_zero_to_amplitude() {
        let m = AmplitudeModulation::default();
        assert!((m.ceiling(0.1) - 0.1).abs() < 1e-7);
        for step in 0..500 {
            let a = m.amplitude_at(0.1, [1.0, 2.0], step as f32 * 1.7);
            assert!((0.0..=0.1 + 1e-7).contains(&a));
        }
    }

    #[test]
    fn floor_offsets_amplitude_range() {
        // `amplitude * (0.5 + level)`: breathing never fully closes.
        let m = AmplitudeModulation::Breathing {
            terms: vec![
                ModulationTerm::new(1.0, 1.0, 0, 1.0),
                ModulationTerm::new(1.0, 2.0, 1, 1.0),
            ],
            floor: 0.5,
            span: 1.0,
        };
        assert!((m.ceiling(0.2) - 0.3).abs() < 1e-6);
        for step in 0..300 {
            let a = m.amplitude_at(0.2, [0.0, 0.0], step as f32 * 0.21);
            assert!(a >= 0.1 - 1e-6 && a <= 0.3 + 1e-6);
        }
    }

    #[test]
    fn matches_weighted_sine_sum() {
        let m = AmplitudeModulation::default();
        let seeds = [10.0f32, 20.0];
        let t = 5.0f32;
        let expected = 0.5
            + 0.5
                * (0.4 * (t * 0.07 + seeds[0]).sin()
                    + 0.3 * (t * 0.13 + seeds[1]).sin()
                    + 0.3 * (t * 0.21 + seeds[0] * 0.5).sin());
        assert!((m.level(seeds, t) - expected).abs() < 1e-6);
    }

    #[test]
    fn seeds_decorrelate_rings() {
        let m = AmplitudeModulation::default();
        let a = m.level([0.0, 0.0], 3.0);
        let b = m.level([40.0, 71.0], 3.0);
        assert!((a - b).abs() > 1e-3);
    }

    #[test]
    fn zero_weights_give_midpoint() {
        let m = AmplitudeModulation::Breathing {
            terms: vec![ModulationTerm::new(0.0, 1.0, 0, 1.0)],
            floor: 0.0,
            span: 1.0,
        };
        assert_eq!(m.level([1.0, 1.0], 2.0), 0.5);
    }

    #[test]
    fn from_disabled_config_is_static() {
        let config = ModulationConfig {
            enabled: false,
            ..Default::default()
        };
        assert_eq!(AmplitudeModulation::from_config(&config), AmplitudeModulation::Static);
    }

    #[test]
    fn from_default_config_matches_default() {
        let m = AmplitudeModulation::from_config(&ModulationConfig::default());
        assert_eq!(m, AmplitudeModulation::default());
    }
}
