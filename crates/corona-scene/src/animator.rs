//! The ring animator.
//!
//! Pure functions of `(time, params)`: no ambient state, no allocation,
//! total over every finite `t`. For vertex `i` of `n`:
//!
//! ```text
//! angle = (i / n) * 2π
//! wave  = amplitude(t) * sin(angle * frequency + t + phase)
//! pos   = (cos(angle) * (radius + wave), sin(angle) * (radius + wave), 0)
//! ```

use std::f32::consts::TAU;

use crate::modulation::AmplitudeModulation;
use crate::palette::HuePalette;
use crate::ring::RingParams;

/// Angle of vertex `index` on a loop of `segment_count` vertices.
#[inline]
pub fn vertex_angle(index: usize, segment_count: usize) -> f32 {
    (index as f32 / segment_count as f32) * TAU
}

/// Radial displacement of the loop at `angle` for the given amplitude.
#[inline]
pub fn wave(params: &RingParams, amplitude: f32, angle: f32, t: f32) -> f32 {
    amplitude * (angle * params.frequency() + t + params.phase()).sin()
}

/// Position of vertex `index` at time `t`, using an already-resolved amplitude.
pub fn ring_vertex(
    params: &RingParams,
    amplitude: f32,
    index: usize,
    segment_count: usize,
    t: f32,
) -> [f32; 3] {
    let angle = vertex_angle(index, segment_count);
    let r = params.radius() + wave(params, amplitude, angle, t);
    [angle.cos() * r, angle.sin() * r, 0.0]
}

/// Write every vertex of a ring for time `t` into `out`.
///
/// `out.len()` is the segment count. The modulated amplitude is resolved
/// once per call, not per vertex.
pub fn animate_positions(
    params: &RingParams,
    modulation: &AmplitudeModulation,
    t: f32,
    out: &mut [[f32; 3]],
) {
    let amplitude = modulation.amplitude_at(params.amplitude(), params.seeds(), t);
    let n = out.len();
    for (i, vertex) in out.iter_mut().enumerate() {
        *vertex = ring_vertex(params, amplitude, i, n, t);
    }
}

/// Write every vertex color of a ring for time `t` into `out`.
pub fn animate_colors(params: &RingParams, palette: &HuePalette, t: f32, out: &mut [[f32; 3]]) {
    let n = out.len();
    for (i, color) in out.iter_mut().enumerate() {
        *color = palette.color_at(vertex_angle(i, n), t, params.phase());
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn scenario() -> RingParams {
        RingParams::new(2.0, 0.15, 4.0, 0.0).unwrap()
    }

    fn run(params: &RingParams, modulation: &AmplitudeModulation, t: f32, n: usize) -> Vec<[f32; 3]> {
        let mut out = vec![[0.0; 3]; n];
        animate_positions(params, modulation, t, &mut out);
        out
    }

    #[test]
    fn scenario_t0_vertex0() {
        let out = run(&scenario(), &AmplitudeModulation::Static, 0.0, 128);
        // sin(0) = 0 → undistorted radius 2 on the +x axis
        assert!((out[0][0] - 2.0).abs() < 1e-6);
        assert!(out[0][1].abs() < 1e-6);
        assert_eq!(out[0][2], 0.0);
    }

    #[test]
    fn scenario_quarter_period_vertex0() {
        let out = run(&scenario(), &AmplitudeModulation::Static, FRAC_PI_2, 128);
        // wave = 0.15 * sin(π/2) = 0.15
        assert!((out[0][0] - 2.15).abs() < 1e-6);
        assert!(out[0][1].abs() < 1e-6);
        assert_eq!(out[0][2], 0.0);
    }

    #[test]
    fn vertex_count_matches_segments() {
        for n in [1usize, 3, 64, 128, 500] {
            assert_eq!(run(&scenario(), &AmplitudeModulation::Static, 7.5, n).len(), n);
        }
    }

    #[test]
    fn radial_distance_is_radius_plus_bounded_wave() {
        let params = RingParams::new(1.5, 0.3, 5.3, 1.1).unwrap();
        for step in 0..40 {
            let t = step as f32 * 0.731 - 10.0;
            let out = run(&params, &AmplitudeModulation::Static, t, 96);
            for (i, v) in out.iter().enumerate() {
                let r = (v[0] * v[0] + v[1] * v[1]).sqrt();
                let expected = params.radius() + wave(&params, 0.3, vertex_angle(i, 96), t);
                assert!((r - expected).abs() < 1e-5, "t={t} i={i}: {r} vs {expected}");
                assert!((r - params.radius()).abs() <= 0.3 + 1e-5);
                assert_eq!(v[2], 0.0);
            }
        }
    }

    #[test]
    fn modulated_wave_stays_under_ceiling() {
        let params = RingParams::new(3.0, 0.08, 2.7, 0.4)
            .unwrap()
            .with_seeds([17.0, 63.0])
            .unwrap();
        let modulation = AmplitudeModulation::default();
        let ceiling = modulation.ceiling(params.amplitude());
        for step in 0..200 {
            let t = step as f32 * 3.3;
            for v in run(&params, &modulation, t, 64) {
                let r = (v[0] * v[0] + v[1] * v[1]).sqrt();
                assert!((r - params.radius()).abs() <= ceiling + 1e-5);
            }
        }
    }

    #[test]
    fn zero_amplitude_is_exact_circle() {
        let params = RingParams::new(2.5, 0.0, 4.0, 0.3).unwrap();
        for t in [0.0f32, 1.0, 123.456, -50.0] {
            for (i, v) in run(&params, &AmplitudeModulation::default(), t, 64)
                .iter()
                .enumerate()
            {
                let angle = vertex_angle(i, 64);
                assert_eq!(v[0], angle.cos() * 2.5);
                assert_eq!(v[1], angle.sin() * 2.5);
            }
        }
    }

    #[test]
    fn identical_inputs_give_bit_identical_output() {
        let params = RingParams::new(4.2, 0.09, 3.7, 2.2)
            .unwrap()
            .with_seeds([5.0, 81.0])
            .unwrap();
        let modulation = AmplitudeModulation::default();
        let a = run(&params, &modulation, 42.42, 128);
        let b = run(&params, &modulation, 42.42, 128);
        for (x, y) in a.iter().zip(&b) {
            for k in 0..3 {
                assert_eq!(x[k].to_bits(), y[k].to_bits());
            }
        }
    }

    #[test]
    fn total_for_large_finite_time() {
        let out = run(&scenario(), &AmplitudeModulation::default(), 1.0e7, 32);
        assert!(out.iter().flatten().all(|c| c.is_finite()));
    }

    #[test]
    fn ring_vertex_matches_buffer() {
        let params = scenario();
        let out = run(&params, &AmplitudeModulation::Static, 0.9, 16);
        for (i, v) in out.iter().enumerate() {
            assert_eq!(*v, ring_vertex(&params, 0.15, i, 16, 0.9));
        }
    }

    #[test]
    fn animate_colors_fills_buffer_in_range() {
        let params = scenario();
        let palette = HuePalette::default();
        let mut colors = vec![[0.0; 3]; 32];
        animate_colors(&params, &palette, 2.0, &mut colors);
        for c in &colors {
            for &ch in c {
                assert!((0.0..=1.0).contains(&ch));
            }
        }
    }

    #[test]
    fn empty_buffer_is_noop() {
        let mut out: Vec<[f32; 3]> = Vec::new();
        animate_positions(&scenario(), &AmplitudeModulation::Static, 1.0, &mut out);
        assert!(out.is_empty());
    }
}
