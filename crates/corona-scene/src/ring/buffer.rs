//! A single ring: parameters plus its owned vertex buffers.

use corona_common::RingError;

use super::params::RingParams;
use super::types::RingVertex;
use crate::animator;
use crate::modulation::AmplitudeModulation;
use crate::palette::HuePalette;

/// One closed loop of animated vertices.
///
/// The buffer lengths are fixed at creation; [`Ring::update`] only
/// overwrites values.
#[derive(Debug, Clone)]
pub struct Ring {
    params: RingParams,
    positions: Vec<[f32; 3]>,
    colors: Option<Vec<[f32; 3]>>,
}

impl Ring {
    /// Create a ring laid out as an undistorted circle of `params.radius()`.
    pub fn new(params: RingParams, segment_count: usize) -> Result<Self, RingError> {
        if segment_count == 0 {
            return Err(RingError::InvalidSegmentCount(segment_count));
        }
        let positions = (0..segment_count)
            .map(|i| {
                let angle = animator::vertex_angle(i, segment_count);
                [
                    angle.cos() * params.radius(),
                    angle.sin() * params.radius(),
                    0.0,
                ]
            })
            .collect();
        Ok(Self {
            params,
            positions,
            colors: None,
        })
    }

    /// Attach a color buffer, seeding vertex `i` with `init(i, angle)`.
    pub fn with_colors<F>(mut self, mut init: F) -> Self
    where
        F: FnMut(usize, f32) -> [f32; 3],
    {
        let n = self.positions.len();
        self.colors = Some(
            (0..n)
                .map(|i| init(i, animator::vertex_angle(i, n)))
                .collect(),
        );
        self
    }

    /// Rewrite positions (and colors, when both a buffer and a palette
    /// are present) for time `t`.
    pub fn update(&mut self, t: f32, modulation: &AmplitudeModulation, palette: Option<&HuePalette>) {
        animator::animate_positions(&self.params, modulation, t, &mut self.positions);
        if let (Some(colors), Some(palette)) = (self.colors.as_mut(), palette) {
            animator::animate_colors(&self.params, palette, t, colors);
        }
    }

    pub fn params(&self) -> &RingParams {
        &self.params
    }

    pub fn segment_count(&self) -> usize {
        self.positions.len()
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn colors(&self) -> Option<&[[f32; 3]]> {
        self.colors.as_deref()
    }

    /// Interleave positions and colors for upload. Rings without a color
    /// buffer are emitted white.
    pub fn interleaved(&self) -> Vec<RingVertex> {
        self.positions
            .iter()
            .enumerate()
            .map(|(i, &position)| RingVertex {
                position,
                color: self
                    .colors
                    .as_ref()
                    .map_or([1.0, 1.0, 1.0], |c| c[i]),
            })
            .collect()
    }
}
