//! Sun uniform block.

use serde::Serialize;

/// GPU-side uniform block for the sun shader.
///
/// Layout: 12 × f32 = 48 bytes, a multiple of 16 (wgpu requirement).
/// `vec3` members are followed by a scalar so no padding is needed.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SunUniforms {
    /// Elapsed scene time.
    pub time: f32,
    /// Phase sweep speed.
    pub speed: f32,
    /// Half-width of the soft boundary.
    pub edge_softness: f32,
    /// U coordinate of the lit/unlit boundary (lit where `u > cutoff_center`).
    pub cutoff_center: f32,

    /// Unlit color.
    pub color: [f32; 3],
    /// Pulsation scale applied to the sun mesh.
    pub scale: f32,

    /// Lit (emissive) color.
    pub emissive: [f32; 3],
    /// Share of the disc's u-axis that is lit, in `[0, 1]`.
    pub illuminated_fraction: f32,
}
