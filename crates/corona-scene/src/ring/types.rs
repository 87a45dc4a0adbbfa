//! Ring vertex layout for GPU upload.

/// Interleaved ring vertex.
///
/// Layout: position(vec3) + color(vec3) = 24 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct RingVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

// =============================================================================
// Tests
// =============================================================================
