//! Sun phase effect: a lit/unlit boundary sweeping across the sun disc.
//!
//! Independent of the rings. The CPU side only computes the cutoff
//! parameters and packs them into [`SunUniforms`]; [`SunPhase::mask`]
//! mirrors the fragment shader for previews and tests.

mod phase;
mod types;

pub use phase::*;
pub use types::*;
