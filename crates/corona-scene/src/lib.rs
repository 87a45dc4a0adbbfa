//! Procedural sun-and-rings animation.
//!
//! The core is the ring animator: a pure function from elapsed time and a
//! ring's immutable parameters to that ring's vertex (and color) buffer.
//! Everything else here builds those parameters, owns the buffers, and
//! exposes upload-ready data for a renderer living outside this crate.

pub mod animator;
pub mod clock;
pub mod generator;
pub mod modulation;
pub mod palette;
pub mod perf;
pub mod ring;
pub mod scene;
pub mod sun;

pub use clock::SceneClock;
pub use generator::RingGenerator;
pub use modulation::{AmplitudeModulation, ModulationTerm};
pub use palette::HuePalette;
pub use perf::{FrameStats, FrameTimer};
pub use ring::{Ring, RingParams, RingPool, RingVertex};
pub use scene::{FrameSnapshot, Scene};
pub use sun::{SunPhase, SunUniforms};
