//! Rings: immutable wave parameters plus the per-frame vertex buffers
//! the animator rewrites in place.

mod buffer;
mod params;
mod pool;
mod types;

pub use buffer::*;
pub use params::*;
pub use pool::*;
pub use types::*;
