//! Camera frame abstraction.
//!
//! - [`CameraFrame`]: capability surface over platform camera bindings
//! - [`resolve_buffer`]: first-success probing of the optional accessors
//! - [`SampleRegion`]: clamped central sampling geometry

mod access;
mod region;

pub use access::{resolve_buffer, CameraFrame, FrameBuffer, PixelFormat, PlaneSet};
pub use region::SampleRegion;
