//! Polygon geometry.
//!
//! Two pure stages turn a body-space polygon into something a rasterizer can
//! consume:
//! - [`transform`] maps local vertices into world space for a [`Pose`]
//! - [`emit_fan`] pairs world vertices around a pivot into [`Triangle`]s
//!
//! Both are stateless and called once per shape per frame.

mod fan;
mod polygon;
mod rotation;

pub use fan::{emit_fan, Fan, Triangle};
pub use polygon::{transform, Polygon};
pub use rotation::{Pose, Rotation};
