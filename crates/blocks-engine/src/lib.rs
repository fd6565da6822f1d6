//! Blocks engine crate.
//!
//! Owns the platform + GPU runtime pieces and the polygon geometry used by the
//! demo binary.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod geometry;
pub mod render;
pub mod paint;
pub mod scene;
