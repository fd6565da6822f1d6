//! Paint model shared between the demo and renderers.
//!
//! Geometry types remain in `coords` and `geometry`.

pub mod color;

pub use color::Color;
