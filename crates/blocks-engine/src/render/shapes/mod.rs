//! Shape renderers.

mod common;

pub mod triangle;
