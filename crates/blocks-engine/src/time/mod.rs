//! Time subsystem.
//!
//! Frame timing utilities decoupled from the runtime:
//! - `FrameClock`: one per window, `tick()` once per presented frame
//! - `FixedTimestep`: turns variable frame deltas into a whole number of
//!   fixed-length simulation updates

mod fixed_step;
mod frame_clock;

pub use fixed_step::FixedTimestep;
pub use frame_clock::{FrameClock, FrameTime};
