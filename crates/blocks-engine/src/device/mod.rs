//! GPU device + surface management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - creating & configuring the Surface (swapchain)
//! - acquiring, clearing and presenting frames

mod context;
mod error;
mod init;
mod surface;

pub use context::Gpu;
pub use error::SurfaceErrorAction;
pub use init::GpuInit;
