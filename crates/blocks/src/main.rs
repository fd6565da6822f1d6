//! Blocks: hexagons bouncing around a window, draggable with the mouse.
//!
//! Escape quits. Press the left button on a block and move the pointer to
//! push it around.

mod app;
mod block;
mod config;
mod drag;
mod physics;

use anyhow::Result;
use winit::dpi::LogicalSize;

use blocks_engine::device::GpuInit;
use blocks_engine::logging::{init_logging, LoggingConfig};
use blocks_engine::window::{Runtime, RuntimeConfig};

use crate::app::BlocksApp;
use crate::config::DemoConfig;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let cfg = DemoConfig::default();
    let runtime = RuntimeConfig {
        title: cfg.title.clone(),
        initial_size: LogicalSize::new(cfg.width as f64, cfg.height as f64),
        resizable: false,
    };

    let app = BlocksApp::new(cfg)?;
    Runtime::run(runtime, GpuInit::default(), app)
}
