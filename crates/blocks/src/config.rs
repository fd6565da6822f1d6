//! Demo configuration.
//!
//! Defaults reproduce the classic setup: a fixed 800×600 window, one hundred
//! cyan hexagons in zero gravity, bouncy walls and a red crosshair cursor.

use blocks_engine::coords::Vec2;
use blocks_engine::paint::Color;

/// Everything the demo needs to build its window, world and blocks.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,

    pub block_count: usize,
    pub block_mass: f32,
    pub block_radius: f32,
    pub block_sides: usize,
    pub block_elasticity: f32,
    pub block_color: u32,

    pub wall_elasticity: f32,
    pub wall_radius: f32,

    pub gravity: Vec2,
    /// Physics length scale, in world units per meter.
    pub length_unit: f32,

    /// Simulated time advanced by one update, in seconds.
    pub step_delta: f32,
    /// Engine steps per update; each advances `step_delta / substeps`.
    pub substeps: u32,
    /// Wall-clock interval between updates, in seconds.
    pub update_interval: f32,
    /// Upper bound on catch-up updates within one frame.
    pub max_updates_per_frame: u32,

    /// Force applied per logical pixel of pointer motion while dragging.
    pub drag_gain: f32,

    pub cursor_color: u32,
    pub cursor_half_extent: f32,
    pub cursor_thickness: f32,
    pub clear_color: u32,

    /// Fixed seed for block placement; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            title: "Blocks".to_string(),
            width: 800.0,
            height: 600.0,

            block_count: 100,
            block_mass: 5.0,
            block_radius: 10.0,
            block_sides: 6,
            block_elasticity: 0.8,
            block_color: 0xff00ffff,

            wall_elasticity: 1.0,
            wall_radius: 1.0,

            gravity: Vec2::zero(),
            length_unit: 100.0,

            step_delta: 1.0 / 60.0,
            substeps: 1,
            update_interval: 1.0 / 60.0,
            max_updates_per_frame: 4,

            drag_gain: 3000.0,

            cursor_color: 0xffff0000,
            cursor_half_extent: 10.0,
            cursor_thickness: 1.0,
            clear_color: 0xff000000,

            seed: None,
        }
    }
}

impl DemoConfig {
    /// Boundary segments along the window edges: left, top, bottom, right.
    pub fn boundaries(&self) -> [(Vec2, Vec2); 4] {
        let (w, h) = (self.width, self.height);
        [
            (Vec2::new(0.0, 0.0), Vec2::new(0.0, h)),
            (Vec2::new(0.0, 0.0), Vec2::new(w, 0.0)),
            (Vec2::new(0.0, h), Vec2::new(w, h)),
            (Vec2::new(w, 0.0), Vec2::new(w, h)),
        ]
    }

    pub fn block_color(&self) -> Color {
        Color::from_argb_u32(self.block_color)
    }

    pub fn cursor_color(&self) -> Color {
        Color::from_argb_u32(self.cursor_color)
    }

    pub fn clear_color(&self) -> Color {
        Color::from_argb_u32(self.clear_color)
    }
}
