use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use blocks_engine::coords::Vec2;
use blocks_engine::core::{App, AppControl, FrameCtx};
use blocks_engine::input::{
    InputEvent, InputFrame, Key, MouseButton, MouseButtonState, PointerButtonEvent,
};
use blocks_engine::render::shapes::triangle::TriangleRenderer;
use blocks_engine::scene::{DrawList, ZIndex};
use blocks_engine::time::FixedTimestep;

use crate::block::{hit_test, spawn_blocks, Block};
use crate::config::DemoConfig;
use crate::drag::DragState;
use crate::physics::PhysicsWorld;

/// The demo: a walled physics world full of blocks, one of which may be
/// dragged with the primary mouse button.
pub struct BlocksApp {
    cfg: DemoConfig,
    world: PhysicsWorld,
    blocks: Vec<Block>,
    drag: DragState,
    updates: FixedTimestep,

    draw_list: DrawList,
    renderer: TriangleRenderer,
    cursor_hidden: bool,
}

impl BlocksApp {
    pub fn new(cfg: DemoConfig) -> Result<Self> {
        let mut world = PhysicsWorld::new(cfg.gravity, cfg.length_unit);

        for (start, end) in cfg.boundaries() {
            world.add_boundary(start, end, cfg.wall_radius, cfg.wall_elasticity);
        }

        let mut rng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let blocks = spawn_blocks(&mut world, &cfg, &mut rng)?;

        log::info!(
            "world ready: {} blocks, {} bodies, {}x{} arena",
            blocks.len(),
            world.body_count(),
            cfg.width,
            cfg.height
        );

        Ok(Self {
            updates: FixedTimestep::new(cfg.update_interval, cfg.max_updates_per_frame),
            cfg,
            world,
            blocks,
            drag: DragState::Idle,
            draw_list: DrawList::new(),
            renderer: TriangleRenderer::new(),
            cursor_hidden: false,
        })
    }

    /// Applies this frame's pointer and focus events in arrival order.
    ///
    /// Only the left button grabs and lets go. Losing focus or the pointer
    /// leaving the window also lets go, so no motion is missed while dragging.
    fn handle_pointer(&mut self, frame: &InputFrame) {
        for ev in &frame.events {
            match ev {
                InputEvent::PointerButton(PointerButtonEvent {
                    button: MouseButton::Left,
                    state,
                    x,
                    y,
                }) => match state {
                    MouseButtonState::Pressed => self.grab(Vec2::new(*x, *y)),
                    MouseButtonState::Released => self.let_go(),
                },

                InputEvent::Focused(false) | InputEvent::PointerLeft => self.let_go(),

                _ => {}
            }
        }
    }

    fn grab(&mut self, pointer: Vec2) {
        let hit = hit_test(&self.blocks, &self.world, pointer);
        self.drag.press(pointer, hit);

        if let Some(index) = self.drag.dragged_block() {
            if let Some(pose) = self.world.pose(self.blocks[index].handle) {
                log::debug!(
                    "grabbed block {index} at ({:.1}, {:.1}), rotation {:.2} rad",
                    pointer.x,
                    pointer.y,
                    pose.rotation.angle()
                );
            }
        }
    }

    fn let_go(&mut self) {
        if let Some(index) = self.drag.dragged_block() {
            let speed = self
                .world
                .linear_velocity(self.blocks[index].handle)
                .map_or(0.0, |v| v.length());
            log::debug!("released block {index} moving at {speed:.1} px/s");
        }
        self.drag.release();
    }

    /// One fixed update: drag force, then the configured engine substeps.
    fn update(&mut self, pointer: Option<Vec2>) {
        self.world.reset_forces();

        if let Some(pointer) = pointer {
            if let Some((index, delta)) = self.drag.drag(pointer) {
                if let Some(block) = self.blocks.get(index) {
                    self.world.apply_force(block.handle, delta * self.cfg.drag_gain);
                }
            }
        }

        self.world.step_substeps(self.cfg.step_delta, self.cfg.substeps);
    }

    /// Rebuilds the draw list from current poses, with the crosshair on top.
    fn record(&mut self, pointer: Option<Vec2>) {
        self.draw_list.clear();

        for block in &self.blocks {
            block.draw(&self.world, &mut self.draw_list);
        }

        if let Some(p) = pointer {
            let r = self.cfg.cursor_half_extent;
            let (width, color) = (self.cfg.cursor_thickness, self.cfg.cursor_color());
            self.draw_list
                .push_line(ZIndex::OVERLAY, Vec2::new(p.x - r, p.y), Vec2::new(p.x + r, p.y), width, color);
            self.draw_list
                .push_line(ZIndex::OVERLAY, Vec2::new(p.x, p.y - r), Vec2::new(p.x, p.y + r), width, color);
        }
    }
}

impl App for BlocksApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if !self.cursor_hidden {
            ctx.window.set_cursor_visible(false);
            self.cursor_hidden = true;
        }

        if quit_requested(ctx.input_frame) {
            log::info!("escape pressed; quitting");
            ctx.runtime.exit();
            return AppControl::Continue;
        }

        self.handle_pointer(ctx.input_frame);

        let pointer = ctx.input.pointer_pos.map(Vec2::from);

        for _ in 0..self.updates.advance(ctx.time.dt) {
            self.update(pointer);
        }

        self.record(pointer);

        let clear = self.cfg.clear_color();
        let (renderer, draw_list) = (&mut self.renderer, &mut self.draw_list);
        ctx.render(clear, |rctx, target| renderer.render(rctx, target, draw_list))
    }
}

fn quit_requested(frame: &InputFrame) -> bool {
    frame.key_pressed(Key::Escape)
}
