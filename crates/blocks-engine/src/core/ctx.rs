use winit::window::Window;

use crate::coords::Viewport;
use crate::device::{Gpu, SurfaceErrorAction};
use crate::input::{InputFrame, InputState};
use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};
use crate::time::FrameTime;
use crate::window::RuntimeCtx;

use super::app::AppControl;

/// Window handle plus helpers that do not leak winit types.
pub struct WindowCtx<'a> {
    pub window: &'a Window,
}

impl<'a> WindowCtx<'a> {
    /// Returns the logical window size as `(width, height)` in logical pixels.
    pub fn logical_size(&self) -> (f32, f32) {
        let logi: winit::dpi::LogicalSize<f64> =
            self.window.inner_size().to_logical(self.window.scale_factor());
        (logi.width as f32, logi.height as f32)
    }

    /// Shows or hides the OS cursor while it is over the window.
    pub fn set_cursor_visible(&self, visible: bool) {
        self.window.set_cursor_visible(visible);
    }
}

/// Per-frame context passed to `core::App::on_frame`.
///
/// Lifetimes:
/// - `'a` is the duration of the callback invocation
/// - `'w` is the window-borrow lifetime carried by `Gpu<'w>`
pub struct FrameCtx<'a, 'w> {
    pub window:      WindowCtx<'a>,
    pub gpu:         &'a mut Gpu<'w>,
    pub input:       &'a InputState,
    pub input_frame: &'a InputFrame,
    pub time:        FrameTime,
    pub runtime:     &'a mut RuntimeCtx,
}

impl<'a, 'w> FrameCtx<'a, 'w> {
    /// Clears the surface with `clear`, calls `draw` with a ready [`RenderCtx`]
    /// and [`RenderTarget`], then presents the frame.
    ///
    /// Surface errors skip the frame; a fatal one returns `AppControl::Exit`.
    pub fn render<F>(&mut self, clear: Color, draw: F) -> AppControl
    where
        F: FnOnce(&RenderCtx<'_>, &mut RenderTarget<'_>),
    {
        let (w, h) = self.window.logical_size();
        let clear = wgpu::Color {
            r: clear.r as f64,
            g: clear.g as f64,
            b: clear.b as f64,
            a: clear.a as f64,
        };

        let presented = {
            let gpu = &*self.gpu;
            let rctx = RenderCtx::new(gpu.device(), gpu.queue(), gpu.surface_format(), Viewport::new(w, h));

            gpu.present_frame(clear, |encoder, view| {
                let mut target = RenderTarget::new(encoder, view);
                draw(&rctx, &mut target);
            })
        };

        let Err(err) = presented else {
            return AppControl::Continue;
        };

        match self.gpu.handle_surface_error(err) {
            SurfaceErrorAction::Fatal => {
                log::error!("surface error is fatal; exiting");
                AppControl::Exit
            }
            SurfaceErrorAction::Reconfigured => {
                log::debug!("surface reconfigured; frame skipped");
                AppControl::Continue
            }
            SurfaceErrorAction::SkipFrame => {
                log::warn!("surface unavailable; frame skipped");
                AppControl::Continue
            }
        }
    }
}
