use crate::scene::shapes::line::LineCmd;
use crate::scene::shapes::triangle::TriangleCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - teach `render::shapes::triangle` how to tessellate it
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Triangle(TriangleCmd),
    Line(LineCmd),
}
