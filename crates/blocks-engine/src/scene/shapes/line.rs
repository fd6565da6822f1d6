use crate::coords::Vec2;
use crate::geometry::Triangle;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Straight line segment with a constant width in logical pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    pub width: f32,
    pub color: Color,
}

impl LineCmd {
    #[inline]
    pub fn new(from: Vec2, to: Vec2, width: f32, color: Color) -> Self {
        Self { from, to, width, color }
    }

    /// Tessellates the segment into a quad made of two triangles.
    ///
    /// Returns `None` for zero-length or non-positive-width lines.
    pub fn to_triangles(&self) -> Option<[Triangle<Color>; 2]> {
        let dir = self.to - self.from;
        let len = dir.length();
        if len <= f32::EPSILON || self.width <= 0.0 {
            return None;
        }

        let n = dir.perp() * (self.width * 0.5 / len);
        let (a, b, c, d) = (self.from + n, self.to + n, self.to - n, self.from - n);

        Some([
            Triangle::new(a, b, c, self.color),
            Triangle::new(a, c, d, self.color),
        ])
    }
}

impl DrawList {
    /// Records a line segment.
    #[inline]
    pub fn push_line(&mut self, z: ZIndex, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.push(z, DrawCmd::Line(LineCmd::new(from, to, width, color)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_line_becomes_axis_aligned_quad() {
        let line = LineCmd::new(Vec2::new(0.0, 5.0), Vec2::new(10.0, 5.0), 2.0, Color::from_argb_u32(0xff00_0000));
        let [t0, t1] = line.to_triangles().unwrap();

        assert_eq!(t0.p0, Vec2::new(0.0, 6.0));
        assert_eq!(t0.p1, Vec2::new(10.0, 6.0));
        assert_eq!(t0.p2, Vec2::new(10.0, 4.0));
        assert_eq!(t1.p2, Vec2::new(0.0, 4.0));
    }

    #[test]
    fn degenerate_lines_produce_nothing() {
        let p = Vec2::new(3.0, 3.0);
        assert!(LineCmd::new(p, p, 1.0, Color::from_argb_u32(0xff00_0000)).to_triangles().is_none());
        assert!(LineCmd::new(p, Vec2::zero(), 0.0, Color::from_argb_u32(0xff00_0000)).to_triangles().is_none());
    }
}
