use crate::geometry::{Fan, Triangle};
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Filled triangle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleCmd {
    pub triangle: Triangle<Color>,
}

impl DrawList {
    /// Records a filled triangle.
    #[inline]
    pub fn push_triangle(&mut self, z: ZIndex, triangle: Triangle<Color>) {
        self.push(z, DrawCmd::Triangle(TriangleCmd { triangle }));
    }

    /// Records every triangle of a fan, in emission order.
    pub fn push_fan(&mut self, z: ZIndex, fan: Fan<'_, Color>) {
        for triangle in fan {
            self.push_triangle(z, triangle);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::coords::Vec2;
    use crate::geometry::{emit_fan, Polygon};
    use crate::paint::Color;
    use crate::scene::{DrawCmd, DrawList, ZIndex};

    #[test]
    fn push_fan_records_one_command_per_vertex() {
        let hex = Polygon::regular(6, 10.0).unwrap();
        let mut list = DrawList::new();
        list.push_fan(ZIndex::WORLD, emit_fan(Vec2::zero(), hex.vertices(), Color::from_argb_u32(0xff00_0000)));

        assert_eq!(list.len(), 6);
        assert!(list.items().iter().all(|i| matches!(i.cmd, DrawCmd::Triangle(_))));
    }
}
