use super::{DrawCmd, ZIndex};

/// Stable sort key for draw items.
///
/// Ordering rules (derived, field order matters):
/// 1) `z`: ascending (back-to-front)
/// 2) `order`: ascending (insertion order for equal z)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SortKey {
    pub z: ZIndex,
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(z: ZIndex, order: u32) -> Self {
        Self { z, order }
    }
}

/// A single draw item: sort key + command.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for a frame.
///
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame
///   allocation once warmed
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    /// Pushes a draw command with the given z-index.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
        });

        self.sorted_dirty = true;
    }

    /// Iterates items in paint order without cloning draw commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        let items = &self.items;
        self.sorted_indices.sort_by_key(|&i| items[i].key);

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::geometry::Triangle;
    use crate::paint::Color;

    fn tri(x: f32) -> Triangle<Color> {
        Triangle::new(Vec2::new(x, 0.0), Vec2::new(x, 1.0), Vec2::new(x + 1.0, 0.0), Color::from_argb_u32(0xff00_0000))
    }

    fn first_x(item: &DrawItem) -> f32 {
        match &item.cmd {
            DrawCmd::Triangle(t) => t.triangle.p0.x,
            DrawCmd::Line(l) => l.from.x,
        }
    }

    #[test]
    fn paint_order_is_z_then_insertion() {
        let mut list = DrawList::new();
        list.push_triangle(ZIndex::OVERLAY, tri(0.0));
        list.push_triangle(ZIndex::WORLD, tri(1.0));
        list.push_triangle(ZIndex::WORLD, tri(2.0));
        list.push_triangle(ZIndex::new(-1), tri(3.0));

        let xs: Vec<f32> = list.iter_in_paint_order().map(first_x).collect();
        assert_eq!(xs, vec![3.0, 1.0, 2.0, 0.0]);
    }

    #[test]
    fn clear_resets_items_and_order() {
        let mut list = DrawList::new();
        list.push_triangle(ZIndex::WORLD, tri(0.0));
        assert_eq!(list.len(), 1);

        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.iter_in_paint_order().count(), 0);

        list.push_triangle(ZIndex::WORLD, tri(5.0));
        assert_eq!(list.items()[0].key.order, 0);
    }

    #[test]
    fn resorts_after_push_following_iteration() {
        let mut list = DrawList::new();
        list.push_triangle(ZIndex::OVERLAY, tri(0.0));
        assert_eq!(list.iter_in_paint_order().count(), 1);

        list.push_triangle(ZIndex::WORLD, tri(1.0));
        let xs: Vec<f32> = list.iter_in_paint_order().map(first_x).collect();
        assert_eq!(xs, vec![1.0, 0.0]);
    }
}
