use std::iter::FusedIterator;

use crate::coords::Vec2;

/// One rasterizable triangle with a pass-through color.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle<C> {
    pub p0: Vec2,
    pub p1: Vec2,
    pub p2: Vec2,
    pub color: C,
}

impl<C> Triangle<C> {
    #[inline]
    pub const fn new(p0: Vec2, p1: Vec2, p2: Vec2, color: C) -> Self {
        Self { p0, p1, p2, color }
    }
}

/// Lazy triangle fan over a borrowed vertex ring.
///
/// Yields `(center, v[i + 1], v[i])` for every `i`, wrapping the last vertex
/// back to the first, so an `N`-vertex ring produces exactly `N` triangles.
#[derive(Debug, Clone)]
pub struct Fan<'a, C> {
    center: Vec2,
    vertices: &'a [Vec2],
    color: C,
    next: usize,
}

/// Emits a triangle fan pivoting on `center`.
///
/// Vertex order within each triangle is pivot, next, current. `color` is not
/// interpreted and is copied onto every triangle.
pub fn emit_fan<C: Copy>(center: Vec2, vertices: &[Vec2], color: C) -> Fan<'_, C> {
    Fan {
        center,
        vertices,
        color,
        next: 0,
    }
}

impl<C: Copy> Iterator for Fan<'_, C> {
    type Item = Triangle<C>;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.vertices.len();
        if self.next >= n {
            return None;
        }

        let i = self.next;
        self.next += 1;

        Some(Triangle::new(
            self.center,
            self.vertices[(i + 1) % n],
            self.vertices[i],
            self.color,
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.vertices.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl<C: Copy> ExactSizeIterator for Fan<'_, C> {}

impl<C: Copy> FusedIterator for Fan<'_, C> {}
