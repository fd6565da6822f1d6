use std::f32::consts::TAU;

use crate::coords::Vec2;

use super::{Pose, Rotation};

/// Convex polygon in body-local space.
///
/// Vertex order defines adjacency for fan emission. At least three vertices
/// are guaranteed by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vec2>,
}

impl Polygon {
    /// Returns `None` when fewer than three vertices are supplied.
    pub fn new(vertices: Vec<Vec2>) -> Option<Self> {
        (vertices.len() >= 3).then_some(Self { vertices })
    }

    /// Regular polygon centered on the origin.
    ///
    /// Vertex `k` sits at angle `2πk / sides` and distance `radius`, i.e. the
    /// scaled `sides`-th roots of unity in ascending angle order.
    pub fn regular(sides: usize, radius: f32) -> Option<Self> {
        let vertices = (0..sides)
            .map(|k| Rotation::from_angle(TAU * k as f32 / sides as f32).apply(Vec2::new(radius, 0.0)))
            .collect();
        Self::new(vertices)
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// World-space vertices for `pose`.
    pub fn transformed(&self, pose: Pose) -> Vec<Vec2> {
        transform(&self.vertices, pose)
    }
}

/// Maps body-local vertices into world space.
///
/// Each vertex is rotated by `pose.rotation` and offset by `pose.position`.
/// The rotation is used as-is; no normalization is performed. An empty slice
/// produces an empty result.
pub fn transform(vertices: &[Vec2], pose: Pose) -> Vec<Vec2> {
    vertices.iter().map(|&v| pose.apply(v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn centroid(points: &[Vec2]) -> Vec2 {
        let sum = points.iter().fold(Vec2::zero(), |acc, &p| acc + p);
        sum / points.len() as f32
    }

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1.0e-4
    }

    fn triangle() -> Vec<Vec2> {
        vec![Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0), Vec2::new(1.0, 3.0)]
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn new_requires_three_vertices() {
        assert!(Polygon::new(vec![]).is_none());
        assert!(Polygon::new(vec![Vec2::zero(), Vec2::new(1.0, 0.0)]).is_none());
        assert_eq!(Polygon::new(triangle()).map(|p| p.vertices().len()), Some(3));
    }

    #[test]
    fn regular_hexagon_lies_on_circle() {
        let hex = Polygon::regular(6, 10.0).unwrap();
        assert_eq!(hex.vertices().len(), 6);
        for v in hex.vertices() {
            assert!((v.length() - 10.0).abs() < 1.0e-4);
        }
        assert!(close(hex.vertices()[0], Vec2::new(10.0, 0.0)));
        assert!(close(hex.vertices()[1], Vec2::new(5.0, 10.0 * 3f32.sqrt() / 2.0)));
        assert!(close(centroid(hex.vertices()), Vec2::zero()));
    }

    #[test]
    fn regular_rejects_degenerate_side_counts() {
        assert!(Polygon::regular(2, 1.0).is_none());
    }

    // ── transform ─────────────────────────────────────────────────────────

    #[test]
    fn identity_rotation_is_pure_translation() {
        let pos = Vec2::new(7.0, -3.0);
        let out = transform(&triangle(), Pose::new(pos, Rotation::from_unit(1.0, 0.0)));
        let expected: Vec<Vec2> = triangle().into_iter().map(|v| v + pos).collect();
        assert_eq!(out, expected);
    }

    #[test]
    fn quarter_turn_maps_unit_x_above_position() {
        let pos = Vec2::new(5.0, 6.0);
        let out = transform(&[Vec2::new(1.0, 0.0)], Pose::new(pos, Rotation::from_unit(0.0, 1.0)));
        assert_eq!(out, vec![Vec2::new(5.0, 7.0)]);
    }

    #[test]
    fn preserves_count_and_moves_centroid_with_pose() {
        let poly = Polygon::new(triangle()).unwrap();
        for &(angle, pos) in &[
            (0.3_f32, Vec2::new(1.0, 2.0)),
            (2.0, Vec2::new(-40.0, 12.5)),
            (-1.1, Vec2::new(300.0, 0.0)),
        ] {
            let pose = Pose::new(pos, Rotation::from_angle(angle));
            let out = poly.transformed(pose);
            assert_eq!(out.len(), poly.vertices().len());
            let expected = pos + pose.rotation.apply(centroid(poly.vertices()));
            assert!(close(centroid(&out), expected));
        }
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let pose = Pose::new(Vec2::new(1.0, 1.0), Rotation::from_angle(0.5));
        assert!(transform(&[], pose).is_empty());
    }
}
