//! Rigid-body world backed by rapier2d.
//!
//! The demo works directly in logical pixels: +X right, +Y down. rapier's
//! `length_unit` is scaled accordingly so contact tolerances stay sensible.

use anyhow::{Context, Result};
use rapier2d::parry::query::PointQuery;
use rapier2d::prelude::*;

use blocks_engine::coords::Vec2;
use blocks_engine::geometry::{Polygon, Pose, Rotation};

/// Handle to a dynamic body and its single collider.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct BlockHandle {
    pub body: RigidBodyHandle,
    pub collider: ColliderHandle,
}

/// Owns the rapier pipeline and all body/collider sets.
pub struct PhysicsWorld {
    gravity: Vector<Real>,
    integration_parameters: IntegrationParameters,
    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
}

impl PhysicsWorld {
    pub fn new(gravity: Vec2, length_unit: f32) -> Self {
        let integration_parameters = IntegrationParameters {
            length_unit,
            ..IntegrationParameters::default()
        };

        Self {
            gravity: vector![gravity.x, gravity.y],
            integration_parameters,
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
        }
    }

    /// Adds a static rounded segment from `start` to `end`.
    pub fn add_boundary(&mut self, start: Vec2, end: Vec2, radius: f32, elasticity: f32) -> ColliderHandle {
        let body = self.bodies.insert(RigidBodyBuilder::fixed().build());
        let collider = ColliderBuilder::new(SharedShape::capsule(
            point![start.x, start.y],
            point![end.x, end.y],
            radius,
        ))
        .restitution(elasticity)
        .build();

        self.colliders
            .insert_with_parent(collider, body, &mut self.bodies)
    }

    /// Adds a dynamic convex body at `position` with `shape` as its collider.
    ///
    /// Inertia is derived from the shape and `mass`.
    pub fn add_block(
        &mut self,
        position: Vec2,
        shape: &Polygon,
        mass: f32,
        elasticity: f32,
    ) -> Result<BlockHandle> {
        let points: Vec<Point<Real>> = shape
            .vertices()
            .iter()
            .map(|v| point![v.x, v.y])
            .collect();

        let collider = ColliderBuilder::convex_hull(&points)
            .context("block polygon has no convex hull")?
            .mass(mass)
            .restitution(elasticity)
            .build();

        let body = self.bodies.insert(
            RigidBodyBuilder::dynamic()
                .translation(vector![position.x, position.y])
                .build(),
        );
        let collider = self
            .colliders
            .insert_with_parent(collider, body, &mut self.bodies);

        Ok(BlockHandle { body, collider })
    }

    /// Current pose of the block's body.
    pub fn pose(&self, handle: BlockHandle) -> Option<Pose> {
        let body = self.bodies.get(handle.body)?;
        let t = body.translation();
        let r = body.rotation();
        Some(Pose::new(
            Vec2::new(t.x, t.y),
            Rotation::from_unit(r.cos_angle(), r.sin_angle()),
        ))
    }

    /// Whether `point` lies inside the block's collider.
    pub fn contains_point(&self, handle: BlockHandle, point: Vec2) -> bool {
        self.colliders
            .get(handle.collider)
            .is_some_and(|c| c.shape().contains_point(c.position(), &point![point.x, point.y]))
    }

    /// Adds `force` at the center of mass until the next [`reset_forces`](Self::reset_forces).
    pub fn apply_force(&mut self, handle: BlockHandle, force: Vec2) {
        if let Some(body) = self.bodies.get_mut(handle.body) {
            body.add_force(vector![force.x, force.y], true);
        }
    }

    /// Clears user forces on every body.
    pub fn reset_forces(&mut self) {
        for (_, body) in self.bodies.iter_mut() {
            body.reset_forces(false);
        }
    }

    pub fn linear_velocity(&self, handle: BlockHandle) -> Option<Vec2> {
        let v = self.bodies.get(handle.body)?.linvel();
        Some(Vec2::new(v.x, v.y))
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Advances the simulation by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        self.integration_parameters.dt = dt;
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            None,
            &(),
            &(),
        );
    }

    /// Advances by `delta` split into `substeps` equal engine steps.
    pub fn step_substeps(&mut self, delta: f32, substeps: u32) {
        let substeps = substeps.max(1);
        let dt = delta / substeps as f32;
        for _ in 0..substeps {
            self.step(dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hexagon() -> Polygon {
        Polygon::regular(6, 10.0).unwrap()
    }

    fn world() -> PhysicsWorld {
        PhysicsWorld::new(Vec2::zero(), 100.0)
    }

    // ── bodies ────────────────────────────────────────────────────────────

    #[test]
    fn new_block_starts_at_its_position_unrotated() {
        let mut w = world();
        let h = w.add_block(Vec2::new(100.0, 50.0), &hexagon(), 5.0, 0.8).unwrap();

        let pose = w.pose(h).unwrap();
        assert_eq!(pose.position, Vec2::new(100.0, 50.0));
        assert_eq!(pose.rotation, Rotation::IDENTITY);
        assert_eq!(w.body_count(), 1);
    }

    // ── hit testing ───────────────────────────────────────────────────────

    #[test]
    fn contains_point_uses_world_position() {
        let mut w = world();
        let h = w.add_block(Vec2::new(200.0, 200.0), &hexagon(), 5.0, 0.8).unwrap();

        assert!(w.contains_point(h, Vec2::new(200.0, 200.0)));
        assert!(w.contains_point(h, Vec2::new(205.0, 202.0)));
        assert!(!w.contains_point(h, Vec2::new(0.0, 0.0)));
        assert!(!w.contains_point(h, Vec2::new(215.0, 200.0)));
    }

    // ── dynamics ──────────────────────────────────────────────────────────

    #[test]
    fn force_accelerates_block_along_its_direction() {
        let mut w = world();
        let h = w.add_block(Vec2::new(400.0, 300.0), &hexagon(), 5.0, 0.8).unwrap();

        for _ in 0..10 {
            w.reset_forces();
            w.apply_force(h, Vec2::new(3000.0, 0.0));
            w.step_substeps(1.0 / 60.0, 1);
        }

        let pose = w.pose(h).unwrap();
        assert!(pose.position.x > 400.0);
        assert!((pose.position.y - 300.0).abs() < 1.0e-3);
        assert!(w.linear_velocity(h).unwrap().x > 0.0);
    }

    #[test]
    fn without_forces_block_stays_put() {
        let mut w = world();
        let h = w.add_block(Vec2::new(400.0, 300.0), &hexagon(), 5.0, 0.8).unwrap();

        for _ in 0..30 {
            w.step(1.0 / 60.0);
        }
        assert_eq!(w.pose(h).unwrap().position, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn boundary_stops_a_block_thrown_at_it() {
        let mut w = world();
        w.add_boundary(Vec2::new(0.0, 0.0), Vec2::new(0.0, 600.0), 1.0, 1.0);
        let h = w.add_block(Vec2::new(40.0, 300.0), &hexagon(), 5.0, 0.8).unwrap();

        for _ in 0..240 {
            w.reset_forces();
            w.apply_force(h, Vec2::new(-20000.0, 0.0));
            w.step(1.0 / 60.0);
        }

        assert!(w.pose(h).unwrap().position.x > 0.0);
    }
}
