use anyhow::{Context, Result};
use rand::Rng;

use blocks_engine::coords::Vec2;
use blocks_engine::geometry::{emit_fan, Polygon};
use blocks_engine::paint::Color;
use blocks_engine::scene::{DrawList, ZIndex};

use crate::config::DemoConfig;
use crate::physics::{BlockHandle, PhysicsWorld};

/// A simulated polygon: physics handle plus the local shape used for drawing.
#[derive(Debug, Clone)]
pub struct Block {
    pub handle: BlockHandle,
    pub shape: Polygon,
    pub color: Color,
}

impl Block {
    /// Spawns a regular-polygon block at `position`.
    pub fn spawn(world: &mut PhysicsWorld, cfg: &DemoConfig, position: Vec2) -> Result<Self> {
        let shape = Polygon::regular(cfg.block_sides, cfg.block_radius)
            .with_context(|| format!("a block needs at least 3 sides, got {}", cfg.block_sides))?;
        let handle = world.add_block(position, &shape, cfg.block_mass, cfg.block_elasticity)?;

        Ok(Self {
            handle,
            shape,
            color: cfg.block_color(),
        })
    }

    /// Records the block's filled shape at its current pose.
    ///
    /// Blocks whose body is gone draw nothing.
    pub fn draw(&self, world: &PhysicsWorld, list: &mut DrawList) {
        let Some(pose) = world.pose(self.handle) else { return };
        let vertices = self.shape.transformed(pose);
        list.push_fan(ZIndex::WORLD, emit_fan(pose.position, &vertices, self.color));
    }
}

/// Spawns `cfg.block_count` blocks uniformly over the window area.
pub fn spawn_blocks<R: Rng>(
    world: &mut PhysicsWorld,
    cfg: &DemoConfig,
    rng: &mut R,
) -> Result<Vec<Block>> {
    (0..cfg.block_count)
        .map(|_| {
            let position = Vec2::new(rng.gen_range(0.0..cfg.width), rng.gen_range(0.0..cfg.height));
            Block::spawn(world, cfg, position)
        })
        .collect()
}

/// Index of the first block whose shape contains `point`.
pub fn hit_test(blocks: &[Block], world: &PhysicsWorld, point: Vec2) -> Option<usize> {
    blocks
        .iter()
        .position(|b| world.contains_point(b.handle, point))
}

#[cfg(test)]
mod tests {
    use super::*;
    use blocks_engine::scene::DrawCmd;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn cfg() -> DemoConfig {
        DemoConfig { block_count: 12, ..DemoConfig::default() }
    }

    #[test]
    fn spawns_requested_count_inside_the_window() {
        let cfg = cfg();
        let mut world = PhysicsWorld::new(cfg.gravity, cfg.length_unit);
        let blocks = spawn_blocks(&mut world, &cfg, &mut StdRng::seed_from_u64(7)).unwrap();

        assert_eq!(blocks.len(), 12);
        for b in &blocks {
            let p = world.pose(b.handle).unwrap().position;
            assert!((0.0..cfg.width).contains(&p.x));
            assert!((0.0..cfg.height).contains(&p.y));
            assert_eq!(b.shape.vertices().len(), 6);
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let cfg = cfg();
        let layout = |seed| {
            let mut world = PhysicsWorld::new(cfg.gravity, cfg.length_unit);
            let blocks = spawn_blocks(&mut world, &cfg, &mut StdRng::seed_from_u64(seed)).unwrap();
            blocks
                .iter()
                .map(|b| world.pose(b.handle).unwrap().position)
                .collect::<Vec<_>>()
        };
        assert_eq!(layout(3), layout(3));
    }

    #[test]
    fn too_few_sides_is_an_error() {
        let cfg = DemoConfig { block_sides: 2, ..DemoConfig::default() };
        let mut world = PhysicsWorld::new(cfg.gravity, cfg.length_unit);
        assert!(Block::spawn(&mut world, &cfg, Vec2::zero()).is_err());
    }

    #[test]
    fn draw_emits_one_triangle_per_side_pivoting_on_the_body() {
        let cfg = DemoConfig::default();
        let mut world = PhysicsWorld::new(cfg.gravity, cfg.length_unit);
        let block = Block::spawn(&mut world, &cfg, Vec2::new(50.0, 60.0)).unwrap();

        let mut list = DrawList::new();
        block.draw(&world, &mut list);

        assert_eq!(list.len(), 6);
        for item in list.items() {
            let DrawCmd::Triangle(cmd) = &item.cmd else { panic!("expected a triangle") };
            assert_eq!(cmd.triangle.p0, Vec2::new(50.0, 60.0));
            assert_eq!(cmd.triangle.color, cfg.block_color());
        }
    }

    #[test]
    fn hit_test_picks_first_containing_block() {
        let cfg = DemoConfig::default();
        let mut world = PhysicsWorld::new(cfg.gravity, cfg.length_unit);
        let blocks = vec![
            Block::spawn(&mut world, &cfg, Vec2::new(100.0, 100.0)).unwrap(),
            Block::spawn(&mut world, &cfg, Vec2::new(300.0, 100.0)).unwrap(),
            Block::spawn(&mut world, &cfg, Vec2::new(302.0, 100.0)).unwrap(),
        ];

        assert_eq!(hit_test(&blocks, &world, Vec2::new(101.0, 99.0)), Some(0));
        assert_eq!(hit_test(&blocks, &world, Vec2::new(301.0, 100.0)), Some(1));
        assert_eq!(hit_test(&blocks, &world, Vec2::new(500.0, 500.0)), None);
    }
}
