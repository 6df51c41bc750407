//! The maze-hosting level: frame-driven glue between player input and the
//! maze subsystem. Everything here is engine-free and testable; `main.rs`
//! owns rendering and input polling.

use maze_core::{
    Cell, MazeError, MazeGenerator, MazePlacement, PursuitController, Vec2, WallGrid, hits_wall,
    plan_placement, world_to_cell,
};
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

/// Pixels per grid cell.
pub const CELL_SIZE: f32 = 32.0;
/// Player movement speed, pixels per second.
pub const PLAYER_SPEED: f32 = 120.0;
/// Player bounding-box edge length.
pub const PLAYER_COLLISION_SIZE: f32 = 20.0;

pub const MAZE_WIDTH: usize = 25;
pub const MAZE_HEIGHT: usize = 15;

pub struct MazeLevel {
    pub grid: WallGrid,
    pub placement: MazePlacement,
    pub player_position: Vec2,
    pub item_collected: bool,
    pub enemy: PursuitController,
    rng: ChaCha8Rng,
}

impl MazeLevel {
    /// Build a fresh maze instance. One generator seeded from `seed` feeds
    /// generation, placement, and every later enemy decision.
    pub fn new(seed: u64) -> Result<Self, MazeError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let grid = MazeGenerator::new(MAZE_WIDTH, MAZE_HEIGHT).generate(&mut rng)?;
        let placement = plan_placement(&grid, &mut rng);
        let player_position = cell_origin_centered(placement.start, PLAYER_COLLISION_SIZE);
        Ok(Self {
            grid,
            placement,
            player_position,
            item_collected: false,
            enemy: PursuitController::new(),
            rng,
        })
    }

    pub fn update(&mut self, dt: f32, move_direction: Vec2) {
        self.move_player(dt, move_direction);
        let player_size = Vec2::splat(PLAYER_COLLISION_SIZE);
        self.enemy.update(
            dt,
            &mut self.player_position,
            player_size,
            &self.grid,
            CELL_SIZE,
            &mut self.rng,
        );
        if !self.item_collected && self.player_cell() == self.placement.item {
            self.item_collected = true;
        }
    }

    pub fn player_cell(&self) -> Cell {
        let center = self.player_position + Vec2::splat(PLAYER_COLLISION_SIZE) * 0.5;
        world_to_cell(center, CELL_SIZE)
    }

    fn move_player(&mut self, dt: f32, move_direction: Vec2) {
        let step = move_direction.normalized_or_zero() * (PLAYER_SPEED * dt);
        let size = Vec2::splat(PLAYER_COLLISION_SIZE);
        // Axis-separated so a blocked axis still lets the other one slide.
        let horizontal = Vec2::new(self.player_position.x + step.x, self.player_position.y);
        if !hits_wall(horizontal, size, &self.grid, CELL_SIZE) {
            self.player_position = horizontal;
        }
        let vertical = Vec2::new(self.player_position.x, self.player_position.y + step.y);
        if !hits_wall(vertical, size, &self.grid, CELL_SIZE) {
            self.player_position = vertical;
        }
    }
}

/// Top-left position that centers a square body of `body_size` in `cell`.
pub fn cell_origin_centered(cell: Cell, body_size: f32) -> Vec2 {
    Vec2::new(
        (cell.x as f32 + 0.5) * CELL_SIZE - body_size * 0.5,
        (cell.y as f32 + 0.5) * CELL_SIZE - body_size * 0.5,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_builds_the_same_level() {
        let first = MazeLevel::new(12_345).expect("level setup");
        let second = MazeLevel::new(12_345).expect("level setup");

        assert_eq!(first.grid.fingerprint(), second.grid.fingerprint());
        assert_eq!(first.placement, second.placement);
        assert_eq!(first.player_position, second.player_position);
    }

    #[test]
    fn player_starts_centered_on_the_start_cell() {
        let level = MazeLevel::new(7).expect("level setup");
        assert_eq!(level.player_cell(), level.placement.start);
        assert!(!hits_wall(
            level.player_position,
            Vec2::splat(PLAYER_COLLISION_SIZE),
            &level.grid,
            CELL_SIZE
        ));
    }

    #[test]
    fn player_never_walks_into_walls() {
        let mut level = MazeLevel::new(99).expect("level setup");
        // Grind against walls in every direction for a while.
        let directions = [
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(-1.0, 0.0),
            Vec2::new(0.0, -1.0),
            Vec2::new(1.0, 1.0),
        ];
        for direction in directions {
            for _ in 0..120 {
                level.update(1.0 / 60.0, direction);
                assert!(!hits_wall(
                    level.player_position,
                    Vec2::splat(PLAYER_COLLISION_SIZE),
                    &level.grid,
                    CELL_SIZE
                ));
            }
        }
    }

    #[test]
    fn stepping_onto_the_item_cell_collects_it() {
        let mut level = MazeLevel::new(4_242).expect("level setup");
        assert!(!level.item_collected);

        level.player_position = cell_origin_centered(level.placement.item, PLAYER_COLLISION_SIZE);
        level.update(1.0 / 60.0, Vec2::ZERO);
        assert!(level.item_collected);

        // The flag latches; later frames keep it set.
        level.update(1.0 / 60.0, Vec2::ZERO);
        assert!(level.item_collected);
    }
}
