//! Timed spawn/despawn state machine for the maze's pursuit enemy.

use rand_chacha::ChaCha8Rng;

use crate::collision::{boxes_overlap, hits_wall};
use crate::mazegen::WallGrid;
use crate::rng::{random_angle, random_unit_f32, random_usize};
use crate::types::{Cell, Vec2};

/// Seconds spent dormant before each spawn attempt.
pub const SPAWN_DELAY_SECONDS: f32 = 5.0;
/// Seconds an active enemy roams before despawning.
pub const ACTIVE_LIFETIME_SECONDS: f32 = 9.0;
/// Enemy movement speed, world units per second.
pub const ENEMY_SPEED: f32 = 70.0;
/// Speed of the contact displacement applied to the agent.
pub const CONTACT_PUSH_SPEED: f32 = 120.0;
/// Minimum straight-line distance between a spawn point and the agent.
pub const SPAWN_SAFETY_DISTANCE: f32 = 140.0;
/// Spawn-cell sampling attempts per dormant expiry.
pub const SPAWN_RETRY_BUDGET: usize = 50;
/// Per-tick chance of re-randomizing direction without being blocked.
pub const DIRECTION_JITTER_CHANCE: f32 = 0.02;
/// Bounding-box edge length of the enemy, world units.
pub const ENEMY_COLLISION_SIZE: f32 = 22.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PursuitState {
    Dormant,
    Active,
}

/// The pursuit enemy. Created once per maze instance and never destroyed;
/// while dormant it is logically absent (not drawn, not collided).
#[derive(Clone, Debug)]
pub struct PursuitController {
    position: Vec2,
    velocity: Vec2,
    state: PursuitState,
    timer: f32,
}

impl Default for PursuitController {
    fn default() -> Self {
        Self::new()
    }
}

impl PursuitController {
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            state: PursuitState::Dormant,
            timer: SPAWN_DELAY_SECONDS,
        }
    }

    pub fn is_active(&self) -> bool {
        self.state == PursuitState::Active
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn collision_size(&self) -> Vec2 {
        Vec2::splat(ENEMY_COLLISION_SIZE)
    }

    /// Advance the state machine by one frame. `agent_position` is the
    /// tracked agent's bounding-box origin; it is displaced in place when
    /// the active enemy overlaps the agent and the pushed position clears
    /// the corner-collision test.
    pub fn update(
        &mut self,
        dt: f32,
        agent_position: &mut Vec2,
        agent_size: Vec2,
        grid: &WallGrid,
        cell_size: f32,
        rng: &mut ChaCha8Rng,
    ) {
        self.timer -= dt;
        match self.state {
            PursuitState::Dormant => {
                if self.timer <= 0.0
                    && self.try_spawn(*agent_position, agent_size, grid, cell_size, rng)
                {
                    self.state = PursuitState::Active;
                    self.timer = ACTIVE_LIFETIME_SECONDS;
                }
                // A failed spawn search leaves the timer expired, so the
                // next tick retries.
            }
            PursuitState::Active => {
                self.roam(dt, grid, cell_size, rng);
                self.push_agent(dt, agent_position, agent_size, grid, cell_size);
                if self.timer <= 0.0 {
                    self.state = PursuitState::Dormant;
                    self.timer = SPAWN_DELAY_SECONDS;
                }
            }
        }
    }

    fn try_spawn(
        &mut self,
        agent_position: Vec2,
        agent_size: Vec2,
        grid: &WallGrid,
        cell_size: f32,
        rng: &mut ChaCha8Rng,
    ) -> bool {
        let agent_center = agent_position + agent_size * 0.5;
        for _ in 0..SPAWN_RETRY_BUDGET {
            let cell = Cell {
                x: random_usize(rng, 1, grid.width() - 2) as i32,
                y: random_usize(rng, 1, grid.height() - 2) as i32,
            };
            if !grid.is_passage(cell) {
                continue;
            }
            let cell_center =
                Vec2::new((cell.x as f32 + 0.5) * cell_size, (cell.y as f32 + 0.5) * cell_size);
            if cell_center.distance_to(agent_center) <= SPAWN_SAFETY_DISTANCE {
                continue;
            }
            self.position = cell_center - self.collision_size() * 0.5;
            self.velocity = velocity_from_angle(random_angle(rng));
            return true;
        }
        false
    }

    fn roam(&mut self, dt: f32, grid: &WallGrid, cell_size: f32, rng: &mut ChaCha8Rng) {
        let tentative = self.position + self.velocity * dt;
        if hits_wall(tentative, self.collision_size(), grid, cell_size) {
            // Blocked: hold position, keep speed, pick a fresh heading.
            self.velocity = velocity_from_angle(random_angle(rng));
            return;
        }
        self.position = tentative;
        if random_unit_f32(rng) < DIRECTION_JITTER_CHANCE {
            self.velocity = velocity_from_angle(random_angle(rng));
        }
    }

    fn push_agent(
        &self,
        dt: f32,
        agent_position: &mut Vec2,
        agent_size: Vec2,
        grid: &WallGrid,
        cell_size: f32,
    ) {
        if !boxes_overlap(self.position, self.collision_size(), *agent_position, agent_size) {
            return;
        }
        let enemy_center = self.position + self.collision_size() * 0.5;
        let agent_center = *agent_position + agent_size * 0.5;
        let push_direction = (agent_center - enemy_center).normalized_or_zero();
        if push_direction == Vec2::ZERO {
            return;
        }
        let displaced = *agent_position + push_direction * (CONTACT_PUSH_SPEED * dt);
        if !hits_wall(displaced, agent_size, grid, cell_size) {
            *agent_position = displaced;
        }
    }
}

fn velocity_from_angle(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin()) * ENEMY_SPEED
}
