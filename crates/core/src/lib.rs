pub mod collision;
pub mod mazegen;
pub mod pursuit;
pub mod types;

mod rng;

pub use collision::{CORNER_INSET, boxes_overlap, hits_wall, world_to_cell};
pub use mazegen::{
    MazeGenerator, MazePlacement, WallGrid, generate_maze, is_reachable, plan_placement,
};
pub use pursuit::PursuitController;
pub use types::*;
