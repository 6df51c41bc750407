//! Procedural maze domain split into coherent submodules.

pub mod placement;

mod generator;
mod grid;
mod reachability;

pub use generator::{MIN_GRID_DIMENSION, MazeGenerator};
pub use grid::WallGrid;
pub use placement::{MazePlacement, plan_placement};
pub use reachability::is_reachable;

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use crate::types::MazeError;

/// Build a maze with a one-shot generator seeded from `seed`.
pub fn generate_maze(width: usize, height: usize, seed: u64) -> Result<WallGrid, MazeError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    MazeGenerator::new(width, height).generate(&mut rng)
}

#[cfg(test)]
mod tests {
    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    use super::{MazeGenerator, generate_maze};

    #[test]
    fn generate_maze_matches_generator_output() {
        let seed = 123_u64;
        let from_helper = generate_maze(25, 15, seed).expect("dimensions are valid");

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let from_generator =
            MazeGenerator::new(25, 15).generate(&mut rng).expect("dimensions are valid");

        assert_eq!(from_helper, from_generator);
    }
}
