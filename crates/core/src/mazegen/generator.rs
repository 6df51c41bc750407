//! Randomized depth-first maze carving over a two-step lattice.

use rand_chacha::ChaCha8Rng;

use crate::rng::random_usize;
use crate::types::{Cell, MazeError};

use super::grid::WallGrid;

/// Smallest dimension that leaves the seed cell a two-step neighbor strictly
/// inside the border.
pub const MIN_GRID_DIMENSION: usize = 5;

/// Interior cell where carving always begins.
const CARVE_SEED_CELL: Cell = Cell { x: 1, y: 1 };

const TWO_STEP_OFFSETS: [(i32, i32); 4] = [(0, -2), (2, 0), (0, 2), (-2, 0)];

pub struct MazeGenerator {
    width: usize,
    height: usize,
}

impl MazeGenerator {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Carve a perfect maze into a fresh all-wall grid. The carved interior
    /// spans a tree over the two-step lattice, so every passage cell is
    /// reachable from the seed cell; the border is forced back to wall as
    /// the final step.
    pub fn generate(&self, rng: &mut ChaCha8Rng) -> Result<WallGrid, MazeError> {
        if self.width < MIN_GRID_DIMENSION || self.height < MIN_GRID_DIMENSION {
            return Err(MazeError::GridTooSmall { width: self.width, height: self.height });
        }

        let mut grid = WallGrid::filled(self.width, self.height);
        grid.carve(CARVE_SEED_CELL);
        let mut stack = vec![CARVE_SEED_CELL];

        while let Some(&current) = stack.last() {
            let candidates = self.uncarved_two_step_neighbors(&grid, current);
            if candidates.is_empty() {
                stack.pop();
                continue;
            }
            let next = candidates[random_usize(rng, 0, candidates.len() - 1)];
            let wall_between = Cell { x: (current.x + next.x) / 2, y: (current.y + next.y) / 2 };
            grid.carve(wall_between);
            grid.carve(next);
            stack.push(next);
        }

        grid.fill_border();
        Ok(grid)
    }

    fn uncarved_two_step_neighbors(&self, grid: &WallGrid, cell: Cell) -> Vec<Cell> {
        TWO_STEP_OFFSETS
            .iter()
            .map(|&(dx, dy)| Cell { x: cell.x + dx, y: cell.y + dy })
            .filter(|&candidate| self.strictly_inside_border(candidate) && grid.is_wall(candidate))
            .collect()
    }

    fn strictly_inside_border(&self, cell: Cell) -> bool {
        cell.x > 0
            && cell.y > 0
            && (cell.x as usize) < self.width - 1
            && (cell.y as usize) < self.height - 1
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, VecDeque};

    use proptest::prelude::*;

    use crate::mazegen::generate_maze;
    use crate::types::MazeError;

    use super::*;

    #[test]
    fn degenerate_dimensions_fail_fast() {
        for (width, height) in [(4, 10), (10, 4), (3, 3), (0, 0)] {
            let result = generate_maze(width, height, 7);
            assert_eq!(result, Err(MazeError::GridTooSmall { width, height }));
        }
    }

    #[test]
    fn seed_cell_is_always_carved() {
        for seed in [1_u64, 42, 99, 4_096] {
            let grid = generate_maze(25, 15, seed).expect("dimensions are valid");
            assert!(grid.is_passage(CARVE_SEED_CELL));
        }
    }

    #[test]
    fn border_stays_wall_for_odd_and_even_dimensions() {
        for (width, height) in [(25, 15), (24, 16), (5, 5), (31, 7)] {
            for seed in [11_u64, 2_024, 77_777] {
                let grid = generate_maze(width, height, seed).expect("dimensions are valid");
                assert!(
                    border_is_all_walls(&grid),
                    "border must stay wall for {width}x{height} seed={seed}"
                );
            }
        }
    }

    #[test]
    fn same_seed_produces_byte_identical_grids() {
        let a = generate_maze(25, 15, 123_456).expect("dimensions are valid");
        let b = generate_maze(25, 15, 123_456).expect("dimensions are valid");
        assert_eq!(a.canonical_bytes(), b.canonical_bytes());
        assert_eq!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn different_seeds_produce_different_grids() {
        let a = generate_maze(25, 15, 1).expect("dimensions are valid");
        let b = generate_maze(25, 15, 2).expect("dimensions are valid");
        assert_ne!(a.canonical_bytes(), b.canonical_bytes());
    }

    #[test]
    fn every_passage_cell_connects_to_the_seed_cell() {
        let grid = generate_maze(25, 15, 987_654).expect("dimensions are valid");
        assert!(all_passages_connected(&grid));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]
        #[test]
        fn generated_grids_keep_border_walls_and_connected_interiors(
            seed in any::<u64>(),
            width in 5_usize..=31,
            height in 5_usize..=31,
        ) {
            let grid = generate_maze(width, height, seed).expect("dimensions are valid");
            prop_assert!(
                border_is_all_walls(&grid),
                "seed={seed}, {width}x{height} should keep the border walled"
            );
            prop_assert!(
                all_passages_connected(&grid),
                "seed={seed}, {width}x{height} should carve one connected interior"
            );
        }
    }

    fn border_is_all_walls(grid: &WallGrid) -> bool {
        let right = grid.width() as i32 - 1;
        let bottom = grid.height() as i32 - 1;
        (0..grid.width() as i32)
            .all(|x| grid.is_wall(Cell { x, y: 0 }) && grid.is_wall(Cell { x, y: bottom }))
            && (0..grid.height() as i32)
                .all(|y| grid.is_wall(Cell { x: 0, y }) && grid.is_wall(Cell { x: right, y }))
    }

    fn all_passages_connected(grid: &WallGrid) -> bool {
        let mut passages = Vec::new();
        for y in 0..grid.height() as i32 {
            for x in 0..grid.width() as i32 {
                let cell = Cell { x, y };
                if grid.is_passage(cell) {
                    passages.push(cell);
                }
            }
        }

        let Some(start) = passages.first().copied() else {
            return true;
        };

        let mut open = VecDeque::from([start]);
        let mut seen = BTreeSet::from([start]);
        while let Some(cell) = open.pop_front() {
            for next in [
                Cell { x: cell.x, y: cell.y - 1 },
                Cell { x: cell.x + 1, y: cell.y },
                Cell { x: cell.x, y: cell.y + 1 },
                Cell { x: cell.x - 1, y: cell.y },
            ] {
                if seen.contains(&next) || !grid.is_passage(next) {
                    continue;
                }
                seen.insert(next);
                open.push_back(next);
            }
        }

        seen.len() == passages.len()
    }
}
