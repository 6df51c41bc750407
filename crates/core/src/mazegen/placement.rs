//! Start and item placement with quadrant bias and a reachable fallback.

use rand_chacha::ChaCha8Rng;

use crate::rng::{random_unit_f32, random_usize};
use crate::types::Cell;

use super::grid::WallGrid;
use super::reachability::is_reachable;

/// Biased sampling attempts before falling back to the farthest reachable cell.
pub const PLACEMENT_RETRY_BUDGET: usize = 150;
/// Share of attempts sampled from the half-ranges opposite the start cell.
pub const QUADRANT_BIAS_PROBABILITY: f32 = 0.7;
/// Preferred straight-line start-to-item separation, in cells. Soft: the
/// fallback may settle for less when no reachable cell is farther.
pub const MIN_ITEM_SEPARATION: f32 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MazePlacement {
    pub start: Cell,
    pub item: Cell,
}

/// Fix the entrance and the item cell for one maze instance. The item cell
/// is always a passage cell reachable from the start; the separation
/// threshold is best effort.
pub fn plan_placement(grid: &WallGrid, rng: &mut ChaCha8Rng) -> MazePlacement {
    let start = entrance_cell(grid);
    let bias_right = start.x < (grid.width() / 2) as i32;
    let bias_down = start.y < (grid.height() / 2) as i32;

    for _ in 0..PLACEMENT_RETRY_BUDGET {
        let biased = random_unit_f32(rng) < QUADRANT_BIAS_PROBABILITY;
        let candidate = Cell {
            x: sample_axis(rng, grid.width(), bias_right, biased),
            y: sample_axis(rng, grid.height(), bias_down, biased),
        };
        if grid.is_passage(candidate)
            && straight_line_distance(start, candidate) > MIN_ITEM_SEPARATION
            && is_reachable(start, candidate, grid)
        {
            return MazePlacement { start, item: candidate };
        }
    }

    MazePlacement { start, item: farthest_reachable_cell(grid, start) }
}

/// First interior passage cell in row-major scan order; the canonical
/// entrance/exit cell.
fn entrance_cell(grid: &WallGrid) -> Cell {
    for y in 1..grid.height() as i32 - 1 {
        for x in 1..grid.width() as i32 - 1 {
            let cell = Cell { x, y };
            if grid.is_passage(cell) {
                return cell;
            }
        }
    }
    Cell { x: 1, y: 1 }
}

fn sample_axis(rng: &mut ChaCha8Rng, dimension: usize, bias_high: bool, biased: bool) -> i32 {
    let half = dimension / 2;
    let (min_value, max_value) = if !biased {
        (1, dimension - 2)
    } else if bias_high {
        (half, dimension - 2)
    } else {
        (1, half)
    };
    random_usize(rng, min_value, max_value) as i32
}

fn farthest_reachable_cell(grid: &WallGrid, start: Cell) -> Cell {
    let mut best = start;
    let mut best_distance = 0.0_f32;
    for y in 1..grid.height() as i32 - 1 {
        for x in 1..grid.width() as i32 - 1 {
            let cell = Cell { x, y };
            if !grid.is_passage(cell) || !is_reachable(start, cell, grid) {
                continue;
            }
            let distance = straight_line_distance(start, cell);
            // Strict comparison: the first maximum in scan order wins ties.
            if distance > best_distance {
                best = cell;
                best_distance = distance;
            }
        }
    }
    best
}

fn straight_line_distance(a: Cell, b: Cell) -> f32 {
    let dx = (a.x - b.x) as f32;
    let dy = (a.y - b.y) as f32;
    (dx * dx + dy * dy).sqrt()
}
