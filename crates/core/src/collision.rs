//! Corner-based wall collision shared by the tracked agent and the pursuit
//! enemy. Boxes are shrunk by a small inset before sampling their corners so
//! a body flush against a cell boundary does not read the neighboring cell.

use crate::mazegen::WallGrid;
use crate::types::{Cell, Vec2};

/// Inward shrink applied to every side of a bounding box before the corner test.
pub const CORNER_INSET: f32 = 2.0;

/// True when any inset-adjusted corner of the box lands in a wall cell.
/// Corners outside the grid clamp to the border ring, which is wall.
pub fn hits_wall(position: Vec2, size: Vec2, grid: &WallGrid, cell_size: f32) -> bool {
    let left = position.x + CORNER_INSET;
    let top = position.y + CORNER_INSET;
    let right = position.x + size.x - CORNER_INSET;
    let bottom = position.y + size.y - CORNER_INSET;

    [
        Vec2::new(left, top),
        Vec2::new(right, top),
        Vec2::new(left, bottom),
        Vec2::new(right, bottom),
    ]
    .into_iter()
    .any(|corner| grid.is_wall(clamped_cell(corner, grid, cell_size)))
}

/// Axis-aligned overlap between two bounding boxes. Touching edges do not
/// count as overlap.
pub fn boxes_overlap(a_position: Vec2, a_size: Vec2, b_position: Vec2, b_size: Vec2) -> bool {
    a_position.x < b_position.x + b_size.x
        && a_position.x + a_size.x > b_position.x
        && a_position.y < b_position.y + b_size.y
        && a_position.y + a_size.y > b_position.y
}

/// Cell containing a world-space point.
pub fn world_to_cell(point: Vec2, cell_size: f32) -> Cell {
    Cell { x: (point.x / cell_size).floor() as i32, y: (point.y / cell_size).floor() as i32 }
}

fn clamped_cell(point: Vec2, grid: &WallGrid, cell_size: f32) -> Cell {
    let cell = world_to_cell(point, cell_size);
    Cell {
        x: cell.x.clamp(0, grid.width() as i32 - 1),
        y: cell.y.clamp(0, grid.height() as i32 - 1),
    }
}
