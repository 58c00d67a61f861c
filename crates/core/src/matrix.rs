//! Grid algorithms - collision, merge and line clearing
//!
//! Pure functions over a [`Grid`] and a [`ShapeMatrix`] placed with its top-left corner at
//! `(x, y)`. None of them mutate their input.
//!
//! Rows above the grid (`y < 0`) belong to the hidden buffer: a shape may hang into them
//! without colliding, but merging drops whatever lies there.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::grid::Grid;
use crate::score::line_clear_bonus;
use crate::shapes::{shape_cells, ShapeMatrix};
use crate::types::EMPTY;

/// Outcome of clearing full rows
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ClearRow {
    /// Number of rows removed
    pub lines_removed: usize,
    /// Indices of the removed rows in the input grid, top to bottom
    pub cleared_rows: Vec<usize>,
    /// Grid after compaction
    pub grid: Grid,
    /// Points awarded for this clear
    pub score_bonus: u32,
}

/// True if the shape at `(x, y)` leaves the grid sideways or through the floor, or lands on a
/// filled cell
pub fn intersects(grid: &Grid, shape: &ShapeMatrix, x: i32, y: i32) -> bool {
    let width = grid.width() as i32;
    let height = grid.height() as i32;

    shape_cells(shape).iter().any(|&(dx, dy)| {
        let tx = x + dx;
        let ty = y + dy;
        tx < 0 || tx >= width || ty >= height || grid.is_occupied(tx, ty)
    })
}

/// Copy of `grid` with the shape's cells written in at `(x, y)`
///
/// Cells that fall outside the grid are dropped. Overlaps are overwritten, so callers should
/// only merge positions that passed [`intersects`].
pub fn merge(grid: &Grid, shape: &ShapeMatrix, x: i32, y: i32) -> Grid {
    let mut merged = grid.clone();
    for (dx, dy) in shape_cells(shape) {
        let value = shape[dy as usize][dx as usize];
        merged.set(x + dx, y + dy, value);
    }
    merged
}

/// Remove every full row and let the rest fall
///
/// Uses a two-pointer pass from the bottom up: kept rows are copied down to the write
/// position and the rows left over at the top are zeroed.
pub fn clear_full_rows(grid: &Grid) -> ClearRow {
    let mut out = grid.clone();
    let width = out.width();
    let height = out.height();
    let mut cleared_rows = Vec::new();
    let mut write_y = height;

    let cells = out.cells_mut();
    for read_y in (0..height).rev() {
        let start = read_y * width;
        let full = width > 0 && cells[start..start + width].iter().all(|&cell| cell != EMPTY);
        if full {
            cleared_rows.push(read_y);
        } else {
            write_y -= 1;
            if write_y != read_y {
                cells.copy_within(start..start + width, write_y * width);
            }
        }
    }
    cells[..write_y * width].fill(EMPTY);

    cleared_rows.reverse();
    let lines_removed = cleared_rows.len();
    ClearRow {
        lines_removed,
        cleared_rows,
        grid: out,
        score_bonus: line_clear_bonus(lines_removed),
    }
}

/// Rows the shape can fall from `(x, y)` before it would collide
///
/// Zero if the shape is already resting or already colliding.
pub fn drop_distance(grid: &Grid, shape: &ShapeMatrix, x: i32, y: i32) -> i32 {
    if shape_cells(shape).is_empty() || intersects(grid, shape, x, y) {
        return 0;
    }
    let mut distance = 0;
    while !intersects(grid, shape, x, y + distance + 1) {
        distance += 1;
    }
    distance
}
