//! Errors for building boards and grids from caller-supplied data.
//!
//! Gameplay never fails with an error: blocked moves return `false` and game over is a
//! value returned by [`crate::Board::spawn_next`].

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("grid must have at least one row and one column")]
    EmptyGrid,

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cell value {value} at ({x}, {y}) is not a brick id")]
    InvalidCell { x: usize, y: usize, value: u8 },

    #[error("grid is {found_width}x{found_height}, board expects {width}x{height}")]
    DimensionMismatch {
        width: usize,
        height: usize,
        found_width: usize,
        found_height: usize,
    },

    #[error("invalid board config: {0}")]
    InvalidConfig(&'static str),
}
