//! Core rules module - pure, deterministic, and testable
//!
//! This crate holds the rules of the game: brick geometry, the brick queue, collision,
//! merging, line clearing and scoring. It has **no dependencies** on rendering, input or
//! timing. The caller decides when gravity happens; the board only answers whether an
//! action is legal and what the resulting state looks like.
//!
//! # Module Structure
//!
//! - [`shapes`]: the seven brick templates and their rotation matrices
//! - [`rng`]: seeded brick queue with a fixed lookahead
//! - [`rotator`]: rotation cursor over a brick's matrices
//! - [`grid`]: flat background grid of settled cells
//! - [`matrix`]: collision, merge, line clearing and drop distance
//! - [`board`]: the board state machine tying the above together
//! - [`hold`], [`score`], [`view`], [`config`], [`error`]
//!
//! # Rules
//!
//! - Board is 10 columns by 25 rows; the top 2 rows are a hidden spawn buffer
//! - Bricks spawn with the top-left of their 4x4 matrix at `(4, 0)`
//! - Rotation cycles through each brick's matrices with no wall kicks
//! - Clearing `n` rows at once awards `50 * n * n` points
//! - One hold per drop cycle
//!
//! # Example
//!
//! ```
//! use brickfall_core::Board;
//!
//! let mut board = Board::new(12345);
//! board.move_left();
//! board.rotate();
//!
//! while board.move_down() {}
//! board.merge_active_into_grid();
//! let cleared = board.clear_completed_rows();
//! board.add_score(cleared.score_bonus);
//!
//! assert!(!board.spawn_next());
//! assert_eq!(board.grid().occupied_count(), 4);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod grid;
pub mod hold;
pub mod matrix;
pub mod rng;
pub mod rotator;
pub mod score;
pub mod shapes;
pub mod view;

pub use brickfall_types as types;

pub use board::Board;
pub use config::BoardConfig;
pub use error::CoreError;
pub use grid::Grid;
pub use hold::HoldSlot;
pub use matrix::{clear_full_rows, drop_distance, intersects, merge, ClearRow};
pub use rng::{BrickQueue, RandomizerKind, SimpleRng};
pub use rotator::{NextShape, RotationCursor};
pub use score::{line_clear_bonus, Score};
pub use shapes::{brick, shape_cells, Brick, ShapeCells, ShapeMatrix};
pub use view::ViewData;
