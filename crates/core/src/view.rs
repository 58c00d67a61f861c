//! View data handed to the presentation layer.
//!
//! Everything in here is an owned copy; mutating a `ViewData` never touches the board.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::shapes::ShapeMatrix;
use crate::types::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ViewData {
    /// Identity of the active brick
    pub brick_id: Cell,
    /// Active brick in its current rotation
    pub brick: ShapeMatrix,
    /// Column of the shape's top-left corner
    pub x: i32,
    /// Row of the shape's top-left corner (negative inside the hidden buffer)
    pub y: i32,
    /// Row the shape would land on if dropped straight down
    pub ghost_y: i32,
    /// Spawn orientation of the brick that spawns next
    pub next_brick: ShapeMatrix,
    /// Spawn orientation of the held brick, if any
    pub held_brick: Option<ShapeMatrix>,
}

impl ViewData {
    /// Rows between the brick and its landing position
    pub fn drop_distance(&self) -> i32 {
        self.ghost_y - self.y
    }
}
