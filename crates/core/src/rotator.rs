//! Rotation cursor - which rotation state of the active brick is in effect
//!
//! The board asks for the next state with [`RotationCursor::peek_next_shape`], tests it
//! for collisions, and only then calls [`RotationCursor::commit`].

use crate::shapes::{Brick, ShapeMatrix};

/// A candidate rotation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextShape {
    pub shape: ShapeMatrix,
    pub index: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct RotationCursor {
    brick: &'static Brick,
    index: usize,
}

impl RotationCursor {
    pub fn new(brick: &'static Brick) -> Self {
        Self { brick, index: 0 }
    }

    pub fn brick(&self) -> &'static Brick {
        self.brick
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current_shape(&self) -> ShapeMatrix {
        self.brick.shape(self.index)
    }

    /// State one step further along, without moving the cursor
    pub fn peek_next_shape(&self) -> NextShape {
        let index = (self.index + 1) % self.brick.rotation_count();
        NextShape {
            shape: self.brick.shape(index),
            index,
        }
    }

    pub fn commit(&mut self, index: usize) {
        self.index = index % self.brick.rotation_count();
    }

    /// Switch to another template, back at its spawn orientation
    pub fn set_brick(&mut self, brick: &'static Brick) {
        self.brick = brick;
        self.index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::brick;
    use crate::types::BrickKind;

    #[test]
    fn peek_does_not_move_the_cursor() {
        let cursor = RotationCursor::new(brick(BrickKind::T));
        let next = cursor.peek_next_shape();
        assert_eq!(next.index, 1);
        assert_eq!(cursor.index(), 0);
        assert_eq!(next.shape, brick(BrickKind::T).shape(1));
    }

    #[test]
    fn four_commits_return_to_spawn() {
        let mut cursor = RotationCursor::new(brick(BrickKind::J));
        let spawn = cursor.current_shape();
        for _ in 0..4 {
            let next = cursor.peek_next_shape();
            cursor.commit(next.index);
        }
        assert_eq!(cursor.index(), 0);
        assert_eq!(cursor.current_shape(), spawn);
    }

    #[test]
    fn o_brick_peeks_itself() {
        let cursor = RotationCursor::new(brick(BrickKind::O));
        let next = cursor.peek_next_shape();
        assert_eq!(next.index, 0);
        assert_eq!(next.shape, cursor.current_shape());
    }

    #[test]
    fn set_brick_resets_index() {
        let mut cursor = RotationCursor::new(brick(BrickKind::L));
        cursor.commit(3);
        cursor.set_brick(brick(BrickKind::S));
        assert_eq!(cursor.index(), 0);
        assert_eq!(cursor.brick().kind(), BrickKind::S);
    }

    #[test]
    fn commit_wraps_out_of_range_index() {
        let mut cursor = RotationCursor::new(brick(BrickKind::I));
        cursor.commit(5);
        assert_eq!(cursor.index(), 1);
    }
}
