//! Board module - the rules state machine
//!
//! A board owns the settled grid, the falling brick (template, rotation and offset), the
//! brick queue, the hold slot and the score. Every movement is tested against the grid
//! before it is committed, so after each accepted call the falling brick stays inside the
//! side walls and above the floor without overlapping settled cells.
//!
//! The board never decides when gravity happens. A drop cycle, driven by the caller, is:
//!
//! 1. [`Board::move_down`] returns `false`
//! 2. [`Board::merge_active_into_grid`]
//! 3. [`Board::clear_completed_rows`] (the caller applies the bonus)
//! 4. [`Board::spawn_next`], which reports game over
//!
//! Blocked actions return `false` and leave the board untouched.

use arrayvec::ArrayVec;

use crate::config::BoardConfig;
use crate::error::CoreError;
use crate::grid::Grid;
use crate::hold::HoldSlot;
use crate::matrix::{clear_full_rows, drop_distance, intersects, merge, ClearRow};
use crate::rng::BrickQueue;
use crate::rotator::RotationCursor;
use crate::score::Score;
use crate::shapes::{shape_cells, Brick, ShapeCells, ShapeMatrix};
use crate::types::{BrickKind, MoveDirection, LOOKAHEAD};
use crate::view::ViewData;

#[derive(Debug, Clone)]
pub struct Board {
    config: BoardConfig,
    grid: Grid,
    queue: BrickQueue,
    cursor: RotationCursor,
    x: i32,
    y: i32,
    score: Score,
    hold: HoldSlot,
    /// Set by a merge, consumed by the next spawn (re-arms the hold slot)
    merged_since_spawn: bool,
}

impl Board {
    /// Default 10x25 board with a uniform queue
    ///
    /// The first brick is already at the spawn offset.
    pub fn new(seed: u32) -> Self {
        let config = BoardConfig::default();
        Self::build(config, BrickQueue::with_randomizer(config.randomizer, seed))
    }

    pub fn with_config(config: BoardConfig, seed: u32) -> Result<Self, CoreError> {
        config.validate()?;
        Ok(Self::build(
            config,
            BrickQueue::with_randomizer(config.randomizer, seed),
        ))
    }

    /// Board dealing from a caller-built queue; `config.randomizer` is ignored
    pub fn with_queue(config: BoardConfig, queue: BrickQueue) -> Result<Self, CoreError> {
        config.validate()?;
        Ok(Self::build(config, queue))
    }

    fn build(config: BoardConfig, mut queue: BrickQueue) -> Self {
        let first = queue.next();
        Self {
            config,
            grid: Grid::new(config.width, config.height),
            queue,
            cursor: RotationCursor::new(first),
            x: config.spawn_x,
            y: config.spawn_y,
            score: Score::new(),
            hold: HoldSlot::new(),
            merged_since_spawn: false,
        }
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// `(width, height)` including the hidden rows
    pub fn dimensions(&self) -> (usize, usize) {
        (self.grid.width(), self.grid.height())
    }

    /// Owned copy of the settled cells
    pub fn grid(&self) -> Grid {
        self.grid.clone()
    }

    /// Replace the settled cells, e.g. to set up a puzzle
    ///
    /// The falling brick is left where it is; call [`Board::spawn_next`] afterwards to get a
    /// fresh game-over check against the new grid.
    pub fn load_grid(&mut self, grid: Grid) -> Result<(), CoreError> {
        if grid.width() != self.grid.width() || grid.height() != self.grid.height() {
            return Err(CoreError::DimensionMismatch {
                width: self.grid.width(),
                height: self.grid.height(),
                found_width: grid.width(),
                found_height: grid.height(),
            });
        }
        self.grid = grid;
        Ok(())
    }

    pub fn active_brick(&self) -> &'static Brick {
        self.cursor.brick()
    }

    pub fn active_kind(&self) -> BrickKind {
        self.cursor.brick().kind()
    }

    pub fn rotation_index(&self) -> usize {
        self.cursor.index()
    }

    pub fn active_shape(&self) -> ShapeMatrix {
        self.cursor.current_shape()
    }

    /// Top-left `(x, y)` of the falling brick's shape
    pub fn offset(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Absolute cells covered by the falling brick
    pub fn active_cells(&self) -> ShapeCells {
        shape_cells(&self.cursor.current_shape())
            .into_iter()
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
            .collect()
    }

    /// Row the falling brick would land on
    pub fn ghost_y(&self) -> i32 {
        self.y + drop_distance(&self.grid, &self.cursor.current_shape(), self.x, self.y)
    }

    /// Kinds of the upcoming bricks, next first
    pub fn queue_preview(&self) -> ArrayVec<BrickKind, LOOKAHEAD> {
        self.queue.lookahead().iter().map(|b| b.kind()).collect()
    }

    pub fn held_brick(&self) -> Option<&'static Brick> {
        self.hold.held()
    }

    pub fn can_hold(&self) -> bool {
        self.hold.can_hold()
    }

    pub fn score(&self) -> u32 {
        self.score.value()
    }

    pub fn add_score(&mut self, points: u32) {
        self.score.add(points);
    }

    /// Shift the falling brick one cell if nothing is in the way
    pub fn try_move(&mut self, direction: MoveDirection) -> bool {
        let (dx, dy) = direction.delta();
        let (nx, ny) = (self.x + dx, self.y + dy);
        if intersects(&self.grid, &self.cursor.current_shape(), nx, ny) {
            return false;
        }
        self.x = nx;
        self.y = ny;
        true
    }

    pub fn move_down(&mut self) -> bool {
        self.try_move(MoveDirection::Down)
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(MoveDirection::Left)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(MoveDirection::Right)
    }

    /// Advance to the next rotation state in place
    ///
    /// There are no wall kicks: a rotation blocked at the current offset simply fails.
    pub fn rotate(&mut self) -> bool {
        let next = self.cursor.peek_next_shape();
        if intersects(&self.grid, &next.shape, self.x, self.y) {
            return false;
        }
        self.cursor.commit(next.index);
        true
    }

    /// Take the next brick from the queue and put it at the spawn offset
    ///
    /// Returns `true` if the new brick collides right away, which means game over. The brick
    /// is placed either way.
    pub fn spawn_next(&mut self) -> bool {
        if self.merged_since_spawn {
            self.hold.new_cycle();
            self.merged_since_spawn = false;
        }
        let brick = self.queue.next();
        self.place_at_spawn(brick);
        intersects(&self.grid, &self.cursor.current_shape(), self.x, self.y)
    }

    fn place_at_spawn(&mut self, brick: &'static Brick) {
        self.cursor.set_brick(brick);
        self.x = self.config.spawn_x;
        self.y = self.config.spawn_y;
    }

    /// Write the falling brick into the grid at its current offset
    ///
    /// Performs no legality check; only call once `move_down` has failed.
    pub fn merge_active_into_grid(&mut self) {
        self.grid = merge(&self.grid, &self.cursor.current_shape(), self.x, self.y);
        self.merged_since_spawn = true;
    }

    /// Remove full rows; the bonus is returned, not added to the score
    pub fn clear_completed_rows(&mut self) -> ClearRow {
        let result = clear_full_rows(&self.grid);
        self.grid = result.grid.clone();
        result
    }

    /// Swap the falling brick with the held one
    ///
    /// Allowed once per drop cycle. The incoming brick starts over at rotation 0 at the spawn
    /// offset; with an empty slot it comes from the queue instead. Refused without any state
    /// change if the incoming brick would collide at the spawn offset, or if the falling brick
    /// is already merged and waiting for [`Board::spawn_next`].
    pub fn hold(&mut self) -> bool {
        if self.merged_since_spawn || !self.hold.can_hold() {
            return false;
        }

        let incoming = self.hold.held().unwrap_or_else(|| self.queue.peek_next());
        if intersects(
            &self.grid,
            &incoming.base_shape(),
            self.config.spawn_x,
            self.config.spawn_y,
        ) {
            return false;
        }

        let brick = match self.hold.swap(self.cursor.brick()) {
            Some(previous) => previous,
            None => self.queue.next(),
        };
        self.place_at_spawn(brick);
        true
    }

    /// Owned view of the falling brick and the previews
    pub fn snapshot(&self) -> ViewData {
        ViewData {
            brick_id: self.cursor.brick().id(),
            brick: self.cursor.current_shape(),
            x: self.x,
            y: self.y,
            ghost_y: self.ghost_y(),
            next_brick: self.queue.peek_next().base_shape(),
            held_brick: self.hold.held().map(Brick::base_shape),
        }
    }

    /// Start a new game: empty grid, zero score, empty hold slot, fresh brick
    ///
    /// The queue carries on from where it was.
    pub fn reset(&mut self) {
        self.grid = Grid::new(self.config.width, self.config.height);
        self.score.reset();
        self.hold.clear();
        self.merged_since_spawn = false;
        self.spawn_next();
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(kinds: &[BrickKind]) -> Board {
        Board::with_queue(BoardConfig::default(), BrickQueue::with_preset(kinds, 1)).unwrap()
    }

    #[test]
    fn first_brick_waits_at_spawn() {
        let board = board_with(&[BrickKind::T]);
        assert_eq!(board.active_kind(), BrickKind::T);
        assert_eq!(board.offset(), (4, 0));
        assert_eq!(board.rotation_index(), 0);
    }

    #[test]
    fn blocked_move_leaves_state() {
        let mut board = board_with(&[BrickKind::O]);
        // O occupies shape columns 1..=2; at x = -1 it touches the left wall
        for _ in 0..5 {
            board.move_left();
        }
        assert_eq!(board.offset(), (-1, 0));
        assert!(!board.move_left());
        assert_eq!(board.offset(), (-1, 0));
    }

    #[test]
    fn hold_flag_rearms_only_after_merge() {
        let mut board = board_with(&[BrickKind::T, BrickKind::I, BrickKind::O, BrickKind::S]);
        assert!(board.hold());
        assert_eq!(board.active_kind(), BrickKind::I);
        assert!(!board.hold());

        // Spawning without a merge does not re-arm the slot
        board.spawn_next();
        assert!(!board.can_hold());

        while board.move_down() {}
        board.merge_active_into_grid();
        board.spawn_next();
        assert!(board.can_hold());
    }

    #[test]
    fn hold_refused_between_merge_and_spawn() {
        let mut board = board_with(&[BrickKind::O, BrickKind::T, BrickKind::I]);
        while board.move_down() {}
        board.merge_active_into_grid();

        assert!(!board.hold());
        assert!(board.held_brick().is_none());
        assert_eq!(board.active_kind(), BrickKind::O);
        assert_eq!(board.grid().occupied_count(), 4);

        assert!(!board.spawn_next());
        assert_eq!(board.active_kind(), BrickKind::T);
        assert!(board.hold());
        assert_eq!(board.held_brick().map(|b| b.kind()), Some(BrickKind::T));
    }

    #[test]
    fn ghost_matches_drop_distance() {
        let board = board_with(&[BrickKind::O]);
        assert_eq!(board.ghost_y(), 22);
        assert_eq!(board.snapshot().drop_distance(), 22);
    }

    #[test]
    fn load_grid_checks_dimensions() {
        let mut board = Board::new(1);
        assert!(matches!(
            board.load_grid(Grid::new(5, 5)),
            Err(CoreError::DimensionMismatch { .. })
        ));
        assert!(board.load_grid(Grid::new(10, 25)).is_ok());
    }
}
