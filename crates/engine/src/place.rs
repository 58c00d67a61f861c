//! Placement - drive a brick straight to a target column and rotation
//!
//! [`apply_place`] turns a placement (column, rotation, optional hold) into the same
//! sequence of session commands a player would issue: hold, rotate, shift, hard drop. A
//! failed placement leaves the session exactly as it was.
//!
//! [`best_placement`] searches every reachable placement of the active brick and scores the
//! resulting grid with a weighted sum of aggregate height, complete lines, holes and
//! bumpiness.

use brickfall_core::{clear_full_rows, merge, shape_cells, Board, Grid};

use crate::session::{DownData, Session};
use crate::types::{EventSource, GameAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    HoldUnavailable,
    RotationOutOfRange,
    RotationBlocked,
    XOutOfBounds,
    XBlocked,
    NotPlayable,
}

impl PlaceError {
    pub fn code(self) -> &'static str {
        match self {
            PlaceError::HoldUnavailable => "hold_unavailable",
            PlaceError::NotPlayable => "not_playable",
            PlaceError::RotationOutOfRange
            | PlaceError::RotationBlocked
            | PlaceError::XOutOfBounds
            | PlaceError::XBlocked => "invalid_place",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PlaceError::HoldUnavailable => "hold requested when unavailable",
            PlaceError::RotationOutOfRange => "brick has no such rotation",
            PlaceError::RotationBlocked => "could not rotate to target rotation",
            PlaceError::XOutOfBounds => "target x would place brick out of bounds",
            PlaceError::XBlocked => "could not move to target x due to collision",
            PlaceError::NotPlayable => "game is over",
        }
    }
}

impl std::fmt::Display for PlaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for PlaceError {}

/// Hold (optionally), rotate to `target_rotation`, shift to `target_x`, then hard drop
///
/// `target_x` is the column of the shape's top-left corner, as in [`Board::offset`].
pub fn apply_place(
    session: &mut Session,
    target_x: i32,
    target_rotation: usize,
    use_hold: bool,
) -> Result<DownData, PlaceError> {
    if session.game_over() {
        return Err(PlaceError::NotPlayable);
    }

    let snapshot = session.clone();
    match steer(session, target_x, target_rotation, use_hold) {
        Ok(()) => Ok(session.hard_drop(EventSource::User)),
        Err(err) => {
            *session = snapshot;
            Err(err)
        }
    }
}

fn steer(
    session: &mut Session,
    target_x: i32,
    target_rotation: usize,
    use_hold: bool,
) -> Result<(), PlaceError> {
    if use_hold && !session.apply_action(GameAction::Hold) {
        return Err(PlaceError::HoldUnavailable);
    }

    let brick = session.board().active_brick();
    let count = brick.rotation_count();
    if target_rotation >= count {
        return Err(PlaceError::RotationOutOfRange);
    }

    // Rotation only goes one way, so wrap around.
    let current = session.board().rotation_index();
    let steps = (target_rotation + count - current) % count;
    for _ in 0..steps {
        if !session.apply_action(GameAction::Rotate) {
            return Err(PlaceError::RotationBlocked);
        }
    }

    let cells = shape_cells(&brick.shape(target_rotation));
    let min_dx = cells.iter().map(|&(dx, _)| dx).min().unwrap_or(0);
    let max_dx = cells.iter().map(|&(dx, _)| dx).max().unwrap_or(0);
    if target_x + min_dx < 0 || target_x + max_dx >= session.board().width() as i32 {
        return Err(PlaceError::XOutOfBounds);
    }

    let (x, _) = session.board().offset();
    let (action, steps) = if target_x < x {
        (GameAction::MoveLeft, x - target_x)
    } else {
        (GameAction::MoveRight, target_x - x)
    };
    for _ in 0..steps {
        if !session.apply_action(action) {
            return Err(PlaceError::XBlocked);
        }
    }

    Ok(())
}

/// A reachable final position of the active brick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: i32,
    pub rotation: usize,
    /// Row of the shape's top-left corner once landed
    pub landing_y: i32,
    /// Rows this placement would clear
    pub lines: usize,
    /// Heuristic value, higher is better
    pub score: f64,
}

/// Column heights, hole count and bumpiness of a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridFeatures {
    pub aggregate_height: u32,
    pub max_height: u32,
    pub holes: u32,
    pub bumpiness: u32,
}

impl GridFeatures {
    pub fn of(grid: &Grid) -> Self {
        let height = grid.height();
        let mut features = GridFeatures::default();
        let mut prev: Option<u32> = None;

        for x in 0..grid.width() as i32 {
            let mut column_height = 0u32;
            for y in 0..height as i32 {
                if grid.is_occupied(x, y) {
                    if column_height == 0 {
                        column_height = (height as i32 - y) as u32;
                    }
                } else if column_height > 0 {
                    features.holes += 1;
                }
            }
            features.aggregate_height += column_height;
            features.max_height = features.max_height.max(column_height);
            if let Some(p) = prev {
                features.bumpiness += p.abs_diff(column_height);
            }
            prev = Some(column_height);
        }
        features
    }
}

fn evaluate(features: GridFeatures, lines: usize) -> f64 {
    -0.510066 * f64::from(features.aggregate_height) + 0.760666 * lines as f64
        - 0.35663 * f64::from(features.holes)
        - 0.184483 * f64::from(features.bumpiness)
}

/// Best placement of the active brick, without using hold
///
/// Only placements reachable by rotating in place and then shifting sideways are
/// considered, which is exactly what [`apply_place`] can execute. Ties keep the first
/// candidate found (lowest rotation, then leftmost column).
pub fn best_placement(board: &Board) -> Option<Placement> {
    let brick = board.active_brick();
    let width = board.width() as i32;
    let mut best: Option<Placement> = None;

    for rotation in 0..brick.rotation_count() {
        let mut rotated = board.clone();
        let steps = (rotation + brick.rotation_count() - board.rotation_index())
            % brick.rotation_count();
        if !(0..steps).all(|_| rotated.rotate()) {
            continue;
        }

        // Walk left to the wall, then sweep right collecting each column.
        while rotated.move_left() {}
        let mut probe = rotated;
        loop {
            let (x, _) = probe.offset();
            let landing_y = probe.ghost_y();
            let grid = merge(&probe.grid(), &probe.active_shape(), x, landing_y);
            let cleared = clear_full_rows(&grid);
            let score = evaluate(GridFeatures::of(&cleared.grid), cleared.lines_removed);

            if best.map_or(true, |b| score > b.score) {
                best = Some(Placement {
                    x,
                    rotation,
                    landing_y,
                    lines: cleared.lines_removed,
                    score,
                });
            }

            if x >= width || !probe.move_right() {
                break;
            }
        }
    }

    best
}
