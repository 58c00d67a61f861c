//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no required dependencies, so they can be
//! used by the rules engine, the session controller and any presentation layer alike.
//!
//! # Board Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BOARD_WIDTH` | 10 | Columns (indexed 0-9) |
//! | `BOARD_HEIGHT` | 25 | Rows, hidden buffer included (indexed 0-24) |
//! | `HIDDEN_ROWS` | 2 | Invisible rows at the top used for spawn clearance |
//! | `SHAPE_SIZE` | 4 | Every brick shape is a 4x4 matrix |
//! | `LOOKAHEAD` | 4 | Upcoming bricks visible in the preview |
//! | `SPAWN_X`, `SPAWN_Y` | 4, 0 | Top-left placement of a freshly spawned shape |
//!
//! # Examples
//!
//! ```
//! use brickfall_types::{BrickKind, GameAction, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! // Brick identities double as cell values
//! assert_eq!(BrickKind::I.id(), 1);
//! assert_eq!(BrickKind::from_id(4), Some(BrickKind::O));
//!
//! // Parse from string (case-insensitive)
//! assert_eq!(BrickKind::from_str("t"), Some(BrickKind::T));
//!
//! // Parse a command
//! assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 25);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: usize = 10;

/// Board height in cells, hidden buffer included (25 rows)
pub const BOARD_HEIGHT: usize = 25;

/// Rows above the visible playfield reserved for spawning
pub const HIDDEN_ROWS: usize = 2;

/// Side length of every brick shape matrix
pub const SHAPE_SIZE: usize = 4;

/// Number of upcoming bricks that can be previewed without consuming them
pub const LOOKAHEAD: usize = 4;

/// Spawn column of the shape's top-left corner
pub const SPAWN_X: i32 = 4;

/// Spawn row of the shape's top-left corner (top of the hidden buffer)
pub const SPAWN_Y: i32 = 0;

/// Points per cleared line, squared: `LINE_CLEAR_BASE * lines * lines`
pub const LINE_CLEAR_BASE: u32 = 50;

/// Length of a timed game in seconds
pub const TWO_MINUTES_SECS: u32 = 120;

/// A cell on the game board
///
/// - `0`: empty
/// - `1..=7`: settled cell of the brick with that [`BrickKind::id`]
pub type Cell = u8;

/// The empty cell value
pub const EMPTY: Cell = 0;

/// The seven brick kinds
///
/// The discriminant order matches the cell value each kind paints:
/// I=1, J=2, L=3, O=4, S=5, T=6, Z=7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BrickKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl BrickKind {
    /// Every kind, in identity order
    pub const ALL: [BrickKind; 7] = [
        BrickKind::I,
        BrickKind::J,
        BrickKind::L,
        BrickKind::O,
        BrickKind::S,
        BrickKind::T,
        BrickKind::Z,
    ];

    /// Cell value painted by this kind (1..=7)
    pub fn id(self) -> Cell {
        match self {
            BrickKind::I => 1,
            BrickKind::J => 2,
            BrickKind::L => 3,
            BrickKind::O => 4,
            BrickKind::S => 5,
            BrickKind::T => 6,
            BrickKind::Z => 7,
        }
    }

    /// Kind for a cell value, `None` for empty or unknown values
    ///
    /// # Examples
    ///
    /// ```
    /// use brickfall_types::BrickKind;
    ///
    /// assert_eq!(BrickKind::from_id(7), Some(BrickKind::Z));
    /// assert_eq!(BrickKind::from_id(0), None);
    /// assert_eq!(BrickKind::from_id(8), None);
    /// ```
    pub fn from_id(id: Cell) -> Option<Self> {
        match id {
            1..=7 => Some(Self::ALL[usize::from(id) - 1]),
            _ => None,
        }
    }

    /// Parse brick kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(BrickKind::I),
            "j" => Some(BrickKind::J),
            "l" => Some(BrickKind::L),
            "o" => Some(BrickKind::O),
            "s" => Some(BrickKind::S),
            "t" => Some(BrickKind::T),
            "z" => Some(BrickKind::Z),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BrickKind::I => "i",
            BrickKind::J => "j",
            BrickKind::L => "l",
            BrickKind::O => "o",
            BrickKind::S => "s",
            BrickKind::T => "t",
            BrickKind::Z => "z",
        }
    }
}

/// Direction of a single-cell translation of the active brick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveDirection {
    Left,
    Right,
    Down,
}

impl MoveDirection {
    /// Offset `(dx, dy)` applied by this move
    pub fn delta(self) -> (i32, i32) {
        match self {
            MoveDirection::Left => (-1, 0),
            MoveDirection::Right => (1, 0),
            MoveDirection::Down => (0, 1),
        }
    }
}

/// Kind of movement event delivered to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EventType {
    Down,
    Left,
    Right,
    Rotate,
}

/// Who produced a movement event
///
/// - **User**: an explicit player command
/// - **Thread**: the caller's gravity timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EventSource {
    User,
    Thread,
}

/// A movement request: what to do and who asked for it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveEvent {
    pub event_type: EventType,
    pub source: EventSource,
}

impl MoveEvent {
    pub fn new(event_type: EventType, source: EventSource) -> Self {
        Self { event_type, source }
    }

    /// A player command
    pub fn user(event_type: EventType) -> Self {
        Self::new(event_type, EventSource::User)
    }

    /// A gravity tick
    pub fn gravity() -> Self {
        Self::new(EventType::Down, EventSource::Thread)
    }
}

/// Game actions that can be applied to a session
///
/// These actions are used by both human input and automated drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameAction {
    /// Move brick one cell left
    MoveLeft,
    /// Move brick one cell right
    MoveRight,
    /// Move brick one cell down, locking it if it cannot fall
    SoftDrop,
    /// Drop brick to its landing row and lock it
    HardDrop,
    /// Advance to the next rotation state
    Rotate,
    /// Swap the active brick with the held one (once per drop)
    Hold,
    /// Start over with an empty board
    NewGame,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use brickfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("softDrop"), Some(GameAction::SoftDrop));
    /// assert_eq!(GameAction::from_str("HOLD"), Some(GameAction::Hold));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "rotate" => Some(GameAction::Rotate),
            "hold" => Some(GameAction::Hold),
            "newgame" => Some(GameAction::NewGame),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::Rotate => "rotate",
            GameAction::Hold => "hold",
            GameAction::NewGame => "newGame",
        }
    }
}

/// Game modes
///
/// - **Classic**: endless play until the stack reaches the spawn area
/// - **TwoMinutes**: same rules, but the game also ends when a caller-driven
///   countdown of [`TWO_MINUTES_SECS`] reaches zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameMode {
    #[default]
    Classic,
    TwoMinutes,
}

impl GameMode {
    pub fn description(&self) -> &'static str {
        match self {
            GameMode::Classic => "Classic Mode - Endless play",
            GameMode::TwoMinutes => "2 Minutes Mode - Survive as long as possible within 120 seconds",
        }
    }

    /// Countdown length, `None` for untimed modes
    pub fn time_limit_secs(&self) -> Option<u32> {
        match self {
            GameMode::Classic => None,
            GameMode::TwoMinutes => Some(TWO_MINUTES_SECS),
        }
    }

    /// Parse mode from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use brickfall_types::GameMode;
    ///
    /// assert_eq!(GameMode::from_str("classic"), Some(GameMode::Classic));
    /// assert_eq!(GameMode::from_str("two-minutes"), Some(GameMode::TwoMinutes));
    /// assert_eq!(GameMode::from_str("zen"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(GameMode::Classic),
            "two-minutes" | "twominutes" | "timed" => Some(GameMode::TwoMinutes),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Classic => "classic",
            GameMode::TwoMinutes => "two-minutes",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brick_ids_round_trip_through_cells() {
        for kind in BrickKind::ALL {
            assert_eq!(BrickKind::from_id(kind.id()), Some(kind));
            assert_eq!(BrickKind::from_str(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn brick_ids_are_distinct_and_nonzero() {
        let mut seen = [false; 8];
        for kind in BrickKind::ALL {
            let id = kind.id() as usize;
            assert!(id != 0);
            assert!(!seen[id], "duplicate id {}", id);
            seen[id] = true;
        }
    }

    #[test]
    fn game_action_strings_parse_back() {
        for action in [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::SoftDrop,
            GameAction::HardDrop,
            GameAction::Rotate,
            GameAction::Hold,
            GameAction::NewGame,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }

    #[test]
    fn move_direction_deltas() {
        assert_eq!(MoveDirection::Left.delta(), (-1, 0));
        assert_eq!(MoveDirection::Right.delta(), (1, 0));
        assert_eq!(MoveDirection::Down.delta(), (0, 1));
    }

    #[test]
    fn timed_mode_has_a_limit() {
        assert_eq!(GameMode::Classic.time_limit_secs(), None);
        assert_eq!(GameMode::TwoMinutes.time_limit_secs(), Some(120));
        assert_eq!(GameMode::default(), GameMode::Classic);
    }

    #[test]
    fn game_mode_strings_parse_back() {
        for mode in [GameMode::Classic, GameMode::TwoMinutes] {
            assert_eq!(GameMode::from_str(mode.as_str()), Some(mode));
        }
    }
}
