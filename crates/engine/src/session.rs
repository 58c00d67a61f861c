//! Session - the drop-cycle controller
//!
//! A [`Session`] owns one [`Board`] and turns movement events into board calls. It is the
//! piece of the game that knows the order of a drop cycle: when a down move is blocked the
//! brick is merged, full rows are cleared, the bonus is added to the score and the next
//! brick spawns. A spawn that collides ends the game.
//!
//! Timing stays with the host. Gravity arrives as a down event from
//! [`EventSource::Thread`], player soft drops as the same event from [`EventSource::User`],
//! and timed modes are driven by calling [`Session::tick_second`].
//!
//! Once the game is over every command is ignored until [`Session::create_new_game`].

use brickfall_core::{Board, BoardConfig, ClearRow, CoreError, Grid, ViewData};

use crate::countdown::Countdown;
use crate::types::{EventSource, EventType, GameAction, GameMode, MoveEvent};

/// Result of a down event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownData {
    /// Row clearing outcome, present only when the brick landed
    pub clear_row: Option<ClearRow>,
    /// View after the event (the new brick if one spawned)
    pub view: ViewData,
    /// The brick could not fall and was merged
    pub landed: bool,
    /// The game is over after this event
    pub game_over: bool,
}

/// Counters for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionStats {
    pub pieces_locked: u32,
    pub lines_cleared: u32,
    pub holds: u32,
    /// Successful down steps requested by the player
    pub user_down_steps: u32,
    /// Successful down steps from the gravity timer
    pub gravity_down_steps: u32,
}

#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    mode: GameMode,
    countdown: Countdown,
    game_over: bool,
    stats: SessionStats,
}

impl Session {
    /// Default board; the first brick is ready to fall
    pub fn new(mode: GameMode, seed: u32) -> Self {
        Self::from_board(mode, Board::new(seed))
    }

    pub fn with_config(mode: GameMode, config: BoardConfig, seed: u32) -> Result<Self, CoreError> {
        Ok(Self::from_board(mode, Board::with_config(config, seed)?))
    }

    /// Wrap a prepared board (e.g. one with a preset queue or a loaded grid)
    pub fn from_board(mode: GameMode, board: Board) -> Self {
        let mut countdown = Countdown::new();
        if let Some(secs) = mode.time_limit_secs() {
            countdown.start(secs);
        }
        Self {
            board,
            mode,
            countdown,
            game_over: false,
            stats: SessionStats::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    /// Seconds left in a timed mode, `None` when untimed
    pub fn remaining_secs(&self) -> Option<u32> {
        self.mode
            .time_limit_secs()
            .map(|_| self.countdown.remaining())
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.board.score()
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn view(&self) -> ViewData {
        self.board.snapshot()
    }

    pub fn grid(&self) -> Grid {
        self.board.grid()
    }

    /// Move down one row, or run the landing cycle if blocked
    pub fn on_down_event(&mut self, event: MoveEvent) -> DownData {
        if self.game_over {
            return self.idle_down();
        }

        if self.board.move_down() {
            match event.source {
                EventSource::User => self.stats.user_down_steps += 1,
                EventSource::Thread => self.stats.gravity_down_steps += 1,
            }
            return DownData {
                clear_row: None,
                view: self.board.snapshot(),
                landed: false,
                game_over: false,
            };
        }

        self.board.merge_active_into_grid();
        let clear_row = self.board.clear_completed_rows();
        if clear_row.lines_removed > 0 {
            self.board.add_score(clear_row.score_bonus);
            self.stats.lines_cleared += clear_row.lines_removed as u32;
        }
        self.stats.pieces_locked += 1;

        if self.board.spawn_next() {
            self.game_over = true;
        }

        DownData {
            clear_row: Some(clear_row),
            view: self.board.snapshot(),
            landed: true,
            game_over: self.game_over,
        }
    }

    fn idle_down(&self) -> DownData {
        DownData {
            clear_row: None,
            view: self.board.snapshot(),
            landed: false,
            game_over: true,
        }
    }

    pub fn on_left_event(&mut self, _event: MoveEvent) -> ViewData {
        if !self.game_over {
            self.board.move_left();
        }
        self.board.snapshot()
    }

    pub fn on_right_event(&mut self, _event: MoveEvent) -> ViewData {
        if !self.game_over {
            self.board.move_right();
        }
        self.board.snapshot()
    }

    pub fn on_rotate_event(&mut self, _event: MoveEvent) -> ViewData {
        if !self.game_over {
            self.board.rotate();
        }
        self.board.snapshot()
    }

    /// Dispatch a movement event by its type
    pub fn on_move_event(&mut self, event: MoveEvent) -> ViewData {
        match event.event_type {
            EventType::Down => self.on_down_event(event).view,
            EventType::Left => self.on_left_event(event),
            EventType::Right => self.on_right_event(event),
            EventType::Rotate => self.on_rotate_event(event),
        }
    }

    /// Swap with the hold slot; `false` if refused
    pub fn on_hold_event(&mut self) -> bool {
        if self.game_over || !self.board.hold() {
            return false;
        }
        self.stats.holds += 1;
        true
    }

    /// Drop the brick to its landing row and run the landing cycle
    pub fn hard_drop(&mut self, source: EventSource) -> DownData {
        loop {
            let data = self.on_down_event(MoveEvent::new(EventType::Down, source));
            if data.landed || data.game_over {
                return data;
            }
        }
    }

    /// Apply a player action; returns `false` if it was refused or ignored
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if action == GameAction::NewGame {
            self.create_new_game();
            return true;
        }
        if self.game_over {
            return false;
        }

        match action {
            GameAction::MoveLeft => self.board.move_left(),
            GameAction::MoveRight => self.board.move_right(),
            GameAction::Rotate => self.board.rotate(),
            GameAction::SoftDrop => {
                self.on_down_event(MoveEvent::user(EventType::Down));
                true
            }
            GameAction::HardDrop => {
                self.hard_drop(EventSource::User);
                true
            }
            GameAction::Hold => self.on_hold_event(),
            GameAction::NewGame => true,
        }
    }

    /// Empty board, zero score, fresh brick; timed modes restart their countdown
    pub fn create_new_game(&mut self) {
        self.board.reset();
        self.game_over = false;
        self.stats = SessionStats::default();
        match self.mode.time_limit_secs() {
            Some(secs) => self.countdown.start(secs),
            None => self.countdown.reset(),
        }
    }

    /// One second of wall time has passed
    ///
    /// Returns `true` if the game is over afterwards. Untimed modes ignore the tick.
    pub fn tick_second(&mut self) -> bool {
        if self.game_over || self.mode.time_limit_secs().is_none() {
            return self.game_over;
        }
        self.countdown.tick();
        if self.countdown.is_expired() {
            self.game_over = true;
        }
        self.game_over
    }
}
