//! Headless autoplay driver used by the `brickfall` binary.
//!
//! There is no wall clock here: in timed modes every locked brick counts as one second of
//! play.

use std::fmt;

use anyhow::{anyhow, Result};

use crate::engine::{apply_place, best_placement, DownData, Session, SessionStats};
use crate::types::{EventSource, GameMode};

pub const DEFAULT_MAX_PIECES: u32 = 1_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    pub seed: u32,
    pub mode: GameMode,
    pub max_pieces: u32,
    pub verbose: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            mode: GameMode::Classic,
            max_pieces: DEFAULT_MAX_PIECES,
            verbose: false,
        }
    }
}

pub const USAGE: &str =
    "usage: brickfall [--seed N] [--mode classic|two-minutes] [--max-pieces N] [--verbose]";

/// Parse command line arguments (without the program name)
///
/// Returns `Ok(None)` when help was requested.
pub fn parse_driver_args(args: &[String]) -> Result<Option<DriverConfig>> {
    let mut config = DriverConfig::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                config.seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
            }
            "--mode" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --mode"))?;
                config.mode =
                    GameMode::from_str(v).ok_or_else(|| anyhow!("unknown --mode value: {}", v))?;
            }
            "--max-pieces" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --max-pieces"))?;
                config.max_pieces = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --max-pieces value: {}", v))?;
            }
            "--verbose" | "-v" => config.verbose = true,
            "--help" | "-h" => return Ok(None),
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }
    Ok(Some(config))
}

/// Lock one brick at the best placement found
///
/// Falls back to a plain hard drop if no placement can be executed.
pub fn play_piece(session: &mut Session) -> DownData {
    if let Some(placement) = best_placement(session.board()) {
        if let Ok(data) = apply_place(session, placement.x, placement.rotation, false) {
            return data;
        }
    }
    session.hard_drop(EventSource::Thread)
}

/// Final state of an autoplay run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub seed: u32,
    pub mode: GameMode,
    pub score: u32,
    pub stats: SessionStats,
    pub game_over: bool,
}

impl Summary {
    pub fn of(session: &Session, seed: u32) -> Self {
        Self {
            seed,
            mode: session.mode(),
            score: session.score(),
            stats: session.stats(),
            game_over: session.game_over(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "mode:   {}", self.mode.description())?;
        writeln!(f, "seed:   {}", self.seed)?;
        writeln!(f, "pieces: {}", self.stats.pieces_locked)?;
        writeln!(f, "lines:  {}", self.stats.lines_cleared)?;
        writeln!(f, "score:  {}", self.score)?;
        write!(
            f,
            "ended:  {}",
            if self.game_over { "game over" } else { "piece limit" }
        )
    }
}

/// Play until game over or the piece limit, calling `on_lock` after every locked brick
pub fn run_autoplay<F>(config: &DriverConfig, mut on_lock: F) -> Summary
where
    F: FnMut(&Session, &DownData),
{
    let mut session = Session::new(config.mode, config.seed);
    while !session.game_over() && session.stats().pieces_locked < config.max_pieces {
        let data = play_piece(&mut session);
        on_lock(&session, &data);
        if data.landed {
            session.tick_second();
        }
    }
    Summary::of(&session, config.seed)
}
