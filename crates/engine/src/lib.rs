//! Engine crate - sessions driven by a host loop
//!
//! [`Session`] is the drop-cycle controller around a [`brickfall_core::Board`]: it turns
//! movement events into board calls, runs the land/clear/score/spawn cycle, tracks game over
//! and the countdown of timed modes. [`place`] adds whole-brick placement on top of it for
//! automated players.
//!
//! ```
//! use brickfall_engine::{Session, types::{GameMode, MoveEvent}};
//!
//! let mut session = Session::new(GameMode::Classic, 7);
//! let mut landed = false;
//! while !landed {
//!     landed = session.on_down_event(MoveEvent::gravity()).landed;
//! }
//! assert_eq!(session.stats().pieces_locked, 1);
//! ```

pub mod countdown;
pub mod place;
pub mod session;

pub use brickfall_types as types;

pub use countdown::Countdown;
pub use place::{apply_place, best_placement, GridFeatures, PlaceError, Placement};
pub use session::{DownData, Session, SessionStats};
