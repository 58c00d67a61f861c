//! brickfall (workspace facade crate).
//!
//! Re-exports the workspace crates as `brickfall::{types, core, engine}` and hosts the
//! headless autoplay driver behind the `brickfall` binary.

pub use brickfall_core as core;
pub use brickfall_engine as engine;
pub use brickfall_types as types;

pub mod driver;
