//! Scoring module - line clear bonus and the running score
//!
//! A clear of `n` rows is worth `50 * n * n` points: 50, 200, 450 and 800 for one to four
//! rows. This is the only scoring rule; there is no per-level multiplier.

use crate::types::LINE_CLEAR_BASE;

/// Points awarded for clearing `lines` rows at once
pub fn line_clear_bonus(lines: usize) -> u32 {
    let lines = u32::try_from(lines).unwrap_or(u32::MAX);
    LINE_CLEAR_BASE
        .saturating_mul(lines)
        .saturating_mul(lines)
}

/// Running score; only grows until [`Score::reset`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    value: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn add(&mut self, points: u32) {
        self.value = self.value.saturating_add(points);
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }
}
