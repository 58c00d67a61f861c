//! Caller-driven countdown for timed modes.

/// Whole-second countdown that stops at zero
///
/// The engine never reads a clock: the host calls [`Countdown::tick`] once per elapsed
/// second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Countdown {
    remaining: u32,
    running: bool,
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restart from `seconds`
    pub fn start(&mut self, seconds: u32) {
        self.remaining = seconds;
        self.running = true;
    }

    /// Take one second off, stopping at zero
    pub fn tick(&mut self) {
        if self.running && self.remaining > 0 {
            self.remaining -= 1;
        }
    }

    /// Stop and clear
    pub fn reset(&mut self) {
        self.remaining = 0;
        self.running = false;
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Started and run down to zero
    pub fn is_expired(&self) -> bool {
        self.running && self.remaining == 0
    }
}
