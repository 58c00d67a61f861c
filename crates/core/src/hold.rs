//! Hold slot - one parked brick and the once-per-drop swap flag

use crate::shapes::Brick;

#[derive(Debug, Clone, Copy, Default)]
pub struct HoldSlot {
    held: Option<&'static Brick>,
    swapped: bool,
}

impl HoldSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn held(&self) -> Option<&'static Brick> {
        self.held
    }

    /// False once a swap happened in the current drop cycle
    pub fn can_hold(&self) -> bool {
        !self.swapped
    }

    /// Park `current` and hand back whatever was parked before
    pub fn swap(&mut self, current: &'static Brick) -> Option<&'static Brick> {
        self.swapped = true;
        self.held.replace(current)
    }

    /// A new brick spawned after a merge: swapping is allowed again
    pub fn new_cycle(&mut self) {
        self.swapped = false;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
