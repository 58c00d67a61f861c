//! Board configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::rng::RandomizerKind;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, HIDDEN_ROWS, SHAPE_SIZE, SPAWN_X, SPAWN_Y};

/// Dimensions, spawn point and randomizer of a board
///
/// `height` counts the hidden buffer rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
    pub spawn_x: i32,
    pub spawn_y: i32,
    pub randomizer: RandomizerKind,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            spawn_x: SPAWN_X,
            spawn_y: SPAWN_Y,
            randomizer: RandomizerKind::Uniform,
        }
    }
}

impl BoardConfig {
    /// Config with custom dimensions, spawning horizontally centred at the top
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            spawn_x: (width.saturating_sub(SHAPE_SIZE) / 2) as i32,
            ..Self::default()
        }
    }

    /// Number of rows below the hidden buffer
    pub fn visible_height(&self) -> usize {
        self.height.saturating_sub(HIDDEN_ROWS)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.width < SHAPE_SIZE {
            return Err(CoreError::InvalidConfig("width must fit a 4x4 shape"));
        }
        if self.height < HIDDEN_ROWS + SHAPE_SIZE {
            return Err(CoreError::InvalidConfig(
                "height must fit the hidden buffer and a 4x4 shape",
            ));
        }
        if self.spawn_x < 0 || self.spawn_x as usize + SHAPE_SIZE > self.width {
            return Err(CoreError::InvalidConfig("spawn column must keep the shape inside"));
        }
        if self.spawn_y < 0 || self.spawn_y as usize + SHAPE_SIZE > self.height {
            return Err(CoreError::InvalidConfig("spawn row must keep the shape inside"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = BoardConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.visible_height(), 23);
    }

    #[test]
    fn with_size_centres_spawn() {
        let config = BoardConfig::with_size(10, 22);
        assert_eq!(config.spawn_x, 3);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_tiny_boards() {
        assert!(BoardConfig::with_size(3, 25).validate().is_err());
        assert!(BoardConfig::with_size(10, 5).validate().is_err());
    }

    #[test]
    fn rejects_spawn_outside() {
        let config = BoardConfig {
            spawn_x: 7,
            ..BoardConfig::default()
        };
        assert!(matches!(config.validate(), Err(CoreError::InvalidConfig(_))));
    }
}
