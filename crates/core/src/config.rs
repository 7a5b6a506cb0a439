//! Game configuration and construction-time validation.

use thiserror::Error;

use crate::shapes::{max_shape_height, max_shape_width, shapes_for};
use crate::types::{PieceKind, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_FALL_INTERVAL_MS};

/// Misconfiguration detected while building a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board dimensions must be positive (got {width}x{height})")]
    EmptyBoard { width: u16, height: u16 },
    #[error("board {width}x{height} cannot fit a {min_width}x{min_height} piece")]
    BoardTooSmall {
        width: u16,
        height: u16,
        min_width: u16,
        min_height: u16,
    },
    #[error("fall interval must be at least 1ms")]
    ZeroFallInterval,
    #[error("shape catalog has no rotation states for {0:?}")]
    EmptyCatalog(PieceKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    pub fall_interval_ms: u32,
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            fall_interval_ms: DEFAULT_FALL_INTERVAL_MS,
            seed: 1,
        }
    }
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_fall_interval_ms(mut self, fall_interval_ms: u32) -> Self {
        self.fall_interval_ms = fall_interval_ms;
        self
    }

    /// Reject configurations the engine cannot run.
    ///
    /// The board must be able to hold the widest and tallest rotation state in
    /// the catalog, otherwise some spawns could never be legal.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(&kind) = PieceKind::ALL.iter().find(|&&k| shapes_for(k).is_empty()) {
            return Err(ConfigError::EmptyCatalog(kind));
        }
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyBoard {
                width: self.width,
                height: self.height,
            });
        }
        let min_width = max_shape_width() as u16;
        let min_height = max_shape_height() as u16;
        if self.width < min_width || self.height < min_height {
            return Err(ConfigError::BoardTooSmall {
                width: self.width,
                height: self.height,
                min_width,
                min_height,
            });
        }
        if self.fall_interval_ms == 0 {
            return Err(ConfigError::ZeroFallInterval);
        }
        Ok(())
    }
}
