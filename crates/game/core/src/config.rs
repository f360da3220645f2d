use crate::error::{ErrorSeverity, GameError};

/// Construction parameters for a skirmish game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Number of committed turns after which the game stops on its own.
    pub turn_limit: u32,
    /// Board width in cells.
    pub width: u32,
    /// Board height in cells.
    pub height: u32,
    /// Maximum number of players that may be attached to the game.
    pub max_players: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board dimensions must be positive (got {width}x{height})")]
    EmptyBoard { width: u32, height: u32 },

    #[error("turn limit must be positive")]
    ZeroTurnLimit,

    #[error("max players must be positive")]
    ZeroMaxPlayers,
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyBoard { .. } => "CONFIG_EMPTY_BOARD",
            Self::ZeroTurnLimit => "CONFIG_ZERO_TURN_LIMIT",
            Self::ZeroMaxPlayers => "CONFIG_ZERO_MAX_PLAYERS",
        }
    }
}

impl GameConfig {
    // ===== defaults used by the demo driver =====
    pub const DEFAULT_TURN_LIMIT: u32 = 10;
    pub const DEFAULT_WIDTH: u32 = 10;
    pub const DEFAULT_HEIGHT: u32 = 5;
    pub const DEFAULT_MAX_PLAYERS: u32 = 8;

    pub const fn new(turn_limit: u32, width: u32, height: u32, max_players: u32) -> Self {
        Self {
            turn_limit,
            width,
            height,
            max_players,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyBoard {
                width: self.width,
                height: self.height,
            });
        }
        if self.turn_limit == 0 {
            return Err(ConfigError::ZeroTurnLimit);
        }
        if self.max_players == 0 {
            return Err(ConfigError::ZeroMaxPlayers);
        }
        Ok(())
    }

    /// Total number of cells on the board.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_TURN_LIMIT,
            Self::DEFAULT_WIDTH,
            Self::DEFAULT_HEIGHT,
            Self::DEFAULT_MAX_PLAYERS,
        )
    }
}
