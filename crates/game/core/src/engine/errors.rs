//! Error types for controller operations.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{NoSpaceError, PlayerId};

/// Errors raised while attaching or placing players.
///
/// Every variant leaves the game unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlaceError {
    #[error(transparent)]
    NoSpace(#[from] NoSpaceError),

    #[error("pseudo must be exactly one visible character")]
    InvalidPseudo,

    #[error("a player cannot belong to the empty faction")]
    InvalidFaction,

    #[error("sight distance must be positive")]
    InvalidSightDistance,

    #[error("game already holds its maximum of {max_players} players")]
    GameFull { max_players: u32 },

    #[error("players can only be attached before the game starts")]
    AlreadyStarted,

    #[error("the game has ended")]
    GameEnded,

    #[error("player {0} is not part of this game")]
    UnknownPlayer(PlayerId),

    #[error("player {0} is already on the board")]
    AlreadyPlaced(PlayerId),
}

impl GameError for PlaceError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoSpace(_) | Self::GameFull { .. } => ErrorSeverity::Recoverable,
            Self::AlreadyStarted | Self::GameEnded | Self::AlreadyPlaced(_) => {
                ErrorSeverity::Recoverable
            }
            Self::InvalidPseudo
            | Self::InvalidFaction
            | Self::InvalidSightDistance
            | Self::UnknownPlayer(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoSpace(_) => "PLACE_NO_SPACE",
            Self::InvalidPseudo => "PLACE_INVALID_PSEUDO",
            Self::InvalidFaction => "PLACE_INVALID_FACTION",
            Self::InvalidSightDistance => "PLACE_INVALID_SIGHT_DISTANCE",
            Self::GameFull { .. } => "PLACE_GAME_FULL",
            Self::AlreadyStarted => "PLACE_ALREADY_STARTED",
            Self::GameEnded => "PLACE_GAME_ENDED",
            Self::UnknownPlayer(_) => "PLACE_UNKNOWN_PLAYER",
            Self::AlreadyPlaced(_) => "PLACE_ALREADY_PLACED",
        }
    }
}

/// Errors raised by the turn state machine.
///
/// Every variant leaves the game unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error("the game is already active")]
    AlreadyActive,

    #[error("the game has ended and cannot be restarted")]
    AlreadyEnded,

    #[error("the game is not active")]
    NotActive,

    #[error("player {0} has no position on the board")]
    UnplacedPlayer(PlayerId),

    #[error("player {0} is not part of this game")]
    UnknownPlayer(PlayerId),

    #[error("player {0} has been defeated")]
    PlayerDefeated(PlayerId),
}

impl GameError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownPlayer(_) | Self::PlayerDefeated(_) => ErrorSeverity::Validation,
            _ => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyActive => "TURN_ALREADY_ACTIVE",
            Self::AlreadyEnded => "TURN_ALREADY_ENDED",
            Self::NotActive => "TURN_NOT_ACTIVE",
            Self::UnplacedPlayer(_) => "TURN_UNPLACED_PLAYER",
            Self::UnknownPlayer(_) => "TURN_UNKNOWN_PLAYER",
            Self::PlayerDefeated(_) => "TURN_PLAYER_DEFEATED",
        }
    }
}
