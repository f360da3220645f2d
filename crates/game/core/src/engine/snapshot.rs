//! Owned snapshots of a game, for persistence collaborators.
//!
//! A snapshot captures everything needed to continue a game except pending
//! intents, which only live for the turn being prepared. Restoring validates
//! the snapshot so a corrupted store cannot produce an inconsistent board.

use std::collections::HashSet;
use std::sync::Arc;

use crate::action::{ActionQueue, ActionRecord};
use crate::config::{ConfigError, GameConfig};
use crate::env::{PcgRng, RngOracle};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{BoardState, Faction, Layer, PlayerEntity, PlayerId, Position};

use super::{Game, GameStatus};

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    pub config: GameConfig,
    pub seed: u64,
    pub placements: u64,
    pub status: GameStatus,
    pub current_turn: u32,
    pub players: Vec<PlayerEntity>,
    /// Committed layer, row-major.
    pub current: Vec<Faction>,
    pub history: Vec<ActionRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("layer has {actual} cells, expected {expected}")]
    LayerSize { expected: usize, actual: usize },

    #[error("{count} players exceed the maximum of {max_players}")]
    TooManyPlayers { count: usize, max_players: u32 },

    #[error("player at index {index} carries id {id}")]
    PlayerIdMismatch { index: usize, id: PlayerId },

    #[error("player {player} belongs to no faction")]
    EmptyFaction { player: PlayerId },

    #[error("player {player} has a sight distance of zero")]
    ZeroSightDistance { player: PlayerId },

    #[error("player {player} is unplaced in a {status} game")]
    UnplacedInPlay { player: PlayerId, status: GameStatus },

    #[error("player {player} is positioned outside the board at {position}")]
    OutOfBounds { player: PlayerId, position: Position },

    #[error("more than one living player occupies {position}")]
    Overlap { position: Position },

    #[error("layer disagrees with player positions at {position}")]
    LayerMismatch { position: Position },

    #[error("turn {current_turn} exceeds the turn limit {turn_limit}")]
    TurnBeyondLimit { current_turn: u32, turn_limit: u32 },
}

impl GameError for SnapshotError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Config(_) => ErrorSeverity::Validation,
            _ => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "SNAPSHOT_CONFIG",
            Self::LayerSize { .. } => "SNAPSHOT_LAYER_SIZE",
            Self::TooManyPlayers { .. } => "SNAPSHOT_TOO_MANY_PLAYERS",
            Self::PlayerIdMismatch { .. } => "SNAPSHOT_PLAYER_ID_MISMATCH",
            Self::EmptyFaction { .. } => "SNAPSHOT_EMPTY_FACTION",
            Self::ZeroSightDistance { .. } => "SNAPSHOT_ZERO_SIGHT_DISTANCE",
            Self::UnplacedInPlay { .. } => "SNAPSHOT_UNPLACED_IN_PLAY",
            Self::OutOfBounds { .. } => "SNAPSHOT_OUT_OF_BOUNDS",
            Self::Overlap { .. } => "SNAPSHOT_OVERLAP",
            Self::LayerMismatch { .. } => "SNAPSHOT_LAYER_MISMATCH",
            Self::TurnBeyondLimit { .. } => "SNAPSHOT_TURN_BEYOND_LIMIT",
        }
    }
}

impl Game {
    /// Owned copy of the persistent parts of the game.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            config: self.config,
            seed: self.seed,
            placements: self.placements,
            status: self.status,
            current_turn: self.current_turn,
            players: self.players.clone(),
            current: self.current_layer(),
            history: self.history.clone(),
        }
    }

    /// Rebuilds a game from a snapshot using the default PCG oracle.
    pub fn from_snapshot(snapshot: GameSnapshot) -> Result<Self, SnapshotError> {
        Self::from_snapshot_with_rng(snapshot, Arc::new(PcgRng))
    }

    /// Rebuilds a game from a snapshot with a custom placement oracle.
    ///
    /// The action queue always starts empty.
    pub fn from_snapshot_with_rng(
        snapshot: GameSnapshot,
        rng: Arc<dyn RngOracle>,
    ) -> Result<Self, SnapshotError> {
        let GameSnapshot {
            config,
            seed,
            placements,
            status,
            current_turn,
            players,
            current,
            history,
        } = snapshot;

        config.validate()?;
        if current_turn > config.turn_limit {
            return Err(SnapshotError::TurnBeyondLimit {
                current_turn,
                turn_limit: config.turn_limit,
            });
        }
        if players.len() > config.max_players as usize {
            return Err(SnapshotError::TooManyPlayers {
                count: players.len(),
                max_players: config.max_players,
            });
        }

        let mut board = BoardState::from_current(config.width, config.height, current.clone())
            .ok_or(SnapshotError::LayerSize {
                expected: config.cell_count(),
                actual: current.len(),
            })?;

        let mut occupied = HashSet::new();
        for (index, player) in players.iter().enumerate() {
            if player.id.0 as usize != index {
                return Err(SnapshotError::PlayerIdMismatch {
                    index,
                    id: player.id,
                });
            }
            if player.faction.is_empty() {
                return Err(SnapshotError::EmptyFaction { player: player.id });
            }
            if player.sight_distance == 0 {
                return Err(SnapshotError::ZeroSightDistance { player: player.id });
            }
            // Only a game that has not started may hold attached, unplaced players.
            if player.position.is_none() && status != GameStatus::NotStarted {
                return Err(SnapshotError::UnplacedInPlay {
                    player: player.id,
                    status,
                });
            }
            if let Some(position) = player.position
                && !board.contains(position)
            {
                return Err(SnapshotError::OutOfBounds {
                    player: player.id,
                    position,
                });
            }
            if let Some(position) = player.occupied_cell()
                && !occupied.insert(position)
            {
                return Err(SnapshotError::Overlap { position });
            }
        }

        board.project_pending(&players);
        if let Some(index) = board
            .layer(Layer::Pending)
            .iter()
            .zip(&current)
            .position(|(expected, actual)| expected != actual)
        {
            let width = config.width as usize;
            return Err(SnapshotError::LayerMismatch {
                position: Position::new((index % width) as i32, (index / width) as i32),
            });
        }

        Ok(Self {
            config,
            seed,
            placements,
            rng,
            status,
            current_turn,
            players,
            board,
            queue: ActionQueue::new(),
            history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PlayerStatus;

    fn played_game() -> Game {
        let mut game = Game::with_seed(GameConfig::new(5, 6, 4, 6), 99).unwrap();
        for (pseudo, faction) in [
            ("a", Faction::Wolf),
            ("b", Faction::Villager),
            ("c", Faction::Villager),
        ] {
            game.place(pseudo, faction, 1).unwrap();
        }
        game.start().unwrap();
        for id in 0..3 {
            game.register_action(PlayerId(id), (1, 1)).unwrap();
        }
        game.process_actions().unwrap();
        game
    }

    #[test]
    fn snapshot_restores_equivalent_game() {
        let game = played_game();
        let restored = Game::from_snapshot(game.snapshot()).unwrap();

        assert_eq!(restored.snapshot(), game.snapshot());
        assert_eq!(restored.board(), game.board());
        assert!(restored.pending_actions().is_empty());
    }

    #[test]
    fn restored_game_keeps_placing_deterministically() {
        let mut original = played_game();
        let mut restored = Game::from_snapshot(original.snapshot()).unwrap();

        let a = original.place("z", Faction::Wolf, 1).unwrap();
        let b = restored.place("z", Faction::Wolf, 1).unwrap();
        assert_eq!(
            original.player(a).unwrap().position,
            restored.player(b).unwrap().position
        );
    }

    #[test]
    fn rejects_wrong_layer_size() {
        let mut snapshot = played_game().snapshot();
        snapshot.current.pop();
        assert_eq!(
            Game::from_snapshot(snapshot).unwrap_err(),
            SnapshotError::LayerSize {
                expected: 24,
                actual: 23
            }
        );
    }

    #[test]
    fn rejects_overlapping_players() {
        let mut snapshot = played_game().snapshot();
        let position = snapshot.players[0].position;
        snapshot.players[1].position = position;
        snapshot.players[1].status = PlayerStatus::Active;

        let error = Game::from_snapshot(snapshot).unwrap_err();
        assert!(matches!(error, SnapshotError::Overlap { .. }));
        assert!(error.severity().is_internal());
    }

    #[test]
    fn rejects_layer_that_disagrees_with_positions() {
        let mut snapshot = played_game().snapshot();
        let free = snapshot
            .current
            .iter()
            .position(|cell| cell.is_empty())
            .unwrap();
        snapshot.current[free] = Faction::Wolf;

        assert!(matches!(
            Game::from_snapshot(snapshot),
            Err(SnapshotError::LayerMismatch { .. })
        ));
    }

    #[test]
    fn rejects_player_without_faction() {
        let mut snapshot = played_game().snapshot();
        snapshot.players[1].faction = Faction::Empty;

        let error = Game::from_snapshot(snapshot).unwrap_err();
        assert_eq!(error, SnapshotError::EmptyFaction { player: PlayerId(1) });
        assert_eq!(error.error_code(), "SNAPSHOT_EMPTY_FACTION");
    }

    #[test]
    fn rejects_blind_player() {
        let mut snapshot = played_game().snapshot();
        snapshot.players[2].sight_distance = 0;

        assert_eq!(
            Game::from_snapshot(snapshot).unwrap_err(),
            SnapshotError::ZeroSightDistance { player: PlayerId(2) }
        );
    }

    #[test]
    fn unplaced_players_only_restore_before_start() {
        let mut snapshot = played_game().snapshot();
        snapshot.players[0].position = None;
        let index = snapshot
            .current
            .iter()
            .position(|cell| *cell == Faction::Wolf)
            .unwrap();
        snapshot.current[index] = Faction::Empty;

        assert_eq!(
            Game::from_snapshot(snapshot.clone()).unwrap_err(),
            SnapshotError::UnplacedInPlay {
                player: PlayerId(0),
                status: GameStatus::Active
            }
        );

        snapshot.status = GameStatus::NotStarted;
        snapshot.current_turn = 0;
        snapshot.history.clear();
        let restored = Game::from_snapshot(snapshot).unwrap();
        assert!(!restored.player(PlayerId(0)).unwrap().is_placed());
    }
}
