//! Game controller: the state machine that owns a whole skirmish.
//!
//! The [`Game`] aggregate exclusively owns its players, board, action queue
//! and history; cells are addressed by coordinate so there are no back
//! references between entities. Lifecycle:
//!
//! ```text
//! NotStarted --start--> Active --stop / turn limit--> Ended
//! ```
//!
//! There is no way back from `Ended`; a new game must be constructed.

mod errors;
mod snapshot;
mod turns;

pub use errors::{PlaceError, TurnError};
pub use snapshot::{GameSnapshot, SnapshotError};
pub use turns::TurnReport;

use std::fmt;
use std::sync::Arc;

use crate::action::{ActionQueue, ActionRecord};
use crate::config::{ConfigError, GameConfig};
use crate::env::{PcgRng, RngOracle, compute_seed};
use crate::state::{BoardState, Faction, Layer, PlayerEntity, PlayerId, Position, parse_pseudo};

/// Lifecycle state of a [`Game`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum GameStatus {
    #[default]
    NotStarted,
    Active,
    Ended,
}

/// A single skirmish: players, double-buffered board, pending intents and history.
#[derive(Clone)]
pub struct Game {
    config: GameConfig,
    seed: u64,
    /// Number of successful placements, mixed into each placement seed.
    placements: u64,
    rng: Arc<dyn RngOracle>,
    status: GameStatus,
    current_turn: u32,
    players: Vec<PlayerEntity>,
    board: BoardState,
    queue: ActionQueue,
    history: Vec<ActionRecord>,
}

impl Game {
    /// Creates a game with seed `0` and the default PCG oracle.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_seed(config, 0)
    }

    /// Creates a game whose placements are reproducible from `seed`.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, seed, Arc::new(PcgRng))
    }

    /// Creates a game with a custom placement oracle.
    pub fn with_rng(
        config: GameConfig,
        seed: u64,
        rng: Arc<dyn RngOracle>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            seed,
            placements: 0,
            rng,
            status: GameStatus::NotStarted,
            current_turn: 0,
            players: Vec::new(),
            board: BoardState::new(config.width, config.height),
            queue: ActionQueue::new(),
            history: Vec::new(),
        })
    }

    // ===== accessors =====

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True while the game is `Active`.
    pub fn is_started(&self) -> bool {
        self.status == GameStatus::Active
    }

    pub fn current_turn(&self) -> u32 {
        self.current_turn
    }

    pub fn turn_limit(&self) -> u32 {
        self.config.turn_limit
    }

    pub fn players(&self) -> &[PlayerEntity] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&PlayerEntity> {
        self.index_of(id).map(|index| &self.players[index])
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Owned copy of the committed layer, row-major.
    pub fn current_layer(&self) -> Vec<Faction> {
        self.board.layer(Layer::Current).to_vec()
    }

    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    pub fn pending_actions(&self) -> &ActionQueue {
        &self.queue
    }

    /// Number of players of `faction` still in play.
    pub fn living(&self, faction: Faction) -> usize {
        self.players
            .iter()
            .filter(|player| player.faction == faction && player.is_active())
            .count()
    }

    fn index_of(&self, id: PlayerId) -> Option<usize> {
        let index = id.0 as usize;
        (index < self.players.len()).then_some(index)
    }

    // ===== player management =====

    /// Adds a player without placing it. Only legal before `start`.
    pub fn attach(
        &mut self,
        pseudo: &str,
        faction: Faction,
        sight_distance: u32,
    ) -> Result<PlayerId, PlaceError> {
        if self.status != GameStatus::NotStarted {
            return Err(match self.status {
                GameStatus::Ended => PlaceError::GameEnded,
                _ => PlaceError::AlreadyStarted,
            });
        }
        let player = self.new_player(pseudo, faction, sight_distance)?;
        let id = player.id;
        self.players.push(player);
        tracing::debug!(player = %id, %faction, "attached player");
        Ok(id)
    }

    /// Places an attached player on a random empty cell.
    pub fn place_player(&mut self, id: PlayerId) -> Result<Position, PlaceError> {
        if self.status == GameStatus::Ended {
            return Err(PlaceError::GameEnded);
        }
        let index = self.index_of(id).ok_or(PlaceError::UnknownPlayer(id))?;
        if self.players[index].is_placed() {
            return Err(PlaceError::AlreadyPlaced(id));
        }

        let seed = compute_seed(self.seed, self.placements, id.0, 0);
        let position = self
            .board
            .place(&mut self.players[index], self.rng.as_ref(), seed)?;
        self.placements += 1;

        tracing::debug!(player = %id, %position, "placed player");
        Ok(position)
    }

    /// Creates a player and places it in one step.
    ///
    /// Legal before and during play. On failure no player is attached and the
    /// board is unchanged.
    pub fn place(
        &mut self,
        pseudo: &str,
        faction: Faction,
        sight_distance: u32,
    ) -> Result<PlayerId, PlaceError> {
        if self.status == GameStatus::Ended {
            return Err(PlaceError::GameEnded);
        }
        let mut player = self.new_player(pseudo, faction, sight_distance)?;
        let id = player.id;

        let seed = compute_seed(self.seed, self.placements, id.0, 0);
        let position = self.board.place(&mut player, self.rng.as_ref(), seed)?;
        self.placements += 1;
        self.players.push(player);

        tracing::debug!(player = %id, %faction, %position, "placed new player");
        Ok(id)
    }

    fn new_player(
        &self,
        pseudo: &str,
        faction: Faction,
        sight_distance: u32,
    ) -> Result<PlayerEntity, PlaceError> {
        let pseudo = parse_pseudo(pseudo).ok_or(PlaceError::InvalidPseudo)?;
        if faction.is_empty() {
            return Err(PlaceError::InvalidFaction);
        }
        if sight_distance == 0 {
            return Err(PlaceError::InvalidSightDistance);
        }
        if self.players.len() >= self.config.max_players as usize {
            return Err(PlaceError::GameFull {
                max_players: self.config.max_players,
            });
        }

        let id = PlayerId(self.players.len() as u32);
        Ok(PlayerEntity::new(id, pseudo, faction, sight_distance))
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("config", &self.config)
            .field("seed", &self.seed)
            .field("status", &self.status)
            .field("current_turn", &self.current_turn)
            .field("players", &self.players)
            .field("queue", &self.queue)
            .field("history_len", &self.history.len())
            .finish_non_exhaustive()
    }
}
