//! Deterministic rules for the wolves and villagers grid skirmish.
//!
//! `skirmish-core` owns the canonical game model (players, the double-buffered
//! board, movement intents and their resolution) and exposes a pure,
//! synchronous API. All state mutation flows through [`engine::Game`]; the
//! runtime and client crates depend on the types re-exported here.
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use action::{ActionQueue, ActionRecord, CardinalDirection, MoveDelta};
pub use combat::{MoveOutcome, MoveRejection, Resolution};
pub use config::{ConfigError, GameConfig};
pub use engine::{Game, GameSnapshot, GameStatus, PlaceError, SnapshotError, TurnError, TurnReport};
pub use env::{PcgRng, RngOracle, compute_seed};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    BoardState, Faction, Layer, NoSpaceError, PlayerEntity, PlayerId, PlayerStatus, Position,
    parse_pseudo,
};
