//! Authoritative skirmish state representation.
//!
//! This module owns the data structures that describe players and the
//! double-buffered board. The player list is the single source of truth for
//! positions; board cells are a projection the engine re-derives every turn.
pub mod types;

pub use types::{
    BoardState, Faction, Layer, NoSpaceError, PlayerEntity, PlayerId, PlayerStatus, Position,
    parse_pseudo,
};
