use crate::state::PlayerId;

use super::MoveDelta;

/// Append-only log entry written once per resolved intent.
///
/// The delta is the one the player requested, whatever the resolver made of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionRecord {
    pub player_id: PlayerId,
    pub delta_x: i32,
    pub delta_y: i32,
    pub turn: u32,
}

impl ActionRecord {
    pub fn new(player_id: PlayerId, delta: MoveDelta, turn: u32) -> Self {
        Self {
            player_id,
            delta_x: delta.dx,
            delta_y: delta.dy,
            turn,
        }
    }

    pub fn delta(&self) -> MoveDelta {
        MoveDelta::new(self.delta_x, self.delta_y)
    }
}
