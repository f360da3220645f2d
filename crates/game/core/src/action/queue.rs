use crate::state::PlayerId;

use super::MoveDelta;

/// Pending movement intents for the turn being prepared.
///
/// An insertion-ordered map keyed by player: registering again for the same
/// player overwrites the delta but keeps the slot of the first registration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionQueue {
    entries: Vec<(PlayerId, MoveDelta)>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upserts the intent of `player`.
    pub fn register(&mut self, player: PlayerId, delta: MoveDelta) {
        match self.entries.iter_mut().find(|(id, _)| *id == player) {
            Some(entry) => entry.1 = delta,
            None => self.entries.push((player, delta)),
        }
    }

    pub fn get(&self, player: PlayerId) -> Option<MoveDelta> {
        self.entries
            .iter()
            .find(|(id, _)| *id == player)
            .map(|(_, delta)| *delta)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, MoveDelta)> + '_ {
        self.entries.iter().copied()
    }

    /// Takes every intent in registration order and leaves the queue empty.
    pub fn drain(&mut self) -> Vec<(PlayerId, MoveDelta)> {
        std::mem::take(&mut self.entries)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
