//! Repository contract for saving and loading game snapshots.

use skirmish_core::GameSnapshot;

use super::Result;

/// Storage for game snapshots, keyed by game id and committed turn.
///
/// One game keeps one snapshot per checkpointed turn, so an earlier turn can
/// be reloaded for inspection or replay.
pub trait SnapshotRepository: Send + Sync {
    /// Save a snapshot, replacing any earlier one for the same turn.
    fn save(&self, game_id: &str, turn: u32, snapshot: &GameSnapshot) -> Result<()>;

    /// Load the snapshot of a given turn.
    fn load(&self, game_id: &str, turn: u32) -> Result<Option<GameSnapshot>>;

    /// Check if a snapshot exists.
    fn exists(&self, game_id: &str, turn: u32) -> bool;

    /// Delete the snapshot of a given turn. Missing snapshots are not an error.
    fn delete(&self, game_id: &str, turn: u32) -> Result<()>;

    /// All checkpointed turns of a game, ascending.
    fn list_turns(&self, game_id: &str) -> Result<Vec<u32>>;

    /// Snapshot of the highest checkpointed turn.
    fn latest(&self, game_id: &str) -> Result<Option<GameSnapshot>> {
        match self.list_turns(game_id)?.last() {
            Some(&turn) => self.load(game_id, turn),
            None => Ok(None),
        }
    }
}
