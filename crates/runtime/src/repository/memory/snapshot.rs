//! In-memory SnapshotRepository implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use skirmish_core::GameSnapshot;

use crate::repository::{RepositoryError, Result, SnapshotRepository};

/// In-memory implementation of SnapshotRepository.
///
/// Stores snapshots indexed by `(game_id, turn)`.
pub struct InMemorySnapshotRepo {
    snapshots: RwLock<HashMap<(String, u32), GameSnapshot>>,
}

impl InMemorySnapshotRepo {
    pub fn new() -> Self {
        Self {
            snapshots: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemorySnapshotRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotRepository for InMemorySnapshotRepo {
    fn save(&self, game_id: &str, turn: u32, snapshot: &GameSnapshot) -> Result<()> {
        let mut snapshots = self
            .snapshots
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        snapshots.insert((game_id.to_owned(), turn), snapshot.clone());
        Ok(())
    }

    fn load(&self, game_id: &str, turn: u32) -> Result<Option<GameSnapshot>> {
        let snapshots = self
            .snapshots
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(snapshots.get(&(game_id.to_owned(), turn)).cloned())
    }

    fn exists(&self, game_id: &str, turn: u32) -> bool {
        self.snapshots
            .read()
            .map(|snapshots| snapshots.contains_key(&(game_id.to_owned(), turn)))
            .unwrap_or(false)
    }

    fn delete(&self, game_id: &str, turn: u32) -> Result<()> {
        let mut snapshots = self
            .snapshots
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        snapshots.remove(&(game_id.to_owned(), turn));
        Ok(())
    }

    fn list_turns(&self, game_id: &str) -> Result<Vec<u32>> {
        let snapshots = self
            .snapshots
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut turns: Vec<u32> = snapshots
            .keys()
            .filter(|(id, _)| id == game_id)
            .map(|&(_, turn)| turn)
            .collect();
        turns.sort_unstable();
        Ok(turns)
    }
}
