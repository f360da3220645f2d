//! File-based SnapshotRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use skirmish_core::GameSnapshot;

use crate::repository::{RepositoryError, Result, SnapshotRepository};

/// File-based implementation of SnapshotRepository.
///
/// Each game gets its own directory under `base_dir`, holding one
/// `turn_{n}.bin` bincode file per checkpoint.
pub struct FileSnapshotRepository {
    base_dir: PathBuf,
}

impl FileSnapshotRepository {
    /// Create a new file-based snapshot repository.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Directory of one game. Ids must be a single, plain path component.
    fn game_dir(&self, game_id: &str) -> Result<PathBuf> {
        let plain = !game_id.is_empty()
            && game_id != "."
            && game_id != ".."
            && !game_id.contains(['/', '\\']);
        if !plain {
            return Err(RepositoryError::InvalidGameId(game_id.to_owned()));
        }
        Ok(self.base_dir.join(game_id))
    }

    fn snapshot_path(&self, game_id: &str, turn: u32) -> Result<PathBuf> {
        Ok(self.game_dir(game_id)?.join(format!("turn_{turn}.bin")))
    }
}

impl SnapshotRepository for FileSnapshotRepository {
    fn save(&self, game_id: &str, turn: u32, snapshot: &GameSnapshot) -> Result<()> {
        let path = self.snapshot_path(game_id, turn)?;
        let temp_path = path.with_extension("bin.tmp");
        fs::create_dir_all(self.game_dir(game_id)?)?;

        let bytes = bincode::serialize(snapshot)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        fs::write(&temp_path, bytes)?;
        fs::rename(&temp_path, &path)?;

        tracing::debug!(game_id, turn, path = %path.display(), "saved snapshot");
        Ok(())
    }

    fn load(&self, game_id: &str, turn: u32) -> Result<Option<GameSnapshot>> {
        let path = self.snapshot_path(game_id, turn)?;
        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path)?;
        let snapshot: GameSnapshot = bincode::deserialize(&bytes)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        tracing::debug!(game_id, turn, path = %path.display(), "loaded snapshot");
        Ok(Some(snapshot))
    }

    fn exists(&self, game_id: &str, turn: u32) -> bool {
        self.snapshot_path(game_id, turn)
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    fn delete(&self, game_id: &str, turn: u32) -> Result<()> {
        let path = self.snapshot_path(game_id, turn)?;
        if path.exists() {
            fs::remove_file(&path)?;
            tracing::debug!(game_id, turn, "deleted snapshot");
        }
        Ok(())
    }

    fn list_turns(&self, game_id: &str) -> Result<Vec<u32>> {
        let dir = self.game_dir(game_id)?;
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut turns = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();

            if let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(turn) = filename
                    .strip_prefix("turn_")
                    .and_then(|s| s.strip_suffix(".bin"))
                && let Ok(turn) = turn.parse::<u32>()
            {
                turns.push(turn);
            }
        }

        turns.sort_unstable();
        Ok(turns)
    }
}
