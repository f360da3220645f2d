//! Unified error type surfaced by the runtime API.
//!
//! Wraps failures from the engine and from repositories so clients can bubble
//! them up with consistent context.
use thiserror::Error;

use skirmish_core::{ConfigError, PlaceError, SnapshotError, TurnError, TurnReport};

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Place(#[from] PlaceError),

    #[error(transparent)]
    Turn(#[from] TurnError),

    #[error("stored snapshot is inconsistent")]
    Snapshot(#[from] SnapshotError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// The turn is committed in memory but its checkpoint was not written.
    #[error("turn {} committed but its checkpoint failed", report.turn)]
    CheckpointFailed {
        report: Box<TurnReport>,
        #[source]
        source: RepositoryError,
    },

    #[error("no snapshot stored for game {0}")]
    MissingSnapshot(String),
}
