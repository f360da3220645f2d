//! Repository layer for game snapshots.
//!
//! Repositories only persist data; the rules stay in the core. A stored
//! snapshot is validated again when a game is rebuilt from it.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileSnapshotRepository;
pub use memory::InMemorySnapshotRepo;
pub use traits::SnapshotRepository;
