//! Persistence and session orchestration for skirmish games.
//!
//! The core engine is pure and synchronous; this crate wires it to snapshot
//! repositories and structured logging. Consumers embed [`Session`] to drive
//! turns with automatic checkpoints, or use a [`SnapshotRepository`] directly.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the game driver
//! - [`repository`] provides snapshot storage adapters
//! - [`error`] unifies failures surfaced by both
pub mod error;
pub mod repository;
pub mod session;

pub use error::{Result, RuntimeError};
pub use repository::{
    FileSnapshotRepository, InMemorySnapshotRepo, RepositoryError, SnapshotRepository,
};
pub use session::Session;
