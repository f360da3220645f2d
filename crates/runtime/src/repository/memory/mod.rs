//! In-memory repository implementation for testing and development.

mod snapshot;

pub use snapshot::InMemorySnapshotRepo;
