//! File-based repository implementation.

mod snapshot;

pub use snapshot::FileSnapshotRepository;
