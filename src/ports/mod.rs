//! Port contracts for external collaborators.

pub mod snapshot;

pub use snapshot::{SnapshotStore, SnapshotStoreError, SnapshotStoreResult};
