//! Snapshot port for whole-collection task persistence.

use crate::domain::Task;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for snapshot store operations.
pub type SnapshotStoreResult<T> = Result<T, SnapshotStoreError>;

/// Whole-collection persistence contract.
///
/// The collection is persisted as one snapshot under a single fixed key.
/// Saves overwrite unconditionally (last write wins); there is exactly one
/// logical writer, so no merge semantics are needed.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Loads the previously saved collection.
    ///
    /// A missing or malformed snapshot yields an empty collection rather
    /// than an error: availability is preferred over surfacing corruption.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Persistence`] when the underlying
    /// storage fails outright.
    async fn load(&self) -> SnapshotStoreResult<Vec<Task>>;

    /// Overwrites the stored snapshot with the full collection.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotStoreError::Persistence`] when the snapshot cannot
    /// be written.
    async fn save(&self, tasks: &[Task]) -> SnapshotStoreResult<()>;
}

/// Errors returned by snapshot store implementations.
#[derive(Debug, Clone, Error)]
pub enum SnapshotStoreError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl SnapshotStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
