//! In-memory snapshot store for tests and ephemeral sessions.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::domain::Task;
use crate::ports::{SnapshotStore, SnapshotStoreError, SnapshotStoreResult};

/// Thread-safe in-memory snapshot store.
#[derive(Debug, Clone, Default)]
pub struct InMemorySnapshotStore {
    state: Arc<RwLock<Vec<Task>>>,
}

impl InMemorySnapshotStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with a collection.
    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            state: Arc::new(RwLock::new(tasks)),
        }
    }
}

#[async_trait]
impl SnapshotStore for InMemorySnapshotStore {
    async fn load(&self) -> SnapshotStoreResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            SnapshotStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.clone())
    }

    async fn save(&self, tasks: &[Task]) -> SnapshotStoreResult<()> {
        let mut state = self.state.write().map_err(|err| {
            SnapshotStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        *state = tasks.to_vec();
        Ok(())
    }
}
