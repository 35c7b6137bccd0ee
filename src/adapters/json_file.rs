//! JSON-file snapshot store with capability-scoped directory access.

use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use crate::domain::Task;
use crate::ports::{SnapshotStore, SnapshotStoreError, SnapshotStoreResult};

/// Fixed file name the snapshot is stored under.
pub const SNAPSHOT_FILE: &str = "tasks.json";

/// Snapshot store backed by a single JSON file in a directory capability.
///
/// The snapshot lives under [`SNAPSHOT_FILE`] inside the handed-in
/// directory; the store never touches paths outside that capability.
#[derive(Debug)]
pub struct JsonFileSnapshotStore {
    dir: Dir,
}

impl JsonFileSnapshotStore {
    /// Creates a store over an already-opened directory capability.
    #[must_use]
    pub const fn new(dir: Dir) -> Self {
        Self { dir }
    }

    /// Opens a store over the given directory path using ambient authority.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the directory cannot be opened.
    pub fn open_ambient(path: impl AsRef<Utf8Path>) -> std::io::Result<Self> {
        Dir::open_ambient_dir(path, ambient_authority()).map(Self::new)
    }
}

#[async_trait]
impl SnapshotStore for JsonFileSnapshotStore {
    async fn load(&self) -> SnapshotStoreResult<Vec<Task>> {
        match self.dir.read_to_string(SNAPSHOT_FILE) {
            // Malformed contents count as an absent snapshot.
            Ok(contents) => Ok(serde_json::from_str(&contents).unwrap_or_default()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(SnapshotStoreError::persistence(err)),
        }
    }

    async fn save(&self, tasks: &[Task]) -> SnapshotStoreResult<()> {
        let payload = serde_json::to_string(tasks).map_err(SnapshotStoreError::persistence)?;
        self.dir
            .write(SNAPSHOT_FILE, payload)
            .map_err(SnapshotStoreError::persistence)
    }
}
