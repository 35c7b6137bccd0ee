//! Tracking orchestration: the single writer over the task collection.

use crate::domain::{Task, TaskDraft, TaskId};
use crate::ports::{SnapshotStore, SnapshotStoreResult};
use crate::services::lifecycle;
use mockable::Clock;
use std::sync::Arc;

/// Owns the task collection and keeps the snapshot store in step with it.
///
/// The tracker loads the snapshot once at startup and saves after every
/// committed mutation. It is the single logical writer over the collection;
/// transitions on unknown ids remain silent no-ops (that policy lives in
/// [`lifecycle`]), while snapshot failures surface as errors.
#[derive(Clone)]
pub struct TaskTracker<S, C>
where
    S: SnapshotStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
    tasks: Vec<Task>,
}

impl<S, C> TaskTracker<S, C>
where
    S: SnapshotStore,
    C: Clock + Send + Sync,
{
    /// Loads the persisted collection and constructs the tracker over it.
    ///
    /// # Errors
    ///
    /// Returns a snapshot store error when the initial load fails.
    pub async fn load(store: Arc<S>, clock: Arc<C>) -> SnapshotStoreResult<Self> {
        let tasks = store.load().await?;
        Ok(Self {
            store,
            clock,
            tasks,
        })
    }

    /// Returns the current collection.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Creates a pending task from the draft, appends it, and persists.
    ///
    /// Input validation happens when the draft is built; the tracker assumes
    /// pre-validated input.
    ///
    /// # Errors
    ///
    /// Returns a snapshot store error when saving fails.
    pub async fn create(&mut self, draft: TaskDraft) -> SnapshotStoreResult<Task> {
        let task = Task::from_draft(draft);
        self.commit(lifecycle::add(&self.tasks, task.clone()))
            .await?;
        Ok(task)
    }

    /// Starts the timer on a task.
    ///
    /// # Errors
    ///
    /// Returns a snapshot store error when saving fails.
    pub async fn start(&mut self, id: TaskId) -> SnapshotStoreResult<()> {
        let next = lifecycle::start(&self.tasks, id, &*self.clock);
        self.commit(next).await
    }

    /// Completes a task, recording its elapsed duration.
    ///
    /// # Errors
    ///
    /// Returns a snapshot store error when saving fails.
    pub async fn end(&mut self, id: TaskId) -> SnapshotStoreResult<()> {
        let next = lifecycle::end(&self.tasks, id, &*self.clock);
        self.commit(next).await
    }

    /// Pauses a task.
    ///
    /// # Errors
    ///
    /// Returns a snapshot store error when saving fails.
    pub async fn pause(&mut self, id: TaskId) -> SnapshotStoreResult<()> {
        let next = lifecycle::pause(&self.tasks, id);
        self.commit(next).await
    }

    /// Cancels a task.
    ///
    /// # Errors
    ///
    /// Returns a snapshot store error when saving fails.
    pub async fn cancel(&mut self, id: TaskId) -> SnapshotStoreResult<()> {
        let next = lifecycle::cancel(&self.tasks, id);
        self.commit(next).await
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns a snapshot store error when saving fails.
    pub async fn delete(&mut self, id: TaskId) -> SnapshotStoreResult<()> {
        let next = lifecycle::delete(&self.tasks, id);
        self.commit(next).await
    }

    async fn commit(&mut self, next: Vec<Task>) -> SnapshotStoreResult<()> {
        self.tasks = next;
        self.store.save(&self.tasks).await
    }
}
