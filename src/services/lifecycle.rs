//! Pure collection-level lifecycle transitions.
//!
//! Every function is copy-on-write: it returns a fresh collection and never
//! mutates unrelated tasks. Transitions are lenient by contract — an unknown
//! id or a transition the state machine rejects returns the collection
//! unchanged, absorbing races between UI actions and state changes without
//! surfacing errors.

use crate::domain::{Task, TaskId};
use mockable::Clock;

/// Appends a task to the collection.
#[must_use]
pub fn add(tasks: &[Task], task: Task) -> Vec<Task> {
    let mut next = tasks.to_vec();
    next.push(task);
    next
}

/// Starts the timer on the task with the given id, recording the start
/// timestamp from the clock. No-op when the id is absent or the task is
/// neither pending nor paused.
#[must_use]
pub fn start(tasks: &[Task], id: TaskId, clock: &impl Clock) -> Vec<Task> {
    amend(tasks, id, |task| {
        let mut started = task.clone();
        started.start(clock).ok().map(|()| started)
    })
}

/// Completes the task with the given id, recording its elapsed duration in
/// seconds. No-op when the id is absent, the task was never started, or the
/// task is not active.
#[must_use]
pub fn end(tasks: &[Task], id: TaskId, clock: &impl Clock) -> Vec<Task> {
    amend(tasks, id, |task| {
        let mut completed = task.clone();
        completed.complete(clock).ok().map(|()| completed)
    })
}

/// Pauses the active task with the given id. No-op otherwise.
#[must_use]
pub fn pause(tasks: &[Task], id: TaskId) -> Vec<Task> {
    amend(tasks, id, |task| {
        let mut paused = task.clone();
        paused.pause().ok().map(|()| paused)
    })
}

/// Cancels the task with the given id. No-op when the id is absent or the
/// task is already terminal.
#[must_use]
pub fn cancel(tasks: &[Task], id: TaskId) -> Vec<Task> {
    amend(tasks, id, |task| {
        let mut cancelled = task.clone();
        cancelled.cancel().ok().map(|()| cancelled)
    })
}

/// Removes the task with the given id. No-op when the id is absent.
#[must_use]
pub fn delete(tasks: &[Task], id: TaskId) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| task.id() != id)
        .cloned()
        .collect()
}

/// Rebuilds the collection, replacing the matching task with the result of
/// `apply` when the transition succeeds and keeping the original otherwise.
fn amend(tasks: &[Task], id: TaskId, apply: impl Fn(&Task) -> Option<Task>) -> Vec<Task> {
    tasks
        .iter()
        .map(|task| {
            if task.id() == id {
                apply(task).unwrap_or_else(|| task.clone())
            } else {
                task.clone()
            }
        })
        .collect()
}
