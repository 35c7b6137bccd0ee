//! Shared test fixtures.

use crate::domain::{Task, TaskDraft};
use chrono::{DateTime, Local, Utc};
use mockable::Clock;

/// Clock that always reads the same instant.
pub(crate) struct FixedClock(DateTime<Utc>);

impl FixedClock {
    /// Creates a clock pinned to the given epoch-millisecond instant.
    pub(crate) fn at_millis(epoch_millis: i64) -> Self {
        Self(DateTime::from_timestamp_millis(epoch_millis).expect("valid timestamp"))
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A minimal valid draft.
pub(crate) fn draft(title: &str) -> TaskDraft {
    TaskDraft::new(title, "2024-01-01").expect("valid draft")
}

/// A minimal pending task.
pub(crate) fn pending_task(title: &str) -> Task {
    Task::from_draft(draft(title))
}

/// A completed task whose timer ran for `elapsed_seconds`.
pub(crate) fn completed_task(title: &str, elapsed_seconds: i64) -> Task {
    let mut task = pending_task(title);
    task.start(&FixedClock::at_millis(0)).expect("start");
    task.complete(&FixedClock::at_millis(elapsed_seconds * 1000))
        .expect("complete");
    task
}

/// A completed task with an estimate, for efficiency derivation.
pub(crate) fn estimated_completed_task(
    title: &str,
    estimated_minutes: u32,
    elapsed_seconds: i64,
) -> Task {
    let mut task =
        Task::from_draft(draft(title).with_estimated_duration(estimated_minutes));
    task.start(&FixedClock::at_millis(0)).expect("start");
    task.complete(&FixedClock::at_millis(elapsed_seconds * 1000))
        .expect("complete");
    task
}
