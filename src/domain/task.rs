//! Task record and lifecycle status types.

use super::{ParsePriorityError, ParseTaskStatusError, TaskDomainError, TaskDraft, TaskId};
use chrono::NaiveDate;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// Task has been created but its timer has not run.
    Pending,
    /// Task timer is running.
    Active,
    /// Task timer is temporarily paused.
    Paused,
    /// Task has been completed and its duration recorded.
    Completed,
    /// Task has been abandoned.
    Cancelled,
}

impl TaskStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns whether the state machine permits moving to `target`.
    #[must_use]
    pub const fn can_transition_to(self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Pending, Self::Active | Self::Cancelled)
                | (Self::Active, Self::Completed | Self::Paused | Self::Cancelled)
                | (Self::Paused, Self::Active | Self::Cancelled)
        )
    }

    /// Returns whether no further transitions are permitted.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "active" => Ok(Self::Active),
            "paused" => Ok(Self::Paused),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Task priority level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can wait.
    Low,
    /// Ordinary importance; the default at creation.
    #[default]
    Medium,
    /// Needs attention first.
    High,
}

impl Priority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A unit of trackable work with a lifecycle status and optional timing data.
///
/// Tasks are immutable-by-replacement: lifecycle functions clone the record,
/// apply one validated transition, and hand the new value back to the owning
/// collection. The serialised shape matches the persisted snapshot format
/// field for field, so a saved collection round-trips exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    title: String,
    date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    start_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    estimated_duration: Option<u32>,
    status: TaskStatus,
    priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
}

impl Task {
    /// Creates a pending task from normalised draft data, assigning a fresh
    /// identifier.
    #[must_use]
    pub fn from_draft(draft: TaskDraft) -> Self {
        let TaskDraft {
            title,
            date,
            priority,
            category,
            notes,
            estimated_duration,
            tags,
        } = draft;
        Self {
            id: TaskId::new(),
            title,
            date,
            start_time: None,
            duration: None,
            estimated_duration,
            status: TaskStatus::Pending,
            priority,
            category,
            notes,
            tags,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the due/scheduled calendar date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the timer start timestamp in epoch milliseconds, if the task
    /// has ever been started. Retained through pause and completion.
    #[must_use]
    pub const fn start_time(&self) -> Option<i64> {
        self.start_time
    }

    /// Returns the recorded elapsed duration in seconds, present only once
    /// the task has been completed.
    #[must_use]
    pub const fn duration(&self) -> Option<u64> {
        self.duration
    }

    /// Returns the user estimate in minutes, if one was given.
    #[must_use]
    pub const fn estimated_duration(&self) -> Option<u32> {
        self.estimated_duration
    }

    /// Returns the task lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the category label, if one was given.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Returns the free-text notes, if any.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Returns the lowercased, deduplicated tags in first-seen order.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Starts the timer: moves the task to [`TaskStatus::Active`] and records
    /// the start timestamp from the clock.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStatusTransition`] when the task is
    /// neither pending nor paused.
    pub fn start(&mut self, clock: &impl Clock) -> Result<(), TaskDomainError> {
        self.guard_transition(TaskStatus::Active)?;
        self.status = TaskStatus::Active;
        self.start_time = Some(clock.utc().timestamp_millis());
        Ok(())
    }

    /// Stops the timer: moves the task to [`TaskStatus::Completed`] and
    /// records the elapsed duration in whole seconds, rounded. The start
    /// timestamp is retained for audit.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NeverStarted`] when no start timestamp is
    /// recorded, or [`TaskDomainError::InvalidStatusTransition`] when the
    /// task is not active.
    pub fn complete(&mut self, clock: &impl Clock) -> Result<(), TaskDomainError> {
        let started_at = self
            .start_time
            .ok_or(TaskDomainError::NeverStarted(self.id))?;
        self.guard_transition(TaskStatus::Completed)?;
        self.status = TaskStatus::Completed;
        self.duration = Some(elapsed_seconds(started_at, clock.utc().timestamp_millis()));
        Ok(())
    }

    /// Pauses the timer: moves the task to [`TaskStatus::Paused`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStatusTransition`] when the task is
    /// not active.
    pub fn pause(&mut self) -> Result<(), TaskDomainError> {
        self.guard_transition(TaskStatus::Paused)?;
        self.status = TaskStatus::Paused;
        Ok(())
    }

    /// Abandons the task: moves it to [`TaskStatus::Cancelled`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidStatusTransition`] when the task is
    /// already in a terminal status.
    pub fn cancel(&mut self) -> Result<(), TaskDomainError> {
        self.guard_transition(TaskStatus::Cancelled)?;
        self.status = TaskStatus::Cancelled;
        Ok(())
    }

    fn guard_transition(&self, target: TaskStatus) -> Result<(), TaskDomainError> {
        if self.status.can_transition_to(target) {
            Ok(())
        } else {
            Err(TaskDomainError::InvalidStatusTransition {
                task_id: self.id,
                from: self.status,
                to: target,
            })
        }
    }
}

/// Rounds the elapsed time between two epoch-millisecond stamps to whole
/// seconds. Clock regressions clamp to zero rather than going negative.
fn elapsed_seconds(started_at: i64, now: i64) -> u64 {
    let millis = now.saturating_sub(started_at);
    let seconds = millis.saturating_add(500).div_euclid(1000);
    u64::try_from(seconds).unwrap_or_default()
}
