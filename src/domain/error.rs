//! Error types for task domain validation and parsing.

use super::{TaskId, TaskStatus};
use thiserror::Error;

/// Errors returned while constructing or transitioning domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task date is not a parseable ISO 8601 calendar date.
    #[error("invalid task date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    /// The requested status transition is not permitted by the state machine.
    #[error("invalid status transition for task {task_id}: {from} -> {to}")]
    InvalidStatusTransition {
        /// Identifier of the task being transitioned.
        task_id: TaskId,
        /// Status the task currently holds.
        from: TaskStatus,
        /// Status the transition targeted.
        to: TaskStatus,
    },

    /// The task cannot be completed because it was never started.
    #[error("task {0} was never started")]
    NeverStarted(TaskId),
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task priorities from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParsePriorityError(pub String);
