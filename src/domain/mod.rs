//! Domain model for task tracking.
//!
//! The task domain models validated task records, the lifecycle status state
//! machine, and normalised construction input while keeping all
//! infrastructure concerns outside of the domain boundary.

mod draft;
mod error;
mod ids;
mod task;

pub use draft::TaskDraft;
pub use error::{ParsePriorityError, ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use task::{Priority, Task, TaskStatus};
