//! Filtering and facet derivation over the task collection.
//!
//! Nothing here caches: matching and facets are recomputed from the current
//! collection on every call.

use crate::domain::{Priority, Task, TaskStatus};

/// Filter specification over the task collection.
///
/// A task passes only when every populated criterion matches; an empty
/// filter matches every task. Filter tags carry AND semantics and are
/// matched verbatim — callers are expected to source them from
/// [`distinct_tags`], which draws from the already-lowercased tag pool.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    search: String,
    priority: Option<Priority>,
    category: Option<String>,
    status: Option<TaskStatus>,
    tags: Vec<String>,
}

impl TaskFilter {
    /// Creates an empty filter that matches every task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the free-text search term, matched case-insensitively against
    /// title, notes, and category.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Requires an exact priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Requires an exact category match.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Requires an exact status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Adds a required tag; every added tag must be present on a task for it
    /// to match.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Replaces the required tag set.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    /// Returns whether the task passes every populated criterion.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.matches_search(task)
            && self.priority.is_none_or(|wanted| wanted == task.priority())
            && self
                .category
                .as_deref()
                .is_none_or(|wanted| task.category() == Some(wanted))
            && self.status.is_none_or(|wanted| wanted == task.status())
            && self
                .tags
                .iter()
                .all(|tag| task.tags().iter().any(|candidate| candidate == tag))
    }

    fn matches_search(&self, task: &Task) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        task.title().to_lowercase().contains(&needle)
            || task
                .notes()
                .is_some_and(|notes| notes.to_lowercase().contains(&needle))
            || task
                .category()
                .is_some_and(|category| category.to_lowercase().contains(&needle))
    }
}

/// Returns the tasks passing the filter, in collection order.
#[must_use]
pub fn filter<'a>(tasks: &'a [Task], criteria: &TaskFilter) -> Vec<&'a Task> {
    tasks.iter().filter(|task| criteria.matches(task)).collect()
}

/// Returns the distinct non-empty categories across the collection, in
/// first-seen order.
#[must_use]
pub fn distinct_categories(tasks: &[Task]) -> Vec<String> {
    let mut categories = Vec::new();
    for task in tasks {
        if let Some(category) = task.category()
            && !category.is_empty()
            && !categories.iter().any(|seen: &String| seen == category)
        {
            categories.push(category.to_owned());
        }
    }
    categories
}

/// Returns the distinct tags across the collection, in first-seen order.
#[must_use]
pub fn distinct_tags(tasks: &[Task]) -> Vec<String> {
    let mut tags = Vec::new();
    for task in tasks {
        for tag in task.tags() {
            if !tags.iter().any(|seen: &String| seen == tag) {
                tags.push(tag.clone());
            }
        }
    }
    tags
}
