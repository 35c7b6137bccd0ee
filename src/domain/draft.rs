//! Normalised construction input for new tasks.

use super::{Priority, TaskDomainError};
use chrono::NaiveDate;

/// Validated, normalised input for creating a task.
///
/// A draft carries no identifier and no status; [`super::Task::from_draft`]
/// assigns both. Construction normalises every field: the title is trimmed
/// and must be non-empty, the date must parse as an ISO 8601 calendar date,
/// category and notes are trimmed and dropped when empty, a zero estimate is
/// dropped, and tags are trimmed, lowercased, and deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub(crate) title: String,
    pub(crate) date: NaiveDate,
    pub(crate) priority: Priority,
    pub(crate) category: Option<String>,
    pub(crate) notes: Option<String>,
    pub(crate) estimated_duration: Option<u32>,
    pub(crate) tags: Vec<String>,
}

impl TaskDraft {
    /// Creates a draft with the required title and date.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is empty after
    /// trimming, or [`TaskDomainError::InvalidDate`] when the date is not a
    /// parseable `YYYY-MM-DD` value.
    pub fn new(title: impl Into<String>, date: &str) -> Result<Self, TaskDomainError> {
        let raw_title = title.into();
        let normalized_title = raw_title.trim();
        if normalized_title.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        let parsed_date = date
            .trim()
            .parse::<NaiveDate>()
            .map_err(|_| TaskDomainError::InvalidDate(date.to_owned()))?;

        Ok(Self {
            title: normalized_title.to_owned(),
            date: parsed_date,
            priority: Priority::default(),
            category: None,
            notes: None,
            estimated_duration: None,
            tags: Vec::new(),
        })
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the category label; an empty value clears it.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let value = category.into();
        let normalized = value.trim();
        self.category = (!normalized.is_empty()).then_some(normalized.to_owned());
        self
    }

    /// Sets the free-text notes; an empty value clears them.
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        let value = notes.into();
        let normalized = value.trim();
        self.notes = (!normalized.is_empty()).then_some(normalized.to_owned());
        self
    }

    /// Sets the estimate in minutes; zero clears it.
    #[must_use]
    pub const fn with_estimated_duration(mut self, minutes: u32) -> Self {
        self.estimated_duration = if minutes > 0 { Some(minutes) } else { None };
        self
    }

    /// Replaces the tag set. Each tag is trimmed and lowercased; empty and
    /// duplicate entries are dropped, keeping first-seen order.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = String>) -> Self {
        self.tags = Vec::new();
        for tag in tags {
            push_tag(&mut self.tags, &tag);
        }
        self
    }

    /// Adds a single tag, applying the same normalisation as [`Self::with_tags`].
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        let value = tag.into();
        push_tag(&mut self.tags, &value);
        self
    }

    /// Returns the normalised title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the parsed date.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the category label, if set.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Returns the notes, if set.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Returns the estimate in minutes, if set.
    #[must_use]
    pub const fn estimated_duration(&self) -> Option<u32> {
        self.estimated_duration
    }

    /// Returns the normalised tags.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

/// Normalises a tag and appends it unless empty or already present.
fn push_tag(tags: &mut Vec<String>, raw: &str) {
    let normalized = raw.trim().to_lowercase();
    if !normalized.is_empty() && !tags.iter().any(|existing| *existing == normalized) {
        tags.push(normalized);
    }
}
