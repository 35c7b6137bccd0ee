//! Domain tests for draft normalisation and task construction.

use crate::domain::{
    ParsePriorityError, ParseTaskStatusError, Priority, Task, TaskDomainError, TaskDraft,
    TaskStatus,
};
use rstest::rstest;

#[rstest]
#[case("   ")]
#[case("")]
fn draft_rejects_empty_title(#[case] title: &str) {
    let result = TaskDraft::new(title, "2024-01-01");
    assert_eq!(result, Err(TaskDomainError::EmptyTitle));
}

#[rstest]
fn draft_trims_title() {
    let draft = TaskDraft::new("  Quarterly report  ", "2024-01-01").expect("valid draft");
    assert_eq!(draft.title(), "Quarterly report");
}

#[rstest]
#[case("not-a-date")]
#[case("2024-13-40")]
#[case("")]
fn draft_rejects_unparseable_date(#[case] date: &str) {
    let result = TaskDraft::new("Report", date);
    assert_eq!(result, Err(TaskDomainError::InvalidDate(date.to_owned())));
}

#[rstest]
fn draft_defaults_to_medium_priority_and_no_optionals() {
    let draft = TaskDraft::new("Report", "2024-01-01").expect("valid draft");
    assert_eq!(draft.priority(), Priority::Medium);
    assert_eq!(draft.category(), None);
    assert_eq!(draft.notes(), None);
    assert_eq!(draft.estimated_duration(), None);
    assert!(draft.tags().is_empty());
}

#[rstest]
fn draft_trims_category_and_notes_and_drops_empty_values() {
    let draft = TaskDraft::new("Report", "2024-01-01")
        .expect("valid draft")
        .with_category("  Work  ")
        .with_notes("  check figures  ");
    assert_eq!(draft.category(), Some("Work"));
    assert_eq!(draft.notes(), Some("check figures"));

    let cleared = draft.with_category("   ").with_notes("");
    assert_eq!(cleared.category(), None);
    assert_eq!(cleared.notes(), None);
}

#[rstest]
fn draft_drops_zero_estimate() {
    let draft = TaskDraft::new("Report", "2024-01-01")
        .expect("valid draft")
        .with_estimated_duration(0);
    assert_eq!(draft.estimated_duration(), None);

    let estimated = draft.with_estimated_duration(45);
    assert_eq!(estimated.estimated_duration(), Some(45));
}

#[rstest]
fn draft_lowercases_trims_and_dedups_tags() {
    let draft = TaskDraft::new("Report", "2024-01-01")
        .expect("valid draft")
        .with_tags(vec![
            "Urgent".to_owned(),
            "  WORK  ".to_owned(),
            "urgent".to_owned(),
            "   ".to_owned(),
        ]);
    assert_eq!(draft.tags(), ["urgent".to_owned(), "work".to_owned()]);
}

#[rstest]
fn draft_with_tag_appends_unless_duplicate() {
    let draft = TaskDraft::new("Report", "2024-01-01")
        .expect("valid draft")
        .with_tag("Deep")
        .with_tag("deep")
        .with_tag("focus");
    assert_eq!(draft.tags(), ["deep".to_owned(), "focus".to_owned()]);
}

#[rstest]
fn from_draft_assigns_pending_status_and_fresh_ids() {
    let draft = TaskDraft::new("Report", "2024-01-01").expect("valid draft");
    let first = Task::from_draft(draft.clone());
    let second = Task::from_draft(draft);

    assert_eq!(first.status(), TaskStatus::Pending);
    assert_eq!(second.status(), TaskStatus::Pending);
    assert_ne!(first.id(), second.id());
    assert_eq!(first.start_time(), None);
    assert_eq!(first.duration(), None);
}

#[rstest]
fn from_draft_carries_normalised_fields() {
    let draft = TaskDraft::new("Report", "2024-03-15")
        .expect("valid draft")
        .with_priority(Priority::High)
        .with_category("Work")
        .with_notes("two lines\nof notes")
        .with_estimated_duration(90)
        .with_tags(vec!["deep".to_owned(), "focus".to_owned()]);
    let task = Task::from_draft(draft);

    assert_eq!(task.title(), "Report");
    assert_eq!(task.date().to_string(), "2024-03-15");
    assert_eq!(task.priority(), Priority::High);
    assert_eq!(task.category(), Some("Work"));
    assert_eq!(task.notes(), Some("two lines\nof notes"));
    assert_eq!(task.estimated_duration(), Some(90));
    assert_eq!(task.tags(), ["deep".to_owned(), "focus".to_owned()]);
}

#[rstest]
#[case(TaskStatus::Pending, "pending")]
#[case(TaskStatus::Active, "active")]
#[case(TaskStatus::Paused, "paused")]
#[case(TaskStatus::Completed, "completed")]
#[case(TaskStatus::Cancelled, "cancelled")]
fn status_round_trips_through_str(#[case] status: TaskStatus, #[case] text: &str) {
    assert_eq!(status.as_str(), text);
    assert_eq!(TaskStatus::try_from(text), Ok(status));
}

#[rstest]
fn status_parse_rejects_unknown_values() {
    assert_eq!(
        TaskStatus::try_from("archived"),
        Err(ParseTaskStatusError("archived".to_owned()))
    );
}

#[rstest]
#[case(Priority::Low, "low")]
#[case(Priority::Medium, "medium")]
#[case(Priority::High, "high")]
fn priority_round_trips_through_str(#[case] priority: Priority, #[case] text: &str) {
    assert_eq!(priority.as_str(), text);
    assert_eq!(Priority::try_from(text), Ok(priority));
}

#[rstest]
fn priority_parse_rejects_unknown_values() {
    assert_eq!(
        Priority::try_from("critical"),
        Err(ParsePriorityError("critical".to_owned()))
    );
}
