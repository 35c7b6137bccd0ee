//! Export serialisers: JSON, CSV, and plain text.
//!
//! These render the collection for download by the UI layer. Formats are
//! fixed; absent optional fields render as blanks (CSV) or are omitted
//! entirely (text).

use crate::domain::Task;
use crate::services::metrics;

/// Column headers for the CSV export, in emission order.
const CSV_HEADERS: [&str; 9] = [
    "Title",
    "Date",
    "Status",
    "Priority",
    "Category",
    "Tags",
    "Estimated Duration",
    "Actual Duration",
    "Notes",
];

/// Delimiter line emitted between plain-text task blocks.
const TEXT_DELIMITER: &str = "----------------------------------------";

/// Serialises the collection as a pretty-printed JSON array.
///
/// The shape matches the persisted snapshot format; tags always serialise,
/// even when empty.
///
/// # Errors
///
/// Returns a serialisation error when JSON encoding fails.
pub fn to_json(tasks: &[Task]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(tasks)
}

/// Serialises the collection as CSV.
///
/// Every field is double-quote-wrapped; tags join with `", "`; the actual
/// duration renders in whole minutes (rounded up); newlines in notes are
/// replaced with spaces; absent fields render blank.
#[must_use]
pub fn to_csv(tasks: &[Task]) -> String {
    let mut lines = vec![CSV_HEADERS.join(",")];
    for task in tasks {
        let cells = [
            task.title().to_owned(),
            task.date().to_string(),
            task.status().to_string(),
            task.priority().to_string(),
            task.category().unwrap_or_default().to_owned(),
            task.tags().join(", "),
            task.estimated_duration()
                .map(|minutes| minutes.to_string())
                .unwrap_or_default(),
            metrics::actual_minutes(task)
                .map(|minutes| minutes.to_string())
                .unwrap_or_default(),
            task.notes()
                .map(|notes| notes.replace('\n', " "))
                .unwrap_or_default(),
        ];
        let row = cells
            .iter()
            .map(|cell| format!("\"{cell}\""))
            .collect::<Vec<_>>()
            .join(",");
        lines.push(row);
    }
    lines.join("\n")
}

/// Serialises the collection as a human-readable text report.
///
/// Each task renders as one line per present field, terminated by a 40-dash
/// delimiter line; blocks are separated by a blank line. The efficiency
/// percentage is included only when determinable.
#[must_use]
pub fn to_text(tasks: &[Task]) -> String {
    tasks
        .iter()
        .map(text_block)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn text_block(task: &Task) -> String {
    let mut lines = vec![
        format!("Title: {}", task.title()),
        format!("Date: {}", task.date()),
        format!("Status: {}", task.status()),
        format!("Priority: {}", task.priority()),
    ];
    if let Some(category) = task.category() {
        lines.push(format!("Category: {category}"));
    }
    if !task.tags().is_empty() {
        lines.push(format!("Tags: {}", task.tags().join(", ")));
    }
    if let Some(estimated) = task.estimated_duration() {
        lines.push(format!("Estimated Duration: {estimated} minutes"));
    }
    if let Some(actual) = metrics::actual_minutes(task) {
        lines.push(format!("Actual Duration: {actual} minutes"));
    }
    if let Some(rating) = metrics::efficiency(task) {
        lines.push(format!("Efficiency: {}%", rating.percent()));
    }
    if let Some(notes) = task.notes() {
        lines.push(format!("Notes: {notes}"));
    }
    lines.push(TEXT_DELIMITER.to_owned());
    lines.join("\n")
}
