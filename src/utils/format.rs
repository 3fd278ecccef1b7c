// src/utils/format.rs
use chrono::{DateTime, Utc};

use crate::models::HistoryEntry;

// Format a duration for display
pub fn format_time_ago(time: DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(time);

    let seconds = duration.num_seconds();

    if seconds < 60 {
        format!("{} seconds ago", seconds)
    } else if seconds < 3600 {
        format!("{} minutes ago", duration.num_minutes())
    } else if seconds < 86400 {
        format!("{} hours ago", duration.num_hours())
    } else {
        format!("{} days ago", duration.num_days())
    }
}

/// CSV rendering of the history: a `Password` header, then one
/// double-quoted field per line. Embedded quotes are doubled.
pub fn history_to_csv(entries: &[HistoryEntry]) -> String {
    let mut csv = String::from("Password\n");
    for entry in entries {
        csv.push('"');
        csv.push_str(&entry.password.replace('"', "\"\""));
        csv.push_str("\"\n");
    }
    csv
}

/// Plaintext rendering: passwords newline-joined, newest first.
pub fn passwords_to_text(entries: &[HistoryEntry]) -> String {
    entries
        .iter()
        .map(|entry| entry.password.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
