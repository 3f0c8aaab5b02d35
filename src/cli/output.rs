//! Output formatting utilities

use crate::domain::Note;
use chrono::{DateTime, Local};

const CONTENT_INDENT: &str = "    ";

/// Format a millisecond timestamp in local time
pub fn format_timestamp(millis: i64) -> String {
    match DateTime::from_timestamp_millis(millis) {
        Some(utc) => utc
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
            .to_string(),
        None => "unknown".to_string(),
    }
}

/// Format one note in full
pub fn format_note(note: &Note) -> String {
    let mut output = format!("{}  {}\n", note.id, note.display_title());
    for line in note.display_content().lines() {
        output.push_str(CONTENT_INDENT);
        output.push_str(line);
        output.push('\n');
    }
    output.push_str(&format!(
        "{}Updated {}\n",
        CONTENT_INDENT,
        format_timestamp(note.last_modified())
    ));
    output
}

/// Format a list of notes for display
pub fn format_note_list(notes: &[&Note], query: Option<&str>) -> String {
    if notes.is_empty() {
        return match query.map(str::trim).filter(|q| !q.is_empty()) {
            Some(q) => format!("No notes match '{}'", q),
            None => "No notes yet\nRun 'jot new' to create your first note.".to_string(),
        };
    }

    notes
        .iter()
        .map(|note| format_note(note))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: &str, title: &str, content: &str) -> Note {
        Note::new(id.to_string(), title.to_string(), content.to_string(), 0)
    }

    #[test]
    fn test_format_empty_list() {
        let output = format_note_list(&[], None);
        assert!(output.starts_with("No notes yet"));
        assert!(output.contains("jot new"));
    }

    #[test]
    fn test_format_empty_search() {
        assert_eq!(format_note_list(&[], Some(" milk ")), "No notes match 'milk'");
        assert!(format_note_list(&[], Some("  ")).starts_with("No notes yet"));
    }

    #[test]
    fn test_format_note_placeholders() {
        let output = format_note(&note("1-a", "", ""));
        assert!(output.starts_with("1-a  Untitled\n"));
        assert!(output.contains("    No content\n"));
        assert!(output.contains("    Updated "));
    }

    #[test]
    fn test_format_multiline_content_is_indented() {
        let output = format_note(&note("1-a", "List", "milk\neggs"));
        assert!(output.contains("    milk\n    eggs\n"));
    }

    #[test]
    fn test_format_list_keeps_order() {
        let a = note("2-b", "newer", "x");
        let b = note("1-a", "older", "y");
        let output = format_note_list(&[&a, &b], None);
        let newer = output.find("newer").unwrap();
        let older = output.find("older").unwrap();
        assert!(newer < older);
    }

    #[test]
    fn test_format_timestamp_out_of_range() {
        assert_eq!(format_timestamp(i64::MAX), "unknown");
    }
}
