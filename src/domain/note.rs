//! Note entity

use serde::{Deserialize, Deserializer, Serialize};

/// A user-authored title/content pair with creation and update timestamps.
///
/// Timestamps are milliseconds since the Unix epoch. Field names are
/// serialized in camelCase to match the persisted document layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: i64,
}

impl Note {
    /// Create a note whose creation and update timestamps are both `at`
    pub fn new(id: String, title: String, content: String, at: i64) -> Self {
        Note {
            id,
            title,
            content,
            created_at: at,
            updated_at: at,
        }
    }

    /// Case-insensitive substring match against title or content.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.content.to_lowercase().contains(needle)
    }

    /// Timestamp shown to the user as the note's last modification
    pub fn last_modified(&self) -> i64 {
        if self.updated_at != 0 {
            self.updated_at
        } else {
            self.created_at
        }
    }

    /// Title for display, with a placeholder for untitled notes
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            "Untitled"
        } else {
            &self.title
        }
    }

    /// Content for display, with a placeholder for empty notes
    pub fn display_content(&self) -> &str {
        if self.content.is_empty() {
            "No content"
        } else {
            &self.content
        }
    }
}

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// True when both fields are empty after trimming whitespace
pub fn is_blank(title: &str, content: &str) -> bool {
    title.trim().is_empty() && content.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(title: &str, content: &str) -> Note {
        Note::new("1-abc".to_string(), title.to_string(), content.to_string(), 10)
    }

    #[test]
    fn test_new_sets_both_timestamps() {
        let n = note("a", "b");
        assert_eq!(n.created_at, 10);
        assert_eq!(n.updated_at, 10);
    }

    #[test]
    fn test_matches_title_or_content() {
        let n = note("Groceries", "Milk, eggs");
        assert!(n.matches("groc"));
        assert!(n.matches("eggs"));
        assert!(!n.matches("bread"));
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let n = note("Meeting", "Call ALICE");
        assert!(n.matches("alice"));
        assert!(n.matches("meeting"));
    }

    #[test]
    fn test_display_placeholders() {
        let n = note("", "");
        assert_eq!(n.display_title(), "Untitled");
        assert_eq!(n.display_content(), "No content");

        let n = note("Title", "Body");
        assert_eq!(n.display_title(), "Title");
        assert_eq!(n.display_content(), "Body");
    }

    #[test]
    fn test_last_modified_falls_back_to_created() {
        let mut n = note("a", "");
        n.updated_at = 0;
        assert_eq!(n.last_modified(), 10);
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank("", ""));
        assert!(is_blank("  \n", "\t "));
        assert!(!is_blank("A", ""));
        assert!(!is_blank("", " x "));
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_string(&note("t", "c")).unwrap();
        assert!(json.contains("\"createdAt\":10"));
        assert!(json.contains("\"updatedAt\":10"));
        assert!(!json.contains("created_at"));
    }

    #[test]
    fn test_deserialize_fills_missing_fields() {
        let n: Note = serde_json::from_str(r#"{"id":"x"}"#).unwrap();
        assert_eq!(n.title, "");
        assert_eq!(n.content, "");
        assert_eq!(n.created_at, 0);
    }

    #[test]
    fn test_deserialize_null_fields_as_defaults() {
        let n: Note = serde_json::from_str(
            r#"{"id":"x","title":null,"content":null,"createdAt":null,"updatedAt":null}"#,
        )
        .unwrap();
        assert_eq!(n.title, "");
        assert_eq!(n.content, "");
        assert_eq!(n.created_at, 0);
        assert_eq!(n.updated_at, 0);
    }
}
