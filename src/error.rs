//! Error types for jot

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for jot application
#[derive(Debug, Error)]
pub enum NotesError {
    #[error("Not a jot directory: {0}")]
    NotJotDirectory(PathBuf),

    #[error("Note not found: {0}")]
    NoteNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl NotesError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            NotesError::NotJotDirectory(_) => 2,
            NotesError::NoteNotFound(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            NotesError::NotJotDirectory(path) => {
                format!(
                    "Not a jot directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'jot init' in this directory to create a new workspace\n\
                    • Navigate to an existing jot directory\n\
                    • Set JOT_ROOT environment variable to your workspace path",
                    path.display()
                )
            }
            NotesError::NoteNotFound(id) => {
                format!(
                    "Note not found: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'jot list' to see note ids\n\
                    • The note may have been deleted from another terminal",
                    id
                )
            }
            NotesError::Editor(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set EDITOR environment variable (e.g., export EDITOR=nano)\n\
                    • Configure editor: jot config editor 'vim'\n\
                    • Pass the text directly: jot new --title ... --content ...",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using NotesError
pub type Result<T> = std::result::Result<T, NotesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_jot_directory_suggestion() {
        let err = NotesError::NotJotDirectory(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("jot init"));
        assert!(msg.contains("JOT_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_note_not_found_suggestions() {
        let err = NotesError::NoteNotFound("1700000000000-abc123".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("'1700000000000-abc123'"));
        assert!(msg.contains("jot list"));
    }

    #[test]
    fn test_editor_error_suggestions() {
        let err = NotesError::Editor("Editor not found".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("EDITOR environment variable"));
        assert!(msg.contains("jot config editor"));
        assert!(msg.contains("PATH"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(NotesError::NotJotDirectory(PathBuf::from(".")).exit_code(), 2);
        assert_eq!(NotesError::NoteNotFound("x".to_string()).exit_code(), 3);
        assert_eq!(NotesError::Config("bad".to_string()).exit_code(), 1);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = NotesError::Config("Unknown config key".to_string());
        let msg = err.display_with_suggestions();
        // Thiserror prefixes with the error type
        assert_eq!(msg, "Configuration error: Unknown config key");
    }
}
