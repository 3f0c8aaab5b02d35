//! Compose note text in an external editor
//!
//! The scratch file holds the title on its first line and the content
//! below it.

use crate::error::Result;
use crate::infrastructure::{EditorSession, Workspace};
use log::warn;
use std::fs;

/// Title and content as written by the user, untrimmed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Draft {
    pub title: String,
    pub content: String,
}

impl Draft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Draft {
            title: title.into(),
            content: content.into(),
        }
    }

    /// Parse scratch file text: first line is the title, the rest (after any
    /// leading blank lines) is the content.
    pub fn parse(text: &str) -> Self {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let (title, rest) = match text.split_once('\n') {
            Some((title, rest)) => (title, rest),
            None => (text, ""),
        };

        let content = rest.trim_start_matches(['\r', '\n']);

        Draft::new(title.trim_end_matches('\r'), content)
    }

    /// Render into the scratch file layout understood by `parse`
    pub fn render(&self) -> String {
        if self.content.is_empty() {
            format!("{}\n", self.title)
        } else {
            format!("{}\n\n{}\n", self.title, self.content)
        }
    }
}

/// Let the user edit `initial` in their editor and return the result.
pub fn compose(workspace: &Workspace, initial: &Draft) -> Result<Draft> {
    let config = workspace.load_config()?;
    let path = workspace.compose_path();

    fs::write(&path, initial.render())?;

    let editor = EditorSession::new(config.get_editor());
    let outcome = editor
        .edit(&path)
        .and_then(|_| fs::read_to_string(&path).map_err(Into::into));

    if let Err(e) = fs::remove_file(&path) {
        warn!("failed to remove {}: {}", path.display(), e);
    }

    Ok(Draft::parse(&outcome?))
}
