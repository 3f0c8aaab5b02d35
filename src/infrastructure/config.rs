//! Configuration management

use crate::error::{NotesError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the workspace metadata directory
pub const JOT_DIR: &str = ".jot";

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub editor: String,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            editor: Self::detect_default_editor(),
            created: Utc::now(),
        }
    }

    /// Load config from .jot/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(JOT_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                NotesError::NotJotDirectory(path.to_path_buf())
            } else {
                NotesError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| NotesError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .jot/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let jot_dir = path.join(JOT_DIR);
        let config_path = jot_dir.join(CONFIG_FILE);

        // Ensure .jot directory exists
        if !jot_dir.exists() {
            fs::create_dir(&jot_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get the editor command, checking environment variables first
    pub fn get_editor(&self) -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| self.editor.clone())
    }

    /// Detect default editor from environment or system
    fn detect_default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(windows) {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}
