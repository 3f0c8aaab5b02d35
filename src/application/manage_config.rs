//! Config management use case

use crate::error::{NotesError, Result};
use crate::infrastructure::{Config, Workspace};

/// Service for managing workspace configuration
pub struct ConfigService {
    workspace: Workspace,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(workspace: Workspace) -> Self {
        ConfigService { workspace }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.workspace.load_config()?;

        match key {
            "editor" => Ok(config.editor),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(NotesError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: editor, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.workspace.load_config()?;

        match key {
            "editor" => {
                if value.trim().is_empty() {
                    return Err(NotesError::Config("Editor cannot be empty".to_string()));
                }
                config.editor = value.to_string();
            }
            "created" => {
                return Err(NotesError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(NotesError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: editor",
                    key
                )));
            }
        }

        self.workspace.save_config(&config)
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.workspace.load_config()
    }
}
