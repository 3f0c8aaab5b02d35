//! Workspace discovery and layout

use crate::error::{NotesError, Result};
use crate::infrastructure::config::JOT_DIR;
use crate::infrastructure::{Config, JsonFileStorage};
use std::fs;
use std::path::{Path, PathBuf};

const COMPOSE_FILE: &str = "COMPOSE_NOTE.md";

/// A directory holding a `.jot` metadata directory
#[derive(Debug, Clone)]
pub struct Workspace {
    pub root: PathBuf,
}

impl Workspace {
    /// Create a workspace handle for the given root directory
    pub fn new(root: PathBuf) -> Self {
        Workspace { root }
    }

    /// Discover workspace root by walking up from current directory
    /// First checks JOT_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("JOT_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_jot_dir(&path) {
                return Ok(Workspace::new(path));
            } else {
                return Err(NotesError::Config(format!(
                    "JOT_ROOT is set to '{}' but no .jot directory found. \
                    Run 'jot init' in that directory or unset JOT_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover workspace root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_jot_dir(&current) {
                return Ok(Workspace::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(NotesError::NotJotDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_jot_dir(path: &Path) -> bool {
        path.join(JOT_DIR).is_dir()
    }

    /// Path of the `.jot` directory
    pub fn jot_dir(&self) -> PathBuf {
        self.root.join(JOT_DIR)
    }

    /// Check if .jot directory exists
    pub fn is_initialized(&self) -> bool {
        Self::has_jot_dir(&self.root)
    }

    /// Create .jot directory structure
    pub fn initialize(&self) -> Result<()> {
        let jot_dir = self.jot_dir();

        if jot_dir.exists() {
            return Err(NotesError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&jot_dir)?;
        Ok(())
    }

    /// Load configuration from .jot/config.toml
    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    /// Save configuration to .jot/config.toml
    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    /// Note document storage for this workspace
    pub fn storage(&self) -> JsonFileStorage {
        JsonFileStorage::in_dir(&self.jot_dir())
    }

    /// Scratch file used while composing a note in an external editor
    pub fn compose_path(&self) -> PathBuf {
        self.jot_dir().join(COMPOSE_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_creates_jot_dir() {
        let temp = TempDir::new().unwrap();
        let ws = Workspace::new(temp.path().to_path_buf());

        assert!(!ws.is_initialized());
        ws.initialize().unwrap();
        assert!(ws.is_initialized());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let ws = Workspace::new(temp.path().to_path_buf());

        ws.initialize().unwrap();
        assert!(matches!(ws.initialize(), Err(NotesError::Config(_))));
    }

    #[test]
    fn test_discover_from_nested_directory() {
        let temp = TempDir::new().unwrap();
        Workspace::new(temp.path().to_path_buf())
            .initialize()
            .unwrap();

        let nested = temp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        let ws = Workspace::discover_from(&nested).unwrap();
        assert_eq!(ws.root, temp.path());
    }

    #[test]
    fn test_discover_from_outside_workspace() {
        let temp = TempDir::new().unwrap();
        let result = Workspace::discover_from(temp.path());
        assert!(matches!(result, Err(NotesError::NotJotDirectory(_))));
    }

    #[test]
    fn test_storage_lives_in_jot_dir() {
        let temp = TempDir::new().unwrap();
        let ws = Workspace::new(temp.path().to_path_buf());
        assert_eq!(
            ws.storage().path(),
            temp.path().join(".jot").join("notes_app_items_v1.json")
        );
        assert!(ws.compose_path().starts_with(ws.jot_dir()));
    }
}
