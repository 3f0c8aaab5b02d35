//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod editor;
pub mod storage;
pub mod workspace;

pub use config::Config;
pub use editor::EditorSession;
pub use storage::{JsonFileStorage, MemoryStorage, NoteStorage};
pub use workspace::Workspace;
