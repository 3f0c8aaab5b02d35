//! Application layer - Use cases and orchestration

pub mod compose;
pub mod init;
pub mod manage_config;
pub mod note_store;

pub use compose::{compose, Draft};
pub use manage_config::ConfigService;
pub use note_store::NoteStore;
