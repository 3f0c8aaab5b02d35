//! jot - Terminal notes application
//!
//! Create, edit, delete and search short text notes. The whole collection is
//! kept in a single JSON document inside a `.jot` workspace directory.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::NoteStore;
pub use domain::Note;
pub use error::NotesError;
