//! Domain layer - Business logic and domain models

pub mod note;

pub use note::Note;
