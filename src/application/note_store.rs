//! In-session note collection
//!
//! The store owns the ordered collection (most recent first) and writes it
//! back through its storage after every mutation, before returning.

use crate::domain::note::{is_blank, Note};
use crate::error::{NotesError, Result};
use crate::infrastructure::NoteStorage;
use chrono::Utc;
use log::debug;

/// Source of "now" in milliseconds since the epoch
pub type Clock = fn() -> i64;

fn system_clock() -> i64 {
    Utc::now().timestamp_millis()
}

/// Authoritative in-memory note collection backed by a storage adapter
pub struct NoteStore<S: NoteStorage> {
    storage: S,
    notes: Vec<Note>,
    clock: Clock,
}

impl<S: NoteStorage> NoteStore<S> {
    /// Load the collection from storage using the system clock
    pub fn open(storage: S) -> Self {
        Self::with_clock(storage, system_clock)
    }

    /// Load the collection from storage using a custom clock
    pub fn with_clock(storage: S, clock: Clock) -> Self {
        let notes = storage.load();
        NoteStore {
            storage,
            notes,
            clock,
        }
    }

    /// Notes in display order
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Number of notes in the collection
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// True when the collection holds no notes
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Look up a note by id
    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Storage adapter backing this store
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Create a note at the front of the collection.
    ///
    /// Returns `None` without touching the collection when both fields are
    /// empty after trimming.
    pub fn create(&mut self, title: &str, content: &str) -> Option<Note> {
        if is_blank(title, content) {
            debug!("rejected empty note");
            return None;
        }

        let note = Note::new(
            self.storage.generate_id(),
            title.trim().to_string(),
            content.trim().to_string(),
            (self.clock)(),
        );
        self.notes.insert(0, note.clone());
        self.persist();

        debug!("created note {}", note.id);
        Some(note)
    }

    /// Replace a note's title and content in place.
    ///
    /// Unlike `create`, an update may leave both fields empty.
    pub fn update(&mut self, id: &str, title: &str, content: &str) -> Result<Note> {
        let now = (self.clock)();
        let note = self
            .notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| NotesError::NoteNotFound(id.to_string()))?;

        note.title = title.trim().to_string();
        note.content = content.trim().to_string();
        // updatedAt must strictly increase even within one millisecond
        note.updated_at = now.max(note.updated_at.saturating_add(1));
        let updated = note.clone();

        self.persist();

        debug!("updated note {}", id);
        Ok(updated)
    }

    /// Remove a note. Unknown ids are ignored.
    pub fn delete(&mut self, id: &str) {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);

        if self.notes.len() != before {
            self.persist();
            debug!("deleted note {}", id);
        }
    }

    /// Notes whose title or content contains `query`, ignoring case.
    ///
    /// A blank query returns the whole collection.
    pub fn search(&self, query: &str) -> Vec<&Note> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.notes.iter().collect();
        }

        self.notes.iter().filter(|n| n.matches(&needle)).collect()
    }

    fn persist(&self) {
        self.storage.save(&self.notes);
    }
}
