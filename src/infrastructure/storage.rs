//! Note document persistence
//!
//! The whole collection is stored as one JSON array under a fixed, versioned
//! key. Reads and writes are best-effort: a missing, unreadable or corrupt
//! document loads as an empty collection, and a rejected write leaves the
//! in-memory collection as the source of truth for the session.

use crate::domain::Note;
use chrono::Utc;
use log::{debug, warn};
use rand::Rng;
use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Storage key of the note document. Bump the version suffix when the note
/// shape changes incompatibly; older documents are then ignored.
pub const STORAGE_KEY: &str = "notes_app_items_v1";

const ID_SUFFIX_LEN: usize = 6;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Persistence boundary for the note collection
pub trait NoteStorage {
    /// Read the persisted collection. Never fails: every failure mode
    /// degrades to an empty collection.
    fn load(&self) -> Vec<Note>;

    /// Overwrite the persisted collection. Failures are swallowed.
    fn save(&self, notes: &[Note]);

    /// Produce a fresh note identifier
    fn generate_id(&self) -> String {
        generate_id()
    }
}

/// Build an identifier from the current time and a short random suffix.
///
/// The timestamp separates ids across time, the suffix separates ids created
/// within the same millisecond.
pub fn generate_id() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("{}-{}", Utc::now().timestamp_millis(), suffix)
}

/// Parse a persisted document into notes.
///
/// Returns `None` when the text is not a JSON array of note-like records.
/// Missing `updatedAt` falls back to `createdAt`; records repeating an
/// earlier id are dropped.
pub fn parse_document(raw: &str) -> Option<Vec<Note>> {
    if raw.trim().is_empty() {
        return Some(Vec::new());
    }

    let parsed: Vec<Note> = match serde_json::from_str(raw) {
        Ok(notes) => notes,
        Err(e) => {
            warn!("ignoring unreadable note document: {}", e);
            return None;
        }
    };

    let mut seen = HashSet::new();
    let mut notes = Vec::with_capacity(parsed.len());
    for mut note in parsed {
        if !seen.insert(note.id.clone()) {
            warn!("dropping note with duplicate id {}", note.id);
            continue;
        }
        if note.updated_at == 0 {
            note.updated_at = note.created_at;
        }
        notes.push(note);
    }

    Some(notes)
}

/// Serialize notes into the persisted document format
pub fn render_document(notes: &[Note]) -> serde_json::Result<String> {
    serde_json::to_string(notes)
}

/// Stores the note document as a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Storage backed by an explicit document path
    pub fn new(path: PathBuf) -> Self {
        JsonFileStorage { path }
    }

    /// Storage for the versioned document inside a directory
    pub fn in_dir(dir: &Path) -> Self {
        JsonFileStorage::new(dir.join(format!("{}.json", STORAGE_KEY)))
    }

    /// Path of the document file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the document using a best-effort atomic replace:
    /// write to a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we remove the destination first.
    fn write_atomic(&self, contents: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.jot-tmp-{}",
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("notes.json"),
            std::process::id()
        );
        let tmp_path = self.path.with_file_name(tmp_name);

        fs::write(&tmp_path, contents)?;

        #[cfg(windows)]
        {
            if self.path.exists() {
                fs::remove_file(&self.path)?;
            }
        }

        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e);
        }

        Ok(())
    }
}

impl NoteStorage for JsonFileStorage {
    fn load(&self) -> Vec<Note> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!("failed to read {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        let notes = parse_document(&raw).unwrap_or_default();
        debug!("loaded {} notes from {}", notes.len(), self.path.display());
        notes
    }

    fn save(&self, notes: &[Note]) {
        let contents = match render_document(notes) {
            Ok(contents) => contents,
            Err(e) => {
                warn!("failed to serialize notes: {}", e);
                return;
            }
        };

        match self.write_atomic(&contents) {
            Ok(()) => debug!("saved {} notes to {}", notes.len(), self.path.display()),
            Err(e) => warn!("failed to write {}: {}", self.path.display(), e),
        }
    }
}

/// In-memory document store.
///
/// Keeps the serialized text rather than the notes themselves so that
/// round-trips exercise the same encoding as the file store.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    document: RefCell<Option<String>>,
    reject_writes: Cell<bool>,
}

impl MemoryStorage {
    /// Empty store with no document
    pub fn new() -> Self {
        MemoryStorage::default()
    }

    /// Store pre-seeded with raw document text
    pub fn with_document(raw: impl Into<String>) -> Self {
        let storage = MemoryStorage::new();
        storage.document.replace(Some(raw.into()));
        storage
    }

    /// Current raw document text, if any was written
    pub fn document(&self) -> Option<String> {
        self.document.borrow().clone()
    }

    /// Make subsequent writes fail (as a full or disabled store would)
    pub fn set_reject_writes(&self, reject: bool) {
        self.reject_writes.set(reject);
    }
}

impl NoteStorage for MemoryStorage {
    fn load(&self) -> Vec<Note> {
        match self.document.borrow().as_deref() {
            Some(raw) => parse_document(raw).unwrap_or_default(),
            None => Vec::new(),
        }
    }

    fn save(&self, notes: &[Note]) {
        if self.reject_writes.get() {
            warn!("write rejected by memory storage");
            return;
        }

        match render_document(notes) {
            Ok(contents) => {
                self.document.replace(Some(contents));
            }
            Err(e) => warn!("failed to serialize notes: {}", e),
        }
    }
}
