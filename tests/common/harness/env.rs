//! Isolated test environment with temp directory.

#![allow(dead_code)]

use super::{PjCommand, TestNote};
use photojournal::domain::Note;
use photojournal::infra::{FileKvStore, KeyValueStore};
use photojournal::store::{DOCUMENT_KEY, NoteStore};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment.
///
/// Layout inside the temp directory:
/// - `journal/` - the journal directory passed as `--dir`
/// - `photos/`  - source images for `add`
/// - `library/` - target for `save --to`
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    temp_dir: TempDir,
    journal_dir: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment with an empty journal.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let journal_dir = temp_dir.path().join("journal");
        std::fs::create_dir_all(temp_dir.path().join("photos"))
            .expect("Failed to create photos directory");
        Self {
            temp_dir,
            journal_dir,
        }
    }

    /// Returns the path to the journal directory.
    pub fn journal_dir(&self) -> &Path {
        &self.journal_dir
    }

    /// Returns the directory `save --to` should target.
    pub fn library_dir(&self) -> PathBuf {
        self.temp_dir.path().join("library")
    }

    /// Returns the path of the stored note document.
    pub fn document_path(&self) -> PathBuf {
        self.journal_dir.join(format!("{}.json", DOCUMENT_KEY))
    }

    /// Returns a note store over the journal directory.
    pub fn store(&self) -> NoteStore<FileKvStore> {
        NoteStore::new(FileKvStore::new(&self.journal_dir))
    }

    /// Writes a fake image into `photos/` and returns its path.
    pub fn image(&self, name: &str) -> PathBuf {
        let path = self.temp_dir.path().join("photos").join(name);
        std::fs::write(&path, format!("fake image {}", name)).expect("Failed to write image");
        path
    }

    /// Appends a test note directly through the store.
    pub fn add_note(&self, test_note: &TestNote) -> Note {
        let note = test_note.to_note();
        self.store()
            .append(note.clone())
            .expect("Failed to append test note");
        note
    }

    /// Returns all stored notes in stored order.
    pub fn notes(&self) -> Vec<Note> {
        self.store().load_all().expect("Failed to load notes")
    }

    /// Returns the raw stored document, if any.
    pub fn raw_document(&self) -> Option<Vec<u8>> {
        FileKvStore::new(&self.journal_dir)
            .get(DOCUMENT_KEY)
            .expect("Failed to read document")
    }

    /// Overwrites the stored document with raw bytes.
    pub fn write_document(&self, bytes: &[u8]) {
        FileKvStore::new(&self.journal_dir)
            .set(DOCUMENT_KEY, bytes)
            .expect("Failed to write document");
    }

    /// Creates a PjCommand configured for this test environment.
    pub fn cmd(&self) -> PjCommand {
        PjCommand::new().dir(&self.journal_dir)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_starts_without_document() {
        let env = TestEnv::new();
        assert!(env.raw_document().is_none());
        assert!(env.notes().is_empty());
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.journal_dir().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn test_env_add_note_persists() {
        let env = TestEnv::new();
        env.add_note(&TestNote::new("dawn").id("a"));
        env.add_note(&TestNote::new("noon").id("b"));

        let captions: Vec<_> = env.notes().iter().map(|n| n.caption().to_string()).collect();
        assert_eq!(captions, vec!["dawn", "noon"]);
        assert!(env.document_path().exists());
    }

    #[test]
    fn test_env_image_is_written() {
        let env = TestEnv::new();
        let path = env.image("x.jpg");
        assert!(path.is_file());
    }
}
