//! Whole-document read-modify-write store for notes.

use super::{DeleteResult, StoreError, StoreResult, UpdateResult, decode, encode};
use crate::domain::{Note, NoteId};
use crate::infra::KeyValueStore;
use log::{debug, info, warn};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Key under which the note list document is stored.
pub const DOCUMENT_KEY: &str = "camera_notes";

/// The authoritative, insertion-ordered list of notes.
///
/// Every operation loads the whole document, computes the new list, and
/// writes the whole document back. A failed write leaves the previous
/// document in place. The load/compute/write section runs under an internal
/// mutex, so one `NoteStore` may be shared between threads without losing
/// updates. Separate `NoteStore` values (or processes) over the same storage
/// are not coordinated.
///
/// # Examples
///
/// ```
/// use photojournal::domain::Note;
/// use photojournal::infra::MemoryKvStore;
/// use photojournal::store::{NoteStore, UpdateResult};
///
/// let store = NoteStore::new(MemoryKvStore::new());
/// let note = Note::new("a".parse().unwrap(), "img://1", "dawn");
/// store.append(note).unwrap();
///
/// let id = "a".parse().unwrap();
/// assert_eq!(store.update_caption(&id, "sunrise").unwrap(), UpdateResult::Updated);
/// assert_eq!(store.load_all().unwrap()[0].caption(), "sunrise");
/// ```
#[derive(Debug)]
pub struct NoteStore<K> {
    kv: K,
    key: String,
    write_lock: Mutex<()>,
}

impl<K: KeyValueStore> NoteStore<K> {
    /// Creates a store over `kv` using the standard document key.
    pub fn new(kv: K) -> Self {
        Self::with_key(kv, DOCUMENT_KEY)
    }

    /// Creates a store over `kv` using a custom document key.
    pub fn with_key(kv: K, key: impl Into<String>) -> Self {
        Self {
            kv,
            key: key.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Returns the underlying key-value area.
    pub fn kv(&self) -> &K {
        &self.kv
    }

    /// Returns the document key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns all notes in stored (append) order.
    ///
    /// A missing document is an empty list.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Corrupt` if the stored bytes are not a note list.
    /// Returns `StoreError::Unavailable` if the storage cannot be read.
    pub fn load_all(&self) -> StoreResult<Vec<Note>> {
        let _guard = self.lock();
        self.snapshot()
    }

    /// Returns the note with `id`, if present.
    pub fn find(&self, id: &NoteId) -> StoreResult<Option<Note>> {
        let _guard = self.lock();
        Ok(self.snapshot()?.into_iter().find(|n| n.id() == id))
    }

    /// Appends `note` at the end of the list.
    ///
    /// The id is not checked for collisions; callers must generate ids with
    /// [`NoteId::new`] or an equally unique source.
    pub fn append(&self, note: Note) -> StoreResult<()> {
        let _guard = self.lock();
        let mut notes = self.snapshot()?;
        let id = note.id().clone();
        notes.push(note);
        self.commit(&notes)?;
        info!("appended note {} ({} total)", id, notes.len());
        Ok(())
    }

    /// Replaces the caption of the note with `id`.
    ///
    /// Returns `UpdateResult::NotFound` without writing anything when no note
    /// has that id.
    pub fn update_caption(&self, id: &NoteId, caption: &str) -> StoreResult<UpdateResult> {
        let _guard = self.lock();
        let mut notes = self.snapshot()?;

        let Some(note) = notes.iter_mut().find(|n| n.id() == id) else {
            debug!("update_caption: no note {}", id);
            return Ok(UpdateResult::NotFound);
        };
        note.set_caption(caption);

        self.commit(&notes)?;
        info!("updated caption of note {}", id);
        Ok(UpdateResult::Updated)
    }

    /// Removes the note with `id`.
    ///
    /// Deleting an absent id is not an error: it returns
    /// `DeleteResult::NoSuchEntry` and leaves the document untouched.
    pub fn delete_by_id(&self, id: &NoteId) -> StoreResult<DeleteResult> {
        let _guard = self.lock();
        let mut notes = self.snapshot()?;

        let before = notes.len();
        notes.retain(|n| n.id() != id);
        if notes.len() == before {
            debug!("delete_by_id: no note {}", id);
            return Ok(DeleteResult::NoSuchEntry);
        }

        self.commit(&notes)?;
        info!("deleted note {} ({} remaining)", id, notes.len());
        Ok(DeleteResult::Deleted)
    }

    /// Replaces the document with an empty list.
    ///
    /// This is the recovery path after `StoreError::Corrupt`; it does not
    /// read the existing document.
    pub fn reset(&self) -> StoreResult<()> {
        let _guard = self.lock();
        self.commit(&[])?;
        warn!("reset note document '{}' to an empty list", self.key);
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        // The guard protects no in-memory data, so a poisoned lock is safe to reuse.
        self.write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn snapshot(&self) -> StoreResult<Vec<Note>> {
        match self.kv.get(&self.key)? {
            None => Ok(Vec::new()),
            Some(bytes) => decode(&bytes).map_err(|source| StoreError::Corrupt {
                key: self.key.clone(),
                source,
            }),
        }
    }

    fn commit(&self, notes: &[Note]) -> StoreResult<()> {
        let bytes = encode(notes).map_err(|source| StoreError::Encode {
            key: self.key.clone(),
            source,
        })?;
        self.kv.set(&self.key, &bytes)?;
        Ok(())
    }
}
