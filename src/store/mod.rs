//! Note store: the persisted, ordered list of journal notes.

mod document;
mod note_store;

pub use document::{DocumentError, decode, encode};
pub use note_store::{DOCUMENT_KEY, NoteStore};

use crate::infra::KvError;
use thiserror::Error;

/// Errors surfaced by note store operations.
///
/// The store never retries or repairs; the caller decides whether to alert
/// the user, try again, or [`NoteStore::reset`] the document.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the key-value area failed.
    #[error("note storage is unavailable: {0}")]
    Unavailable(#[from] KvError),

    /// The stored document does not decode to a note list.
    #[error("stored notes under '{key}' are corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: DocumentError,
    },

    /// The note list could not be serialized; nothing was written.
    #[error("failed to encode notes for '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for note store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Outcome of [`NoteStore::update_caption`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateResult {
    Updated,
    /// No note has the given id; nothing was written.
    NotFound,
}

/// Outcome of [`NoteStore::delete_by_id`].
///
/// Both outcomes leave storage correct; the distinction only lets the caller
/// choose what to tell the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteResult {
    Deleted,
    NoSuchEntry,
}
