//! Command handlers for the CLI.

mod add;
mod edit;
mod export;
mod list;
mod prompt;
mod remove;
mod reset;
mod resolve;
mod show;


use anyhow::{Result, anyhow, bail};
use std::path::{Path, PathBuf};

use crate::capture::IMAGES_DIR;
use crate::domain::Note;
use crate::infra::{FileKvStore, KeyValueStore};
use crate::store::{NoteStore, StoreError};

// Re-export public items
pub use add::{create_note, handle_add};
pub use edit::handle_edit;
pub use export::{handle_save, handle_share};
pub use list::handle_list;
pub use remove::handle_remove;
pub use reset::handle_reset;
pub use resolve::{ResolveResult, resolve_note};
pub use show::handle_show;

// Re-export for tests
#[cfg(test)]
pub(crate) use edit::handle_edit_impl;
#[cfg(test)]
pub(crate) use prompt::Prompter;
#[cfg(test)]
pub(crate) use remove::handle_remove_impl;
#[cfg(test)]
pub(crate) use reset::handle_reset_impl;

use resolve::print_ambiguous_notes;

// ===========================================
// Shared Utilities
// ===========================================

/// Opens the note store kept in a journal directory.
pub fn open_store(journal_dir: &Path) -> NoteStore<FileKvStore> {
    NoteStore::new(FileKvStore::new(journal_dir))
}

/// Returns the directory imported images are copied into.
pub fn images_dir(journal_dir: &Path) -> PathBuf {
    journal_dir.join(IMAGES_DIR)
}

/// Converts a store error into a user-facing error, with a recovery hint
/// for corrupt documents.
pub(crate) fn store_error(err: StoreError) -> anyhow::Error {
    match err {
        StoreError::Corrupt { .. } => {
            anyhow!(err).context("cannot read saved notes (run `pj reset` to start over)")
        }
        StoreError::Unavailable(_) => anyhow!(err).context("cannot access note storage"),
        StoreError::Encode { .. } => anyhow!(err).context("cannot save notes"),
    }
}

/// Loads all notes in stored order.
pub(crate) fn load_notes<K: KeyValueStore>(store: &NoteStore<K>) -> Result<Vec<Note>> {
    store.load_all().map_err(store_error)
}

/// Loads the note list and resolves `identifier` to exactly one note.
pub(crate) fn find_note<K: KeyValueStore>(store: &NoteStore<K>, identifier: &str) -> Result<Note> {
    let notes = load_notes(store)?;
    match resolve_note(&notes, identifier) {
        ResolveResult::Unique(note) => Ok(note),
        ResolveResult::Ambiguous(candidates) => {
            print_ambiguous_notes(identifier, &candidates);
            bail!("ambiguous note identifier");
        }
        ResolveResult::NotFound => bail!("note not found: '{}'", identifier),
    }
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
