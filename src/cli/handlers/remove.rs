//! Remove command handler.

use anyhow::Result;

use super::prompt::{Prompter, StdinPrompter};
use super::{find_note, store_error};
use crate::cli::RemoveArgs;
use crate::infra::KeyValueStore;
use crate::store::{DeleteResult, NoteStore};

pub fn handle_remove<K: KeyValueStore>(args: &RemoveArgs, store: &NoteStore<K>) -> Result<()> {
    handle_remove_impl(args, store, &mut StdinPrompter)
}

/// Deletes the note after confirmation. The image file is left in place.
pub(crate) fn handle_remove_impl<K: KeyValueStore, P: Prompter>(
    args: &RemoveArgs,
    store: &NoteStore<K>,
    prompter: &mut P,
) -> Result<()> {
    let note = find_note(store, &args.note)?;

    if !args.yes {
        let question = format!("Delete note '{}' [{}]?", note.caption(), note.id().prefix());
        if !prompter.confirm(&question)? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    match store.delete_by_id(note.id()).map_err(store_error)? {
        DeleteResult::Deleted => println!("Deleted [{}]", note.id().prefix()),
        DeleteResult::NoSuchEntry => {
            println!("Note [{}] was already deleted", note.id().prefix())
        }
    }
    Ok(())
}
