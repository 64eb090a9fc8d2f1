//! Edit command handler: change a note's caption.

use anyhow::{Result, bail};

use super::prompt::{Prompter, StdinPrompter};
use super::{find_note, store_error};
use crate::cli::EditArgs;
use crate::infra::KeyValueStore;
use crate::store::{NoteStore, UpdateResult};

pub fn handle_edit<K: KeyValueStore>(args: &EditArgs, store: &NoteStore<K>) -> Result<()> {
    handle_edit_impl(args, store, &mut StdinPrompter)
}

/// Internal implementation that accepts a generic prompter.
///
/// Without `--caption` the user is asked for a new one; an empty answer
/// leaves the note unchanged.
pub(crate) fn handle_edit_impl<K: KeyValueStore, P: Prompter>(
    args: &EditArgs,
    store: &NoteStore<K>,
    prompter: &mut P,
) -> Result<()> {
    let note = find_note(store, &args.note)?;

    let new_caption = match &args.caption {
        Some(caption) if caption.trim().is_empty() => bail!("caption cannot be empty"),
        Some(caption) => caption.trim().to_string(),
        None => match prompter.input("New caption:", note.caption())? {
            Some(caption) => caption.trim().to_string(),
            None => {
                println!("Caption unchanged.");
                return Ok(());
            }
        },
    };

    match store
        .update_caption(note.id(), &new_caption)
        .map_err(store_error)?
    {
        UpdateResult::Updated => {
            println!("Updated caption of [{}]", note.id().prefix());
            Ok(())
        }
        UpdateResult::NotFound => bail!("note not found: '{}'", note.id()),
    }
}
