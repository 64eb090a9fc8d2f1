//! Reset command handler: start over with an empty note list.

use anyhow::Result;

use super::prompt::{Prompter, StdinPrompter};
use super::store_error;
use crate::cli::ResetArgs;
use crate::infra::KeyValueStore;
use crate::store::{NoteStore, StoreError};

pub fn handle_reset<K: KeyValueStore>(args: &ResetArgs, store: &NoteStore<K>) -> Result<()> {
    handle_reset_impl(args, store, &mut StdinPrompter)
}

pub(crate) fn handle_reset_impl<K: KeyValueStore, P: Prompter>(
    args: &ResetArgs,
    store: &NoteStore<K>,
    prompter: &mut P,
) -> Result<()> {
    if !args.yes {
        let question = match store.load_all() {
            Ok(notes) => format!("Remove all {} saved note(s)?", notes.len()),
            Err(StoreError::Corrupt { .. }) => {
                "Saved notes are unreadable. Replace them with an empty list?".to_string()
            }
            Err(err) => return Err(store_error(err)),
        };
        if !prompter.confirm(&question)? {
            println!("Cancelled.");
            return Ok(());
        }
    }

    store.reset().map_err(store_error)?;
    println!("Note list reset.");
    Ok(())
}
