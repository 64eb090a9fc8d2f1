//! Show command handler.

use anyhow::Result;

use super::find_note;
use crate::cli::ShowArgs;
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::infra::KeyValueStore;
use crate::store::NoteStore;

pub fn handle_show<K: KeyValueStore>(args: &ShowArgs, store: &NoteStore<K>) -> Result<()> {
    let note = find_note(store, &args.note)?;

    match args.format {
        OutputFormat::Human => {
            println!("# {}", note.caption());
            println!();
            println!("ID: {}", note.id());
            if let Some(created) = note.id().timestamp() {
                println!("Created: {}", created.format("%Y-%m-%d %H:%M"));
            }
            println!("Image: {}", note.uri());
        }
        OutputFormat::Json => {
            let output = Output::new(NoteListing::from(&note));
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Paths => println!("{}", note.uri()),
    }

    Ok(())
}
