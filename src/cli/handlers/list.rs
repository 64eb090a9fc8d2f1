//! List command handler.

use anyhow::Result;

use super::{load_notes, truncate_str};
use crate::cli::ListArgs;
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::infra::KeyValueStore;
use crate::store::NoteStore;

pub fn handle_list<K: KeyValueStore>(args: &ListArgs, store: &NoteStore<K>) -> Result<()> {
    // Newest first: reverse of stored order
    let mut notes = load_notes(store)?;
    notes.reverse();

    match args.format {
        OutputFormat::Human => {
            if notes.is_empty() {
                println!("No notes yet.");
            } else {
                println!("{:<10}  {:<40}  {}", "ID", "Caption", "Image");
                println!(
                    "{:<10}  {:<40}  {}",
                    "----------", "----------------------------------------", "-----"
                );

                for note in &notes {
                    let caption = truncate_str(note.caption(), 40);
                    println!("{:<10}  {:<40}  {}", note.id().prefix(), caption, note.uri());
                }

                println!();
                println!("{} note(s)", notes.len());
            }
        }
        OutputFormat::Json => {
            let listings: Vec<NoteListing> = notes.iter().map(NoteListing::from).collect();
            let output = Output::new(listings);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Paths => {
            for note in &notes {
                println!("{}", note.uri());
            }
        }
    }

    Ok(())
}
