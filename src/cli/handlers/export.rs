//! Save and share command handlers.

use anyhow::{Context, Result};

use super::find_note;
use crate::cli::{SaveArgs, ShareArgs};
use crate::export::ExportService;
use crate::infra::KeyValueStore;
use crate::store::NoteStore;

/// Copies a note's image into the media library.
pub fn handle_save<K: KeyValueStore, E: ExportService>(
    args: &SaveArgs,
    store: &NoteStore<K>,
    exporter: &E,
) -> Result<()> {
    let note = find_note(store, &args.note)?;
    let dest = exporter
        .copy_to_library(note.uri())
        .context("could not save image")?;

    println!("Saved image to library: {}", dest.display());
    Ok(())
}

/// Hands a note's image to the share command.
pub fn handle_share<K: KeyValueStore, E: ExportService>(
    args: &ShareArgs,
    store: &NoteStore<K>,
    exporter: &E,
) -> Result<()> {
    let note = find_note(store, &args.note)?;
    exporter
        .share(note.uri())
        .context("could not share image")?;

    println!("Shared image: {}", note.uri());
    Ok(())
}
