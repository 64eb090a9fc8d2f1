//! Add command handler: capture an image and save a new note.

use anyhow::{Context, Result, bail};
use std::path::Path;

use super::{images_dir, store_error};
use crate::capture::{CaptureService, FileImport, ImportMode};
use crate::cli::AddArgs;
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::domain::{Note, NoteId};
use crate::infra::KeyValueStore;
use crate::store::NoteStore;

/// Builds a new note with a fresh id (pure function, no I/O).
///
/// # Errors
///
/// Returns an error if the caption is empty or whitespace-only.
pub fn create_note(image_reference: &str, caption: &str) -> Result<Note> {
    let caption = caption.trim();
    if caption.is_empty() {
        bail!("caption cannot be empty");
    }
    Ok(Note::new(NoteId::new(), image_reference, caption))
}

pub fn handle_add<K: KeyValueStore>(
    args: &AddArgs,
    store: &NoteStore<K>,
    journal_dir: &Path,
) -> Result<()> {
    // Reject a blank caption before copying anything
    if args.caption.trim().is_empty() {
        bail!("caption cannot be empty");
    }

    let mode = if args.link {
        ImportMode::Link
    } else {
        ImportMode::Copy
    };
    let capture = FileImport::new(&args.image, images_dir(journal_dir), mode);
    let reference = capture
        .capture()
        .with_context(|| format!("failed to capture {}", args.image.display()))?;

    let note = create_note(&reference, &args.caption)?;
    store
        .append(note.clone())
        .map_err(store_error)
        .context("failed to save note")?;

    match args.format {
        OutputFormat::Human => {
            println!("Saved note [{}]", note.id().prefix());
            println!("  {}", note.uri());
        }
        OutputFormat::Json => {
            let output = Output::new(NoteListing::from(&note));
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Paths => println!("{}", note.uri()),
    }

    Ok(())
}
