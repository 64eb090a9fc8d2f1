//! Note resolution utilities.

use crate::domain::Note;

/// Shortest identifier that is tried as an ID prefix.
const MIN_PREFIX_LEN: usize = 4;

/// Result of resolving a note identifier.
#[derive(Debug)]
pub enum ResolveResult {
    /// Exactly one note matched.
    Unique(Note),
    /// Multiple notes matched (ambiguous).
    Ambiguous(Vec<Note>),
    /// No notes matched.
    NotFound,
}

/// Prints the candidates of an ambiguous identifier to help distinguish them.
pub(crate) fn print_ambiguous_notes(identifier: &str, notes: &[Note]) {
    eprintln!("Ambiguous: '{}' matches {} notes:", identifier, notes.len());
    for note in notes {
        eprintln!("  {} - {}", note.id(), note.caption());
        eprintln!("      {}", note.uri());
    }
    eprintln!();
    eprintln!("Use a longer ID prefix to specify which note you mean.");
}

/// Resolves a note identifier against a loaded note list.
///
/// Resolution order:
/// 1. Exact ID match
/// 2. ID prefix match (ASCII case-insensitive, at least 4 characters)
/// 3. Exact caption match
///
/// The first step that matches anything decides the result.
pub fn resolve_note(notes: &[Note], identifier: &str) -> ResolveResult {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return ResolveResult::NotFound;
    }

    if let Some(exact) = notes.iter().find(|n| n.id().as_str() == identifier) {
        return ResolveResult::Unique(exact.clone());
    }

    if identifier.chars().count() >= MIN_PREFIX_LEN {
        let lowered = identifier.to_ascii_lowercase();
        let by_prefix: Vec<Note> = notes
            .iter()
            .filter(|n| n.id().as_str().to_ascii_lowercase().starts_with(&lowered))
            .cloned()
            .collect();
        if !by_prefix.is_empty() {
            return from_candidates(by_prefix);
        }
    }

    let by_caption: Vec<Note> = notes
        .iter()
        .filter(|n| n.caption() == identifier)
        .cloned()
        .collect();
    from_candidates(by_caption)
}

fn from_candidates(mut candidates: Vec<Note>) -> ResolveResult {
    match candidates.len() {
        0 => ResolveResult::NotFound,
        1 => ResolveResult::Unique(candidates.remove(0)),
        _ => ResolveResult::Ambiguous(candidates),
    }
}
