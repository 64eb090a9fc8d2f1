//! Builder for test notes with sensible defaults.

#![allow(dead_code)]

use photojournal::domain::{Note, NoteId};

/// Builder for creating test notes.
///
/// Generates a ULID id and a fake image reference unless told otherwise.
#[derive(Debug)]
pub struct TestNote {
    id: NoteId,
    uri: String,
    caption: String,
}

impl TestNote {
    /// Creates a new test note with the given caption.
    pub fn new(caption: impl Into<String>) -> Self {
        let id = NoteId::new();
        Self {
            uri: format!("file:///photos/{}.jpg", id),
            id,
            caption: caption.into(),
        }
    }

    /// Sets an explicit ID for the note.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into().parse().expect("Invalid NoteId");
        self
    }

    /// Sets the image reference.
    pub fn uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = uri.into();
        self
    }

    /// Returns the ID.
    pub fn note_id(&self) -> &NoteId {
        &self.id
    }

    /// Converts this TestNote to a domain Note.
    pub fn to_note(&self) -> Note {
        Note::new(self.id.clone(), &self.uri, &self.caption)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_defaults() {
        let note = TestNote::new("dawn").to_note();
        assert_eq!(note.caption(), "dawn");
        assert_eq!(note.id().as_str().len(), 26);
        assert!(note.uri().starts_with("file:///photos/"));
    }

    #[test]
    fn test_note_overrides() {
        let note = TestNote::new("dawn").id("a").uri("img://1").to_note();
        assert_eq!(note, Note::new("a".parse().unwrap(), "img://1", "dawn"));
    }
}
