//! Note struct: one captured image plus its caption.

use crate::domain::NoteId;
use serde::{Deserialize, Serialize};

/// A journal note.
///
/// The persisted shape is exactly `{"id", "uri", "caption"}`. Any other field
/// in a stored object is rejected when the document is decoded.
///
/// `uri` is an opaque image reference (a filesystem path or URI) handed back
/// by a capture service. The note never opens or validates it.
///
/// # Examples
///
/// ```
/// use photojournal::domain::{Note, NoteId};
///
/// let note = Note::new(NoteId::new(), "/photos/dawn.jpg", "dawn");
/// assert_eq!(note.caption(), "dawn");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Note {
    id: NoteId,
    uri: String,
    caption: String,
}

impl Note {
    /// Creates a note from its three fields.
    pub fn new(id: NoteId, uri: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            id,
            uri: uri.into(),
            caption: caption.into(),
        }
    }

    /// Returns the note's unique identifier.
    pub fn id(&self) -> &NoteId {
        &self.id
    }

    /// Returns the image reference.
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Returns the caption.
    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Replaces the caption.
    pub fn set_caption(&mut self, caption: impl Into<String>) {
        self.caption = caption.into();
    }
}
