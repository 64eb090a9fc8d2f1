//! Codec for the persisted note list document.
//!
//! The document is a bare JSON array of `{"id", "uri", "caption"}` objects in
//! insertion order. There is no version field; the layout matches what the
//! mobile app wrote under the same key.

use crate::domain::{Note, NoteId};
use std::collections::HashSet;
use thiserror::Error;

/// Reasons a stored document cannot be decoded.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("document is not a list of notes: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("document contains duplicate note id '{0}'")]
    DuplicateId(NoteId),
}

/// Decodes a stored document into notes, preserving order.
///
/// Anything other than an array of well-formed notes with distinct ids is an
/// error; nothing is dropped or defaulted.
pub fn decode(bytes: &[u8]) -> Result<Vec<Note>, DocumentError> {
    let notes: Vec<Note> = serde_json::from_slice(bytes)?;

    let mut seen = HashSet::with_capacity(notes.len());
    for note in &notes {
        if !seen.insert(note.id()) {
            return Err(DocumentError::DuplicateId(note.id().clone()));
        }
    }

    Ok(notes)
}

/// Encodes notes as a compact JSON array.
pub fn encode(notes: &[Note]) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(notes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn note(id: &str, uri: &str, caption: &str) -> Note {
        Note::new(id.parse().unwrap(), uri, caption)
    }

    #[test]
    fn encode_empty_list() {
        assert_eq!(encode(&[]).unwrap(), b"[]".to_vec());
    }

    #[test]
    fn encode_matches_stored_layout() {
        let bytes = encode(&[note("a", "img://1", "dawn")]).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            r#"[{"id":"a","uri":"img://1","caption":"dawn"}]"#
        );
    }

    #[test]
    fn round_trip_preserves_order_and_content() {
        let notes = vec![
            note("c", "file:///tmp/3.jpg", "third"),
            note("a", "file:///tmp/1.jpg", ""),
            note("b", "file:///tmp/2.jpg", "ảnh \"quoted\"\nline two 📷"),
        ];
        assert_eq!(decode(&encode(&notes).unwrap()).unwrap(), notes);
    }

    #[test]
    fn decode_accepts_whitespace_and_field_order() {
        let doc = br#"
            [ { "caption": "dawn", "id": "a", "uri": "img://1" } ]
        "#;
        assert_eq!(decode(doc).unwrap(), vec![note("a", "img://1", "dawn")]);
    }

    #[test]
    fn decode_rejects_non_list_values() {
        for doc in [&b"{}"[..], b"null", b"42", b"\"camera_notes\"", b"true"] {
            assert!(
                matches!(decode(doc), Err(DocumentError::Malformed(_))),
                "{:?} should be malformed",
                String::from_utf8_lossy(doc)
            );
        }
    }

    #[test]
    fn decode_rejects_truncated_json() {
        assert!(matches!(
            decode(br#"[{"id":"a","uri":"img://1""#),
            Err(DocumentError::Malformed(_))
        ));
    }

    #[test]
    fn decode_rejects_invalid_utf8() {
        assert!(decode(&[0x5b, 0xff, 0xfe, 0x5d]).is_err());
    }

    #[test]
    fn decode_rejects_wrong_element_shape() {
        assert!(decode(br#"[1, 2, 3]"#).is_err());
        assert!(decode(br#"[{"id":"a"}]"#).is_err());
        assert!(decode(br#"[{"id":"","uri":"x","caption":"y"}]"#).is_err());
    }

    #[test]
    fn decode_rejects_duplicate_ids() {
        let doc = br#"[
            {"id":"a","uri":"img://1","caption":"one"},
            {"id":"a","uri":"img://2","caption":"two"}
        ]"#;
        match decode(doc) {
            Err(DocumentError::DuplicateId(id)) => assert_eq!(id.as_str(), "a"),
            other => panic!("expected DuplicateId, got {:?}", other),
        }
    }
}
