//! The slice of the host's note model the bridge needs.

use tonemark_common::NoteTypeId;

/// A note type: its id, stylesheet and ordered field names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteType {
    pub id: NoteTypeId,
    pub css: String,
    pub field_names: Vec<String>,
}

/// A note being edited. `fields[i]` holds the value of `note_type.field_names[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub note_type: NoteType,
    pub fields: Vec<String>,
}

impl Note {
    /// A note with every field empty.
    pub fn new(note_type: NoteType) -> Self {
        let fields = vec![String::new(); note_type.field_names.len()];
        Self { note_type, fields }
    }

    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.note_type.field_names.iter().position(|f| f == name)
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.field_index(name)
            .and_then(|i| self.fields.get(i))
            .map(String::as_str)
    }
}

/// Derives annotated content (pinyin, tone marks, ...) when a field is left.
///
/// Implemented by the host; the bridge only decides when to call it.
pub trait FieldUpdater {
    /// Update fields derived from `field`. Returns `true` if the note changed.
    fn update_fields(&mut self, note: &mut Note, field: &str) -> bool;
}
