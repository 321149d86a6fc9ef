//! Editor bridge that carries a note type's tone colors into the editor's
//! web view.
//!
//! The editor renders each field inside its own shadow root, so the note
//! type's stylesheet never reaches it. This crate provides:
//! - Extraction of single-line `.toneN { ... }` rules from user CSS
//! - Script generation for legacy hosts (inline styles per field root)
//! - Script generation for modern hosts (rules appended to the managed sheet)
//! - Host version dispatch between the two
//! - Editor glue: the per-note-type toggle and focus-loss field updates

pub mod editor;
pub mod surface;
pub mod tone_bridge;

#[cfg(test)]
pub(crate) mod test_support;

pub use editor::{EditorBridge, FieldUpdater, FocusOutcome, Note, NoteType, Notifier};
pub use surface::ScriptSurface;
pub use tone_bridge::{
    extract, CompatibilityTier, Declarations, ExtractMode, Extraction, FieldRoots,
    InjectionCommand, Strategy, StylerOptions, ToneRule, ToneStyler,
};
