//! Editor integration: the per-note-type toggle, refresh-time tone styling
//! and focus-loss field updates.
//!
//! Widget construction and persistence of the enabled set belong to the
//! host. The bridge keeps the set in memory and exposes it.

mod note;
pub mod scripts;

pub use note::{FieldUpdater, Note, NoteType};

use std::collections::BTreeSet;

use tonemark_common::{Diagnostic, Diagnostics, NoteTypeId};
use tonemark_config::EditorConfig;
use tracing::{debug, warn};

use crate::surface::{dispatch, ScriptSurface};
use crate::tone_bridge::{StylerOptions, ToneStyler};

/// User-visible warning channel (a modal dialog in the editor).
pub trait Notifier {
    fn notify(&self, diagnostic: &Diagnostic);
}

/// What the host should do after a field lost focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusOutcome {
    /// Nothing changed; keep editing.
    Unchanged,
    /// The note changed: reload every open editor, focusing `focus_to`.
    Reload { focus_to: usize },
}

/// Connects one host process's editors to the tone pipeline.
pub struct EditorBridge {
    styler: ToneStyler,
    enabled: BTreeSet<NoteTypeId>,
    button_id: String,
}

impl EditorBridge {
    pub fn new(
        styler: ToneStyler,
        enabled: impl IntoIterator<Item = NoteTypeId>,
        button_id: impl Into<String>,
    ) -> Self {
        Self {
            styler,
            enabled: enabled.into_iter().collect(),
            button_id: button_id.into(),
        }
    }

    /// Build a bridge for `host_version`, reporting the startup warning for
    /// an unsupported host through `notifier`.
    pub fn start(
        host_version: &str,
        options: StylerOptions,
        enabled: impl IntoIterator<Item = NoteTypeId>,
        button_id: impl Into<String>,
        notifier: &dyn Notifier,
    ) -> Self {
        let (styler, diagnostics) = ToneStyler::for_host(host_version, options);
        report(notifier, diagnostics);
        Self::new(styler, enabled, button_id)
    }

    /// Like [`EditorBridge::start`], seeding the enabled note types and the
    /// button id from the `[editor]` config section.
    pub fn from_config(
        host_version: &str,
        editor: &EditorConfig,
        options: StylerOptions,
        notifier: &dyn Notifier,
    ) -> Self {
        Self::start(
            host_version,
            options,
            editor.enabled_note_types.iter().copied(),
            editor.button_id.clone(),
            notifier,
        )
    }

    pub fn styler(&self) -> &ToneStyler {
        &self.styler
    }

    /// Script to add to the editor page head.
    pub fn init_script(&self) -> String {
        scripts::button_init_script(&self.button_id)
    }

    pub fn is_enabled(&self, note_type: NoteTypeId) -> bool {
        self.enabled.contains(&note_type)
    }

    /// Currently enabled note types, for the host to persist.
    pub fn enabled_note_types(&self) -> impl Iterator<Item = NoteTypeId> + '_ {
        self.enabled.iter().copied()
    }

    /// Flip `note_type` and update the button. Returns the new state.
    pub fn toggle(&mut self, note_type: NoteTypeId, surface: &dyn ScriptSurface) -> bool {
        let enabled = if self.enabled.remove(&note_type) {
            false
        } else {
            self.enabled.insert(note_type);
            true
        };
        debug!(%note_type, enabled, "toggled Chinese support");
        dispatch(surface, scripts::button_state_js(enabled));
        enabled
    }

    /// Refresh hook for a freshly loaded note: sync the button, then carry the
    /// note type's tone rules into the editor.
    pub fn load_note(&self, note: &Note, surface: &dyn ScriptSurface, notifier: &dyn Notifier) {
        let enabled = self.is_enabled(note.note_type.id);
        dispatch(surface, scripts::button_state_js(enabled));

        let diagnostics = self.styler.apply(&note.note_type.css, surface);
        report(notifier, diagnostics);
    }

    /// Focus-loss hook for field `index` of `note`.
    pub fn focus_lost(
        &self,
        note: &mut Note,
        index: usize,
        updater: &mut dyn FieldUpdater,
    ) -> FocusOutcome {
        if !self.is_enabled(note.note_type.id) {
            return FocusOutcome::Unchanged;
        }

        let field_count = note.note_type.field_names.len();
        let Some(field) = note.note_type.field_names.get(index).cloned() else {
            warn!(index, field_count, "focus lost on a field the note type does not have");
            return FocusOutcome::Unchanged;
        };

        if updater.update_fields(note, &field) {
            let focus_to = (index + 1) % field_count;
            debug!(field = %field, focus_to, "note updated, reloading editors");
            FocusOutcome::Reload { focus_to }
        } else {
            FocusOutcome::Unchanged
        }
    }
}

fn report(notifier: &dyn Notifier, diagnostics: Diagnostics) {
    for diagnostic in diagnostics {
        notifier.notify(&diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{CopyUpper, RecordingNotifier, RecordingSurface};
    use crate::tone_bridge::CompatibilityTier;
    use tonemark_common::DiagnosticKind;

    const CHINESE: NoteTypeId = NoteTypeId(1001);
    const BASIC: NoteTypeId = NoteTypeId(2002);

    fn note(id: NoteTypeId, css: &str) -> Note {
        Note::new(NoteType {
            id,
            css: css.to_string(),
            field_names: vec!["Hanzi".into(), "Reading".into(), "Meaning".into()],
        })
    }

    fn modern_bridge(enabled: &[NoteTypeId]) -> EditorBridge {
        EditorBridge::new(
            ToneStyler::new(CompatibilityTier::Modern, StylerOptions::default()),
            enabled.iter().copied(),
            "chineseSupport",
        )
    }

    #[test]
    fn toggle_flips_and_updates_button() {
        let mut bridge = modern_bridge(&[]);
        let surface = RecordingSurface::default();

        assert!(bridge.toggle(CHINESE, &surface));
        assert!(bridge.is_enabled(CHINESE));
        assert!(!bridge.toggle(CHINESE, &surface));
        assert!(!bridge.is_enabled(CHINESE));

        assert_eq!(
            surface.scripts(),
            vec!["tonemark_activateButton()", "tonemark_deactivateButton()"]
        );
    }

    #[test]
    fn enabled_set_is_exposed_for_persistence() {
        let mut bridge = modern_bridge(&[BASIC]);
        bridge.toggle(CHINESE, &RecordingSurface::default());
        let ids: Vec<_> = bridge.enabled_note_types().collect();
        assert_eq!(ids, vec![CHINESE, BASIC]);
    }

    #[test]
    fn load_note_syncs_button_then_styles() {
        let bridge = modern_bridge(&[CHINESE]);
        let surface = RecordingSurface::default();
        let notifier = RecordingNotifier::default();

        bridge.load_note(&note(CHINESE, ".tone1 { color: red; }"), &surface, &notifier);

        let scripts = surface.scripts();
        assert_eq!(scripts.len(), 2);
        assert_eq!(scripts[0], "tonemark_activateButton()");
        assert!(scripts[1].contains(".tone1 { color: red; }"));
        assert!(notifier.seen().is_empty());
    }

    #[test]
    fn load_note_on_disabled_type_deactivates_button() {
        let bridge = modern_bridge(&[CHINESE]);
        let surface = RecordingSurface::default();
        bridge.load_note(&note(BASIC, ""), &surface, &RecordingNotifier::default());
        assert_eq!(surface.scripts()[0], "tonemark_deactivateButton()");
    }

    #[test]
    fn load_note_forwards_rule_warnings() {
        let bridge = modern_bridge(&[]);
        let notifier = RecordingNotifier::default();
        let css = ".tone1 { color: red; }\n.tone3 { color: green\n";
        bridge.load_note(&note(CHINESE, css), &RecordingSurface::default(), &notifier);

        let seen = notifier.seen();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].kind, DiagnosticKind::MalformedToneRule);
        assert_eq!(seen[0].line, Some(2));
    }

    #[test]
    fn start_warns_once_for_unsupported_host() {
        let notifier = RecordingNotifier::default();
        let bridge = EditorBridge::start(
            "2.1.51",
            StylerOptions::default(),
            [CHINESE],
            "chineseSupport",
            &notifier,
        );
        assert_eq!(notifier.seen().len(), 1);
        assert_eq!(bridge.styler(), &ToneStyler::Unsupported);

        // Refreshes afterwards stay silent and only sync the button.
        let surface = RecordingSurface::default();
        bridge.load_note(&note(CHINESE, ".tone1 { color: red; }"), &surface, &notifier);
        assert_eq!(notifier.seen().len(), 1);
        assert_eq!(surface.scripts(), vec!["tonemark_activateButton()"]);
    }

    #[test]
    fn from_config_seeds_enabled_types_and_button() {
        let toml = "[editor]\nenabled_note_types = [1001]\nbutton_id = \"toneToggle\"\n";
        let config = tonemark_config::toml_loader::load_from_str(toml).unwrap();
        let notifier = RecordingNotifier::default();

        let bridge = EditorBridge::from_config(
            "2.1.54",
            &config.editor,
            StylerOptions::default(),
            &notifier,
        );

        assert!(bridge.is_enabled(CHINESE));
        assert!(!bridge.is_enabled(BASIC));
        assert!(bridge.init_script().contains("getElementById('toneToggle')"));
        assert_eq!(bridge.styler().tier(), CompatibilityTier::Modern);
        assert!(notifier.seen().is_empty());
    }

    #[test]
    fn focus_lost_ignores_disabled_note_types() {
        let bridge = modern_bridge(&[]);
        let mut note = note(CHINESE, "");
        note.fields[0] = "ni hao".into();
        let mut updater = CopyUpper::default();

        assert_eq!(bridge.focus_lost(&mut note, 0, &mut updater), FocusOutcome::Unchanged);
        assert!(updater.calls.is_empty());
    }

    #[test]
    fn focus_lost_reloads_on_change() {
        let bridge = modern_bridge(&[CHINESE]);
        let mut note = note(CHINESE, "");
        note.fields[0] = "ni hao".into();
        let mut updater = CopyUpper::default();

        let outcome = bridge.focus_lost(&mut note, 0, &mut updater);
        assert_eq!(outcome, FocusOutcome::Reload { focus_to: 1 });
        assert_eq!(updater.calls, vec!["Hanzi"]);
        assert_eq!(note.field("Reading"), Some("NI HAO"));

        // Second pass derives the same value: nothing to reload.
        let outcome = bridge.focus_lost(&mut note, 0, &mut updater);
        assert_eq!(outcome, FocusOutcome::Unchanged);
    }

    #[test]
    fn focus_wraps_to_first_field() {
        struct AlwaysChanged;
        impl FieldUpdater for AlwaysChanged {
            fn update_fields(&mut self, _note: &mut Note, _field: &str) -> bool {
                true
            }
        }

        let bridge = modern_bridge(&[CHINESE]);
        let mut note = note(CHINESE, "");
        let outcome = bridge.focus_lost(&mut note, 2, &mut AlwaysChanged);
        assert_eq!(outcome, FocusOutcome::Reload { focus_to: 0 });
    }

    #[test]
    fn focus_lost_out_of_range_is_ignored() {
        let bridge = modern_bridge(&[CHINESE]);
        let mut note = note(CHINESE, "");
        let mut updater = CopyUpper::default();
        assert_eq!(bridge.focus_lost(&mut note, 9, &mut updater), FocusOutcome::Unchanged);
        assert!(updater.calls.is_empty());
    }

    #[test]
    fn init_script_uses_button_id() {
        let bridge = modern_bridge(&[]);
        assert!(bridge.init_script().contains("getElementById('chineseSupport')"));
    }
}
