//! Recording doubles for the editor's external collaborators.

use std::cell::{Cell, RefCell};

use tonemark_common::{Diagnostic, SurfaceError};

use crate::editor::{FieldUpdater, Note, Notifier};
use crate::surface::ScriptSurface;

/// Records every script it is asked to run.
#[derive(Default)]
pub(crate) struct RecordingSurface {
    scripts: RefCell<Vec<String>>,
    attempts: Cell<usize>,
    fail: bool,
}

impl RecordingSurface {
    /// A surface whose every dispatch fails.
    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub(crate) fn scripts(&self) -> Vec<String> {
        self.scripts.borrow().clone()
    }

    pub(crate) fn attempts(&self) -> usize {
        self.attempts.get()
    }
}

impl ScriptSurface for RecordingSurface {
    fn eval(&self, script: &str) -> Result<(), SurfaceError> {
        self.attempts.set(self.attempts.get() + 1);
        if self.fail {
            return Err(SurfaceError::Dispatch("web view closed".into()));
        }
        self.scripts.borrow_mut().push(script.to_string());
        Ok(())
    }
}

/// Collects user-visible warnings.
#[derive(Default)]
pub(crate) struct RecordingNotifier {
    seen: RefCell<Vec<Diagnostic>>,
}

impl RecordingNotifier {
    pub(crate) fn seen(&self) -> Vec<Diagnostic> {
        self.seen.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, diagnostic: &Diagnostic) {
        self.seen.borrow_mut().push(diagnostic.clone());
    }
}

/// Uppercases the edited field into the next one and reports a change
/// when that altered the note.
#[derive(Default)]
pub(crate) struct CopyUpper {
    pub(crate) calls: Vec<String>,
}

impl FieldUpdater for CopyUpper {
    fn update_fields(&mut self, note: &mut Note, field: &str) -> bool {
        self.calls.push(field.to_string());
        let Some(idx) = note.field_index(field) else {
            return false;
        };
        let Some(next) = note.fields.get(idx + 1).cloned() else {
            return false;
        };
        let derived = note.fields[idx].to_uppercase();
        if derived == next {
            return false;
        }
        note.fields[idx + 1] = derived;
        true
    }
}
