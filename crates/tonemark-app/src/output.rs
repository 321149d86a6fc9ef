//! Terminal stand-ins for the editor's web view and warning dialog.

use std::io::Write;

use tonemark_common::{Diagnostic, SurfaceError};
use tonemark_webview::{Notifier, ScriptSurface};

/// Writes each dispatched script to stdout.
pub struct StdoutSurface;

impl ScriptSurface for StdoutSurface {
    fn eval(&self, script: &str) -> Result<(), SurfaceError> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{script}").map_err(|e| SurfaceError::Dispatch(e.to_string()))
    }
}

/// Prints warnings to stderr.
pub struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn notify(&self, diagnostic: &Diagnostic) {
        eprintln!("{diagnostic}");
    }
}
