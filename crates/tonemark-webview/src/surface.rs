//! The rendering surface that generated scripts are sent to.

use tonemark_common::SurfaceError;
use tracing::warn;

/// Anything that can run a script inside the editor's web view.
///
/// Dispatch is one-way: no result value is read back, and the script may
/// keep running (or fail) after `eval` returns.
pub trait ScriptSurface {
    fn eval(&self, script: &str) -> Result<(), SurfaceError>;
}

#[cfg(feature = "wry")]
impl ScriptSurface for wry::WebView {
    fn eval(&self, script: &str) -> Result<(), SurfaceError> {
        self.evaluate_script(script)
            .map_err(|e| SurfaceError::Dispatch(e.to_string()))
    }
}

/// Send `script` and log (rather than return) any dispatch error.
pub(crate) fn dispatch(surface: &dyn ScriptSurface, script: &str) {
    if let Err(e) = surface.eval(script) {
        warn!(error = %e, "script dispatch to editor failed");
    }
}
