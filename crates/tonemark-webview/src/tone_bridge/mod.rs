//! Tone bridge: tone rule extraction and injection into the editor.
//!
//! Rules are rebuilt from the stylesheet on every refresh and never cached.
//! Dispatch is one-way; nothing is read back from the surface.

mod dispatch;
mod escape;
mod extract;
mod legacy;
mod modern;
mod rule;

pub use dispatch::{
    CompatibilityTier, InjectionCommand, Strategy, StylerOptions, ToneStyler,
    LEGACY_CEILING, MODERN_FLOOR,
};
pub use escape::escape_js_single_quoted;
pub use extract::{
    extract, ExtractMode, Extraction, SEVERAL_RULES_WARNING, SINGLE_LINE_WARNING,
};
pub use legacy::{inject_legacy, FieldRoots};
pub use modern::inject_modern;
pub use rule::{Declarations, ToneRule};
