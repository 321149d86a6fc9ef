pub mod diagnostics;
pub mod errors;
pub mod types;

pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
pub use errors::{ConfigError, StyleError, SurfaceError, TonemarkError};
pub use types::{HostVersion, NoteTypeId};

pub type Result<T> = std::result::Result<T, TonemarkError>;
