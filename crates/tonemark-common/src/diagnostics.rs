//! Structured warnings collected while styling an editor.
//!
//! The tone pipeline never fails outright on bad user CSS or an unknown host
//! version. It records a [`Diagnostic`] instead, and the caller decides how to
//! surface it (a modal dialog in the editor, stderr in the CLI, an assertion
//! in tests).

use std::fmt;

/// What went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A `.tone` line that does not match the single-line rule pattern.
    MalformedToneRule,
    /// A line holding more than one rule; it cannot be reinserted verbatim.
    SeveralRulesOnLine,
    /// A tone rule whose declaration block has nothing to apply.
    EmptyDeclarations,
    /// The host version falls between the supported tiers.
    UnsupportedHostVersion,
    /// The host version string could not be parsed.
    InvalidHostVersion,
}

/// A single user-facing warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    /// 1-based stylesheet line, when the diagnostic came from extraction.
    pub line: Option<usize>,
    pub message: String,
}

impl Diagnostic {
    /// Creates a warning not tied to a stylesheet line.
    pub fn warning(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            line: None,
            message: message.into(),
        }
    }

    /// Creates a warning pointing at a stylesheet line.
    pub fn at_line(kind: DiagnosticKind, line: usize, message: impl Into<String>) -> Self {
        Self {
            line: Some(line),
            ..Self::warning(kind, message)
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "WARN: line {line}: {}", self.message),
            None => write!(f, "WARN: {}", self.message),
        }
    }
}

/// An ordered collector of diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    /// Number of diagnostics of the given kind.
    pub fn count_of(&self, kind: DiagnosticKind) -> usize {
        self.items.iter().filter(|d| d.kind == kind).count()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
