//! Tone rule extraction from note type stylesheets.
//!
//! Only single-line rules are understood: `.tone1 { color: red; }`. Anything
//! that looks like a tone rule but spans lines or nests braces is reported
//! and skipped.

use regex::Regex;
use std::sync::LazyLock;
use tonemark_common::{Diagnostic, DiagnosticKind, Diagnostics};
use tracing::{debug, warn};

use super::rule::{Declarations, ToneRule};

// =============================================================================
// PATTERN AND MESSAGES
// =============================================================================

/// A dot-prefixed tone class, optional whitespace, and a brace-delimited body.
static TONE_RULE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(tone\d+)\s*\{([^}]*)\}").unwrap());

/// Shown when a candidate line does not match the single-line rule pattern.
pub const SINGLE_LINE_WARNING: &str =
    "could not parse CSS tone rule. Currently, tone CSS rules need to be one liners.";

/// Shown when a modern-host candidate line carries more than one rule.
pub const SEVERAL_RULES_WARNING: &str =
    "could not parse CSS tone rule. Put each tone CSS rule on its own line.";

/// How candidate lines are found and how declaration bodies are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractMode {
    /// Lines must start with `.tone`; bodies split into property/value pairs.
    Legacy,
    /// Lines containing `.tone` anywhere; bodies kept verbatim.
    Modern,
}

impl ExtractMode {
    fn is_candidate(self, line: &str) -> bool {
        match self {
            ExtractMode::Legacy => line.starts_with(".tone"),
            ExtractMode::Modern => line.contains(".tone"),
        }
    }
}

/// Result of [`extract`]: accepted rules in stylesheet order plus warnings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub rules: Vec<ToneRule>,
    pub diagnostics: Diagnostics,
}

// =============================================================================
// EXTRACTION
// =============================================================================

/// Extract tone rules from stylesheet text.
///
/// Never fails: malformed candidates become diagnostics and extraction
/// carries on with the next line.
pub fn extract(stylesheet: &str, mode: ExtractMode) -> Extraction {
    let mut out = Extraction::default();

    for (idx, line) in stylesheet.split('\n').enumerate() {
        if !mode.is_candidate(line) {
            continue;
        }
        let line_no = idx + 1;

        let Some(caps) = TONE_RULE_RE.captures(line) else {
            warn!(line = line_no, text = line, "tone rule rejected: not a one-liner");
            out.diagnostics.push(Diagnostic::at_line(
                DiagnosticKind::MalformedToneRule,
                line_no,
                SINGLE_LINE_WARNING,
            ));
            continue;
        };

        // Modern hosts reinsert the whole line, which `insertRule` rejects
        // when it holds more than one rule.
        let rule_end = caps.get(0).map_or(line.len(), |m| m.end());
        if mode == ExtractMode::Modern && line[rule_end..].contains('{') {
            warn!(line = line_no, text = line, "tone rule rejected: several rules on one line");
            out.diagnostics.push(Diagnostic::at_line(
                DiagnosticKind::SeveralRulesOnLine,
                line_no,
                SEVERAL_RULES_WARNING,
            ));
            continue;
        }

        let selector = &caps[1];
        let body = &caps[2];
        let declarations = match mode {
            ExtractMode::Legacy => Declarations::Pairs(split_declarations(body)),
            ExtractMode::Modern => Declarations::Raw(body.trim().to_string()),
        };

        if declarations.is_empty() {
            warn!(line = line_no, selector, "tone rule rejected: no declarations");
            out.diagnostics.push(Diagnostic::at_line(
                DiagnosticKind::EmptyDeclarations,
                line_no,
                format!("CSS tone rule .{selector} has no declarations."),
            ));
            continue;
        }

        // Modern hosts get the whole line so compound selectors such as
        // `.nightMode .tone1` keep their scope.
        let source = match mode {
            ExtractMode::Legacy => caps.get(0).map_or("", |m| m.as_str()),
            ExtractMode::Modern => line.trim(),
        };
        out.rules.push(ToneRule::parsed(selector, declarations, source));
    }

    debug!(
        rules = out.rules.len(),
        warnings = out.diagnostics.len(),
        ?mode,
        "extracted tone rules"
    );
    out
}

// =============================================================================
// HELPERS
// =============================================================================

/// Split `color: red; font-weight:bold` into trimmed pairs.
///
/// Segments without a `:` are dropped; values may themselves contain `:`.
fn split_declarations(body: &str) -> Vec<(String, String)> {
    body.split(';')
        .filter_map(|part| part.split_once(':'))
        .map(|(property, value)| (property.trim().to_string(), value.trim().to_string()))
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
