//! Script generation for legacy hosts (below 2.1.50).
//!
//! Each field lives in its own shadow root, so tone rules are flattened into
//! `jQuery(...).css(property, value)` calls scoped to every field root.

use super::dispatch::{InjectionCommand, Strategy};
use super::escape::escape_js_single_quoted;
use super::rule::ToneRule;

/// How the generated script finds editable field roots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldRoots {
    /// Iterate every element matching the selector (e.g. `div.field`).
    Matching(String),
    /// An explicit list of root selectors, one block of statements each.
    Listed(Vec<String>),
}

impl Default for FieldRoots {
    fn default() -> Self {
        FieldRoots::Matching("div.field".into())
    }
}

// =============================================================================
// SCRIPT GENERATION
// =============================================================================

/// Generate the inline-style script for `rules`.
pub fn inject_legacy(rules: &[ToneRule], field_roots: &FieldRoots) -> InjectionCommand {
    let script = match field_roots {
        FieldRoots::Matching(selector) => {
            let body = statements(rules, "this.shadowRoot");
            format!(
                "jQuery('{}').each(function () {{\n{body}}})",
                escape_js_single_quoted(selector)
            )
        }
        FieldRoots::Listed(roots) => {
            let mut body = String::new();
            for root in roots {
                let scope = format!(
                    "document.querySelector('{}').shadowRoot",
                    escape_js_single_quoted(root)
                );
                body.push_str(&statements(rules, &scope));
            }
            format!("(function () {{\n{body}}})();")
        }
    };

    InjectionCommand::new(Strategy::Legacy, script, rules.len())
}

/// One `.css()` statement per property of every rule, scoped to `scope`.
fn statements(rules: &[ToneRule], scope: &str) -> String {
    let mut js = String::new();
    for rule in rules {
        let selector = escape_js_single_quoted(&rule.class_selector());
        for (property, value) in rule.pairs() {
            js.push_str(&format!(
                "jQuery('{selector}', {scope}).css('{}', '{}');\n",
                escape_js_single_quoted(property),
                escape_js_single_quoted(value),
            ));
        }
    }
    js
}

// =============================================================================
// TESTS
// =============================================================================
