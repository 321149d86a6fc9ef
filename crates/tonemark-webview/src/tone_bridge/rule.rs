//! Parsed tone rules.

/// The declaration block of a [`ToneRule`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declarations {
    /// Body text kept verbatim for reinsertion into a style sheet.
    Raw(String),
    /// Ordered `(property, value)` pairs for inline style assignment.
    Pairs(Vec<(String, String)>),
}

impl Declarations {
    pub fn is_empty(&self) -> bool {
        match self {
            Declarations::Raw(body) => body.trim().is_empty(),
            Declarations::Pairs(pairs) => pairs.is_empty(),
        }
    }
}

/// A single `.toneN { ... }` rule.
///
/// `selector` is the class name without the leading dot (`tone1`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToneRule {
    pub selector: String,
    pub declarations: Declarations,
    /// The rule exactly as it appeared in the stylesheet.
    source: String,
}

impl ToneRule {
    pub(crate) fn parsed(selector: &str, declarations: Declarations, source: &str) -> Self {
        Self {
            selector: selector.to_string(),
            declarations,
            source: source.to_string(),
        }
    }

    /// Build a rule from a raw body, e.g. `ToneRule::raw("tone1", "color: red;")`.
    pub fn raw(selector: impl Into<String>, body: impl Into<String>) -> Self {
        let selector = selector.into();
        let body = body.into();
        let source = format!(".{selector} {{ {body} }}");
        Self {
            selector,
            declarations: Declarations::Raw(body),
            source,
        }
    }

    /// Build a rule from property/value pairs.
    pub fn with_pairs<P, V>(
        selector: impl Into<String>,
        pairs: impl IntoIterator<Item = (P, V)>,
    ) -> Self
    where
        P: Into<String>,
        V: Into<String>,
    {
        let selector = selector.into();
        let pairs: Vec<(String, String)> = pairs
            .into_iter()
            .map(|(p, v)| (p.into(), v.into()))
            .collect();
        let body: String = pairs.iter().map(|(p, v)| format!("{p}: {v}; ")).collect();
        let source = format!(".{selector} {{ {body}}}");
        Self {
            selector,
            declarations: Declarations::Pairs(pairs),
            source,
        }
    }

    /// The CSS selector including the leading dot.
    pub fn class_selector(&self) -> String {
        format!(".{}", self.selector)
    }

    /// The full rule text, suitable for `CSSStyleSheet.insertRule`.
    pub fn css_text(&self) -> &str {
        &self.source
    }

    /// The raw body, if this rule was extracted in raw mode.
    pub fn raw_body(&self) -> Option<&str> {
        match &self.declarations {
            Declarations::Raw(body) => Some(body),
            Declarations::Pairs(_) => None,
        }
    }

    /// The property/value pairs, if this rule was extracted in pair mode.
    pub fn pairs(&self) -> &[(String, String)] {
        match &self.declarations {
            Declarations::Pairs(pairs) => pairs,
            Declarations::Raw(_) => &[],
        }
    }
}
