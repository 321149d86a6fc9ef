//! Escaping for text interpolated into generated scripts.
//!
//! Selectors, property names and values come from user CSS and config, so
//! every piece is escaped before it lands inside a single-quoted JavaScript
//! string literal.

/// Escape `value` for use inside a single-quoted JS string literal.
pub fn escape_js_single_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            _ => out.push(ch),
        }
    }
    out
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_unchanged() {
        assert_eq!(escape_js_single_quoted("color"), "color");
        assert_eq!(escape_js_single_quoted("#ff0000"), "#ff0000");
    }

    #[test]
    fn escapes_quotes_and_backslashes() {
        assert_eq!(
            escape_js_single_quoted("'Kai', serif"),
            "\\'Kai\\', serif"
        );
        assert_eq!(escape_js_single_quoted("a\\b"), "a\\\\b");
    }

    #[test]
    fn escapes_line_terminators() {
        assert_eq!(escape_js_single_quoted("a\nb\rc"), "a\\nb\\rc");
        assert_eq!(escape_js_single_quoted("x\u{2028}y"), "x\\u2028y");
    }

    #[test]
    fn cannot_break_out_of_literal() {
        let hostile = "red'); alert(1); ('";
        let escaped = escape_js_single_quoted(hostile);
        assert!(!escaped.contains("red')"));
        assert_eq!(escaped, "red\\'); alert(1); (\\'");
    }
}
