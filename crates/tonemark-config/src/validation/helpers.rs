//! Shared string-validation helpers.

/// Push an error if `value` is empty or contains characters outside
/// ASCII alphanumerics, `-` and `_`.
pub(crate) fn validate_identifier(errors: &mut Vec<String>, name: &str, value: &str) {
    if value.is_empty() {
        errors.push(format!("{name} must not be empty"));
        return;
    }
    if let Some(ch) = value
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() && *c != '-' && *c != '_')
    {
        errors.push(format!("{name} = '{value}' contains invalid character '{ch}'"));
    }
}
