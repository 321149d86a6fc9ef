//! Editor section validation (selectors and ids end up inside generated scripts).

use crate::schema::TonemarkConfig;

use super::helpers::validate_identifier;

pub(crate) fn validate_editor(errors: &mut Vec<String>, config: &TonemarkConfig) {
    let selector = config.editor.field_root_selector.trim();
    if selector.is_empty() {
        errors.push("editor.field_root_selector must not be empty".into());
    } else if selector.contains(['{', '}', ';', '\n']) {
        errors.push(format!(
            "editor.field_root_selector = '{selector}' is not a plain selector"
        ));
    }

    validate_identifier(errors, "editor.style_sheet", &config.editor.style_sheet);
    validate_identifier(errors, "editor.button_id", &config.editor.button_id);
}
