//! Scripts that drive the toggle button inside the editor web view.

use crate::tone_bridge::escape_js_single_quoted;

/// Call that marks the toggle button active.
pub const ACTIVATE_BUTTON_JS: &str = "tonemark_activateButton()";
/// Call that marks the toggle button inactive.
pub const DEACTIVATE_BUTTON_JS: &str = "tonemark_deactivateButton()";

/// Page-load script defining the activate/deactivate helpers for the button
/// with DOM id `button_id`.
pub fn button_init_script(button_id: &str) -> String {
    let id = escape_js_single_quoted(button_id);
    format!(
        r#"function tonemark_activateButton() {{
    var button = document.getElementById('{id}');
    if (button) {{ button.classList.add('active'); }}
}}
function tonemark_deactivateButton() {{
    var button = document.getElementById('{id}');
    if (button) {{ button.classList.remove('active'); }}
}}
"#
    )
}

/// The call matching an enabled/disabled state.
pub fn button_state_js(enabled: bool) -> &'static str {
    if enabled {
        ACTIVATE_BUTTON_JS
    } else {
        DEACTIVATE_BUTTON_JS
    }
}
