//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# tonemark configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[host]
# Host version override. Tone styling needs either < 2.1.50 or >= 2.1.54.
# version = "2.1.54"

[editor]
# Note type ids with Chinese support enabled at startup.
enabled_note_types = []
# field_root_selector = "div.field"   # legacy hosts: one element per field
# style_sheet = "userBase"            # modern hosts: managed style sheet key
# button_id = "chineseSupport"

[logging]
# level = "INFO"          # DEBUG, INFO, WARNING, ERROR
"##
}
