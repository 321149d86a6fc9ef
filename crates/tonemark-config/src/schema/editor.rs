//! Note editor integration settings.

use serde::{Deserialize, Serialize};
use tonemark_common::NoteTypeId;

/// Note editor integration settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Note types with Chinese support switched on at startup.
    pub enabled_note_types: Vec<NoteTypeId>,
    /// Selector matching each editable field root (legacy hosts).
    pub field_root_selector: String,
    /// Managed style sheet that receives tone rules (modern hosts).
    pub style_sheet: String,
    /// DOM id of the toggle button.
    pub button_id: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            enabled_note_types: Vec::new(),
            field_root_selector: "div.field".into(),
            style_sheet: "userBase".into(),
            button_id: "chineseSupport".into(),
        }
    }
}
