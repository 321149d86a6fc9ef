//! Script generation for modern hosts (2.1.54 and later).
//!
//! Relies on host internals that are not a stable API:
//! 1. `require("anki/ui").loaded` resolves once the editor UI is up.
//! 2. `require("anki/RichTextInput").instances` lists every rich-text field
//!    component registered so far.
//! 3. Each instance's `customStyles` promise yields a `styleMap` whose
//!    `userBase` entry wraps the `<style>` element used for user-facing base
//!    formatting (color, font family, font size). Tone rules go there.
//!
//! If any of these move, the script throws inside the web view and nothing
//! reports back.

use super::dispatch::{InjectionCommand, Strategy};
use super::rule::ToneRule;

/// Generate the style-sheet insertion script for `rules`.
///
/// `style_sheet` is the `styleMap` key of the target sheet (normally
/// `userBase`). Rules are appended in order, one `insertRule` call each.
pub fn inject_modern(rules: &[ToneRule], style_sheet: &str) -> InjectionCommand {
    let texts: Vec<&str> = rules.iter().map(ToneRule::css_text).collect();
    // Vec<&str> and &str always serialize
    let rules_json = serde_json::to_string(&texts).unwrap_or_else(|_| "[]".to_string());
    let sheet_json =
        serde_json::to_string(style_sheet).unwrap_or_else(|_| "\"userBase\"".to_string());

    let script = format!(
        r#"(function () {{
  var CSSRULES = {rules_json};
  require("anki/ui").loaded.then(() =>
    require("anki/RichTextInput").instances.forEach(inst =>
      inst.customStyles.then(styles => {{
        var sheet = styles.styleMap.get({sheet_json}).element.sheet;
        CSSRULES.forEach(rule =>
          sheet.insertRule(rule, sheet.cssRules.length)
        );
      }})
    )
  );
}})();"#
    );

    InjectionCommand::new(Strategy::Modern, script, rules.len())
}
