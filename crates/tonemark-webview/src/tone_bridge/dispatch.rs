//! Host version dispatch.
//!
//! The host version is classified once into a [`CompatibilityTier`] and bound
//! into a [`ToneStyler`] for the rest of the process. Versions between the
//! two supported tiers get a styler that does nothing.

use tonemark_common::{Diagnostic, DiagnosticKind, Diagnostics, HostVersion};
use tracing::{debug, warn};

use super::extract::{extract, ExtractMode};
use super::legacy::{inject_legacy, FieldRoots};
use super::modern::inject_modern;
use crate::surface::{dispatch, ScriptSurface};

// =============================================================================
// VERSION TIERS
// =============================================================================

/// First version that is no longer legacy.
pub const LEGACY_CEILING: HostVersion = HostVersion::new(2, 1, 50);
/// First version with the modern editor internals.
pub const MODERN_FLOOR: HostVersion = HostVersion::new(2, 1, 54);

const UNSUPPORTED_WARNING: &str = "Chinese tone styling has not been implemented for your \
    current Anki version. Supported versions are Anki 2.1.49 as well as 2.1.54 and later.";

/// Which injection mechanism works on the running host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompatibilityTier {
    Legacy,
    Modern,
    Unsupported,
}

impl CompatibilityTier {
    /// Classify a parsed host version.
    pub fn classify(version: HostVersion) -> Self {
        if version < LEGACY_CEILING {
            CompatibilityTier::Legacy
        } else if version >= MODERN_FLOOR {
            CompatibilityTier::Modern
        } else {
            CompatibilityTier::Unsupported
        }
    }

    /// Classify a version string, reporting anything that leaves the styler
    /// inert. Produces at most one diagnostic.
    pub fn detect(version: &str) -> (Self, Diagnostics) {
        let mut diagnostics = Diagnostics::new();

        let tier = match HostVersion::parse(version) {
            Ok(parsed) => {
                let tier = Self::classify(parsed);
                if tier == CompatibilityTier::Unsupported {
                    warn!(version = %parsed, "tone styling unsupported on this host version");
                    diagnostics.push(Diagnostic::warning(
                        DiagnosticKind::UnsupportedHostVersion,
                        UNSUPPORTED_WARNING,
                    ));
                }
                tier
            }
            Err(e) => {
                warn!(error = %e, "tone styling disabled");
                diagnostics.push(Diagnostic::warning(
                    DiagnosticKind::InvalidHostVersion,
                    format!("{e}. {UNSUPPORTED_WARNING}"),
                ));
                CompatibilityTier::Unsupported
            }
        };

        debug!(version, ?tier, "host compatibility tier");
        (tier, diagnostics)
    }
}

// =============================================================================
// INJECTION COMMANDS
// =============================================================================

/// The strategy that produced an [`InjectionCommand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Legacy,
    Modern,
}

/// A generated script ready to be sent to the rendering surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectionCommand {
    pub strategy: Strategy,
    pub script: String,
    /// Number of tone rules carried by the script.
    pub rule_count: usize,
}

impl InjectionCommand {
    pub(crate) fn new(strategy: Strategy, script: String, rule_count: usize) -> Self {
        Self {
            strategy,
            script,
            rule_count,
        }
    }
}

// =============================================================================
// STYLER
// =============================================================================

/// Knobs shared by both strategies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylerOptions {
    /// Where legacy scripts find field roots.
    pub field_roots: FieldRoots,
    /// `styleMap` key of the sheet that modern scripts append to.
    pub style_sheet: String,
}

impl Default for StylerOptions {
    fn default() -> Self {
        Self {
            field_roots: FieldRoots::default(),
            style_sheet: "userBase".into(),
        }
    }
}

/// Tone styling strategy bound to one compatibility tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToneStyler {
    Legacy { field_roots: FieldRoots },
    Modern { style_sheet: String },
    Unsupported,
}

impl ToneStyler {
    pub fn new(tier: CompatibilityTier, options: StylerOptions) -> Self {
        match tier {
            CompatibilityTier::Legacy => ToneStyler::Legacy {
                field_roots: options.field_roots,
            },
            CompatibilityTier::Modern => ToneStyler::Modern {
                style_sheet: options.style_sheet,
            },
            CompatibilityTier::Unsupported => ToneStyler::Unsupported,
        }
    }

    /// Detect the tier from a version string and bind the matching strategy.
    ///
    /// The returned diagnostics are the one-time startup warning, if any.
    pub fn for_host(version: &str, options: StylerOptions) -> (Self, Diagnostics) {
        let (tier, diagnostics) = CompatibilityTier::detect(version);
        (Self::new(tier, options), diagnostics)
    }

    pub fn tier(&self) -> CompatibilityTier {
        match self {
            ToneStyler::Legacy { .. } => CompatibilityTier::Legacy,
            ToneStyler::Modern { .. } => CompatibilityTier::Modern,
            ToneStyler::Unsupported => CompatibilityTier::Unsupported,
        }
    }

    /// Extract tone rules from `stylesheet` and build the script for them.
    ///
    /// Returns `None` for an unsupported host; the stylesheet is not read.
    pub fn command(&self, stylesheet: &str) -> (Option<InjectionCommand>, Diagnostics) {
        match self {
            ToneStyler::Legacy { field_roots } => {
                let extraction = extract(stylesheet, ExtractMode::Legacy);
                let cmd = inject_legacy(&extraction.rules, field_roots);
                (Some(cmd), extraction.diagnostics)
            }
            ToneStyler::Modern { style_sheet } => {
                let extraction = extract(stylesheet, ExtractMode::Modern);
                let cmd = inject_modern(&extraction.rules, style_sheet);
                (Some(cmd), extraction.diagnostics)
            }
            ToneStyler::Unsupported => (None, Diagnostics::new()),
        }
    }

    /// Build the script for `stylesheet` and send it to `surface`.
    ///
    /// Fire-and-forget: dispatch failures are logged, never returned, and
    /// nothing orders this call against scripts from earlier refreshes.
    pub fn apply(&self, stylesheet: &str, surface: &dyn ScriptSurface) -> Diagnostics {
        let (command, diagnostics) = self.command(stylesheet);
        if let Some(command) = command {
            debug!(
                strategy = ?command.strategy,
                rules = command.rule_count,
                "dispatching tone styling"
            );
            dispatch(surface, &command.script);
        }
        diagnostics
    }
}

// =============================================================================
// TESTS
// =============================================================================
