//! Host section validation.

use crate::schema::TonemarkConfig;
use tonemark_common::HostVersion;

/// The version override must parse as a dotted numeric version.
pub(crate) fn validate_host(errors: &mut Vec<String>, config: &TonemarkConfig) {
    if let Some(version) = &config.host.version {
        if let Err(e) = HostVersion::parse(version) {
            errors.push(format!("host.version: {e}"));
        }
    }
}
