use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::StyleError;

/// Identifier of a note type in the host collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteTypeId(pub i64);

impl fmt::Display for NoteTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Host application version as an ordered `(major, minor, patch)` triple.
///
/// Missing trailing components default to zero, so `"23.10"` parses as
/// `(23, 10, 0)`. Comparison is lexicographic on the triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HostVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl HostVersion {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse a dot-separated numeric version string.
    pub fn parse(s: &str) -> Result<Self, StyleError> {
        let trimmed = s.trim();
        let invalid = || StyleError::InvalidVersion(s.to_string());

        if trimmed.is_empty() {
            return Err(invalid());
        }

        let mut parts = [0u32; 3];
        let mut count = 0;
        for component in trimmed.split('.') {
            if count == parts.len() {
                return Err(invalid());
            }
            parts[count] = component.parse().map_err(|_| invalid())?;
            count += 1;
        }

        Ok(Self::new(parts[0], parts[1], parts[2]))
    }
}

impl FromStr for HostVersion {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for HostVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_triple() {
        assert_eq!(HostVersion::parse("2.1.54"), Ok(HostVersion::new(2, 1, 54)));
        assert_eq!(
            " 2.1.49 ".parse::<HostVersion>(),
            Ok(HostVersion::new(2, 1, 49))
        );
    }

    #[test]
    fn missing_components_are_zero() {
        assert_eq!(HostVersion::parse("23.10"), Ok(HostVersion::new(23, 10, 0)));
        assert_eq!(HostVersion::parse("24"), Ok(HostVersion::new(24, 0, 0)));
    }

    #[test]
    fn rejects_garbage() {
        for bad in ["", "2.x.1", "2..1", "1.2.3.4", "v2.1.54", "-1.0.0"] {
            assert_eq!(
                HostVersion::parse(bad),
                Err(StyleError::InvalidVersion(bad.to_string())),
                "{bad} should not parse"
            );
        }
    }

    #[test]
    fn orders_lexicographically() {
        assert!(HostVersion::new(2, 1, 49) < HostVersion::new(2, 1, 50));
        assert!(HostVersion::new(2, 1, 60) > HostVersion::new(2, 1, 54));
        assert!(HostVersion::new(23, 10, 0) > HostVersion::new(2, 1, 54));
    }

    #[test]
    fn display_round_trip() {
        let v = HostVersion::new(2, 1, 54);
        assert_eq!(v.to_string(), "2.1.54");
        assert_eq!(NoteTypeId(1342697561419).to_string(), "1342697561419");
    }
}
