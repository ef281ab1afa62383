//! Library version reporting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Major version component.
pub const VERSION_MAJOR: u8 = 0;

/// Minor version component.
pub const VERSION_MINOR: u8 = 1;

/// Build number component.
pub const VERSION_BUILD: u16 = 0;

/// Immutable version descriptor, produced fresh on each query from the
/// compile-time constants above.
///
/// # Example
///
/// ```
/// use curve0_core::types::version::version;
///
/// let v = version();
/// assert_eq!((v.major, v.minor, v.build), (0, 1, 0));
/// assert_eq!(format!("{}", v), "0.1.0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Version {
    /// Major version component.
    pub major: u8,
    /// Minor version component.
    pub minor: u8,
    /// Build number component.
    pub build: u16,
}

/// Return the library version.
///
/// Stateless: no side effects, no failure modes.
#[inline]
pub const fn version() -> Version {
    Version {
        major: VERSION_MAJOR,
        minor: VERSION_MINOR,
        build: VERSION_BUILD,
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.build)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_exact() {
        let v = version();
        assert_eq!(v.major, 0);
        assert_eq!(v.minor, 1);
        assert_eq!(v.build, 0);
    }

    #[test]
    fn test_version_matches_constants() {
        let v = version();
        assert_eq!(v.major, VERSION_MAJOR);
        assert_eq!(v.minor, VERSION_MINOR);
        assert_eq!(v.build, VERSION_BUILD);
    }

    #[test]
    fn test_display() {
        assert_eq!(version().to_string(), "0.1.0");
    }

    #[test]
    fn test_copy_and_eq() {
        let v = version();
        let w = v;
        assert_eq!(v, w);
    }

    #[test]
    fn test_serde_round_trip() {
        let v = version();
        let json = serde_json::to_string(&v).unwrap();
        let back: Version = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}
