//! Role level scale.
//!
//! A role level is an ordered integer representing a viewer's privilege
//! within a resource's access-control list. Higher is more privileged,
//! and comparison is plain numeric `>=`; no level is special-cased.
//!
//! The named constants follow the conventional 10/20/30/40/50 ladder of
//! the backing access-control lists, but any value on the scale is
//! valid.

use serde::{Deserialize, Serialize};

/// Ordered role level within a resource's access-control list.
///
/// [`RoleLevel::NONE`] (0) doubles as "no role" on the viewer side and
/// "no requirement" on the spec side.
///
/// # Example
///
/// ```
/// use parapet_types::RoleLevel;
///
/// // A developer satisfies a reporter requirement, not the reverse.
/// assert!(RoleLevel::DEVELOPER.satisfies(RoleLevel::REPORTER));
/// assert!(!RoleLevel::REPORTER.satisfies(RoleLevel::DEVELOPER));
///
/// // Zero means "not required": everything satisfies it.
/// assert!(RoleLevel::NONE.satisfies(RoleLevel::NONE));
/// assert!(!RoleLevel::NONE.is_required());
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct RoleLevel(pub u8);

impl RoleLevel {
    /// No role / no requirement.
    pub const NONE: Self = Self(0);
    /// Read-only guest access.
    pub const GUEST: Self = Self(10);
    /// Can report and comment.
    pub const REPORTER: Self = Self(20);
    /// Can contribute changes.
    pub const DEVELOPER: Self = Self(30);
    /// Can manage the resource.
    pub const MAINTAINER: Self = Self(40);
    /// Full control.
    pub const OWNER: Self = Self(50);

    /// Creates a role level from its numeric value.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns `true` if this level, used as a requirement, actually
    /// requires anything.
    #[must_use]
    pub const fn is_required(self) -> bool {
        self.0 > 0
    }

    /// Returns `true` if this level meets the given minimum.
    ///
    /// Plain numeric comparison; a minimum of [`RoleLevel::NONE`] is
    /// always met.
    #[must_use]
    pub const fn satisfies(self, min: Self) -> bool {
        self.0 >= min.0
    }

    /// Returns the conventional name for this level, if it has one.
    #[must_use]
    pub fn name(self) -> Option<&'static str> {
        match self {
            Self::NONE => Some("none"),
            Self::GUEST => Some("guest"),
            Self::REPORTER => Some("reporter"),
            Self::DEVELOPER => Some("developer"),
            Self::MAINTAINER => Some("maintainer"),
            Self::OWNER => Some("owner"),
            _ => None,
        }
    }

    /// Parses a conventional level name (case-insensitive).
    ///
    /// # Example
    ///
    /// ```
    /// use parapet_types::RoleLevel;
    ///
    /// assert_eq!(RoleLevel::parse("developer"), Some(RoleLevel::DEVELOPER));
    /// assert_eq!(RoleLevel::parse("OWNER"), Some(RoleLevel::OWNER));
    /// assert_eq!(RoleLevel::parse("wizard"), None);
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "none" => Some(Self::NONE),
            "guest" => Some(Self::GUEST),
            "reporter" => Some(Self::REPORTER),
            "developer" => Some(Self::DEVELOPER),
            "maintainer" => Some(Self::MAINTAINER),
            "owner" => Some(Self::OWNER),
            _ => None,
        }
    }
}

impl std::fmt::Display for RoleLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "level:{}", self.0),
        }
    }
}

impl From<u8> for RoleLevel {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_is_ordered() {
        assert!(RoleLevel::NONE < RoleLevel::GUEST);
        assert!(RoleLevel::GUEST < RoleLevel::REPORTER);
        assert!(RoleLevel::REPORTER < RoleLevel::DEVELOPER);
        assert!(RoleLevel::DEVELOPER < RoleLevel::MAINTAINER);
        assert!(RoleLevel::MAINTAINER < RoleLevel::OWNER);
    }

    #[test]
    fn satisfies_is_plain_numeric() {
        assert!(RoleLevel::MAINTAINER.satisfies(RoleLevel::DEVELOPER));
        assert!(RoleLevel::DEVELOPER.satisfies(RoleLevel::DEVELOPER));
        assert!(!RoleLevel::REPORTER.satisfies(RoleLevel::DEVELOPER));
        // Off-scale values compare the same way.
        assert!(RoleLevel::new(35).satisfies(RoleLevel::DEVELOPER));
        assert!(!RoleLevel::new(25).satisfies(RoleLevel::DEVELOPER));
    }

    #[test]
    fn zero_minimum_is_always_met() {
        assert!(RoleLevel::NONE.satisfies(RoleLevel::NONE));
        assert!(RoleLevel::GUEST.satisfies(RoleLevel::NONE));
    }

    #[test]
    fn is_required() {
        assert!(!RoleLevel::NONE.is_required());
        assert!(RoleLevel::GUEST.is_required());
    }

    #[test]
    fn default_is_none() {
        assert_eq!(RoleLevel::default(), RoleLevel::NONE);
    }

    #[test]
    fn parse_case_insensitive() {
        assert_eq!(RoleLevel::parse("guest"), Some(RoleLevel::GUEST));
        assert_eq!(RoleLevel::parse("Maintainer"), Some(RoleLevel::MAINTAINER));
        assert_eq!(RoleLevel::parse("OWNER"), Some(RoleLevel::OWNER));
        assert_eq!(RoleLevel::parse(""), None);
        assert_eq!(RoleLevel::parse("admin"), None);
    }

    #[test]
    fn display_named_and_unnamed() {
        assert_eq!(RoleLevel::DEVELOPER.to_string(), "developer");
        assert_eq!(RoleLevel::new(35).to_string(), "level:35");
    }

    #[test]
    fn serde_as_plain_integer() {
        let json = serde_json::to_string(&RoleLevel::DEVELOPER).expect("serialize");
        assert_eq!(json, "30");
        let parsed: RoleLevel = serde_json::from_str("30").expect("deserialize");
        assert_eq!(parsed, RoleLevel::DEVELOPER);
    }
}
