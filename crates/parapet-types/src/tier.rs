//! Account tier scale.
//!
//! An account tier is the viewer's subscription level, independent of
//! any resource-specific role. Like [`crate::RoleLevel`] it is an
//! ordered integer compared with plain `>=`.

use serde::{Deserialize, Serialize};

/// Ordered account (subscription) tier.
///
/// [`AccountTier::NONE`] (0) doubles as "no paid plan" on the viewer
/// side and "no requirement" on the spec side.
///
/// # Example
///
/// ```
/// use parapet_types::AccountTier;
///
/// assert!(AccountTier::SILVER.satisfies(AccountTier::BRONZE));
/// assert!(!AccountTier::BRONZE.satisfies(AccountTier::SILVER));
/// assert!(!AccountTier::NONE.is_required());
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct AccountTier(pub u8);

impl AccountTier {
    /// No plan / no requirement.
    pub const NONE: Self = Self(0);
    /// Entry paid plan.
    pub const BRONZE: Self = Self(1);
    /// Mid paid plan.
    pub const SILVER: Self = Self(2);
    /// Top paid plan.
    pub const GOLD: Self = Self(3);

    /// Creates a tier from its numeric value.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns `true` if this tier, used as a requirement, actually
    /// requires anything.
    #[must_use]
    pub const fn is_required(self) -> bool {
        self.0 > 0
    }

    /// Returns `true` if this tier meets the given minimum.
    #[must_use]
    pub const fn satisfies(self, min: Self) -> bool {
        self.0 >= min.0
    }

    /// Returns the plan name for this tier, if it has one.
    #[must_use]
    pub fn name(self) -> Option<&'static str> {
        match self {
            Self::NONE => Some("none"),
            Self::BRONZE => Some("bronze"),
            Self::SILVER => Some("silver"),
            Self::GOLD => Some("gold"),
            _ => None,
        }
    }

    /// Parses a plan name (case-insensitive).
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "none" => Some(Self::NONE),
            "bronze" => Some(Self::BRONZE),
            "silver" => Some(Self::SILVER),
            "gold" => Some(Self::GOLD),
            _ => None,
        }
    }
}

impl std::fmt::Display for AccountTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "tier:{}", self.0),
        }
    }
}

impl From<u8> for AccountTier {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_is_ordered() {
        assert!(AccountTier::NONE < AccountTier::BRONZE);
        assert!(AccountTier::BRONZE < AccountTier::SILVER);
        assert!(AccountTier::SILVER < AccountTier::GOLD);
    }

    #[test]
    fn satisfies_is_plain_numeric() {
        assert!(AccountTier::GOLD.satisfies(AccountTier::SILVER));
        assert!(AccountTier::SILVER.satisfies(AccountTier::SILVER));
        assert!(!AccountTier::BRONZE.satisfies(AccountTier::SILVER));
    }

    #[test]
    fn zero_minimum_is_always_met() {
        assert!(AccountTier::NONE.satisfies(AccountTier::NONE));
        assert!(AccountTier::BRONZE.satisfies(AccountTier::NONE));
    }

    #[test]
    fn default_is_none() {
        assert_eq!(AccountTier::default(), AccountTier::NONE);
        assert!(!AccountTier::default().is_required());
    }

    #[test]
    fn parse_case_insensitive() {
        assert_eq!(AccountTier::parse("bronze"), Some(AccountTier::BRONZE));
        assert_eq!(AccountTier::parse("GOLD"), Some(AccountTier::GOLD));
        assert_eq!(AccountTier::parse("platinum"), None);
    }

    #[test]
    fn display_named_and_unnamed() {
        assert_eq!(AccountTier::SILVER.to_string(), "silver");
        assert_eq!(AccountTier::new(9).to_string(), "tier:9");
    }

    #[test]
    fn serde_as_plain_integer() {
        let json = serde_json::to_string(&AccountTier::SILVER).expect("serialize");
        assert_eq!(json, "2");
        let parsed: AccountTier = serde_json::from_str("2").expect("deserialize");
        assert_eq!(parsed, AccountTier::SILVER);
    }
}
