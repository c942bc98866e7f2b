//! Deny reason derivation.
//!
//! The displayed message and the escalation action both read from one
//! [`DenyReason`], derived from the verdict by a fixed priority:
//! authentication before the owner/role gate before account tier. When
//! several checks fail at once, the earliest failing check wins: an
//! unauthenticated, under-tier viewer is told to log in, not to
//! upgrade, because authentication is the more fundamental gap.

use crate::Verdict;
use serde::{Deserialize, Serialize};

/// The single user-facing reason a gate denied.
///
/// # Example
///
/// ```
/// use parapet_gate::{DenyReason, Verdict};
///
/// let verdict = Verdict {
///     auth_satisfied: false,
///     owned: false,
///     role_satisfied: false,
///     account_satisfied: false,
/// };
/// // Everything failed; authentication wins.
/// assert_eq!(DenyReason::from_verdict(&verdict), Some(DenyReason::Unauthenticated));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    /// Viewer is not authenticated and the spec does not tolerate
    /// visitors.
    Unauthenticated,
    /// Viewer neither owns the resource nor holds a sufficient role.
    NotOwnerOrRole,
    /// Viewer's account tier is below the required minimum.
    InsufficientAccountTier,
    /// Generic fallback; unreachable through the normal combination
    /// rule but kept so a denial always has a message.
    PermissionRequired,
}

impl DenyReason {
    /// Derives the prioritized reason from a verdict.
    ///
    /// Returns `None` when the verdict allows. Evaluation order is
    /// fixed: authentication, then the owner/role OR-gate, then
    /// account tier.
    #[must_use]
    pub fn from_verdict(verdict: &Verdict) -> Option<Self> {
        if verdict.allowed() {
            return None;
        }
        if !verdict.auth_satisfied {
            return Some(Self::Unauthenticated);
        }
        if !verdict.owned && !verdict.role_satisfied {
            return Some(Self::NotOwnerOrRole);
        }
        if !verdict.account_satisfied {
            return Some(Self::InsufficientAccountTier);
        }
        Some(Self::PermissionRequired)
    }

    /// The tooltip message shown on the blocking cover.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "Please log in",
            Self::NotOwnerOrRole => "You need ownership or a higher role. You can fork it!",
            Self::InsufficientAccountTier => "Upgrade your account",
            Self::PermissionRequired => "You need permission to use this feature",
        }
    }

    /// Stable machine-readable label for diagnostics.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::NotOwnerOrRole => "NOT_OWNER_OR_ROLE",
            Self::InsufficientAccountTier => "INSUFFICIENT_ACCOUNT_TIER",
            Self::PermissionRequired => "PERMISSION_REQUIRED",
        }
    }
}

impl std::fmt::Display for DenyReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(auth: bool, owned: bool, role: bool, account: bool) -> Verdict {
        Verdict {
            auth_satisfied: auth,
            owned,
            role_satisfied: role,
            account_satisfied: account,
        }
    }

    #[test]
    fn allowed_has_no_reason() {
        assert_eq!(DenyReason::from_verdict(&verdict(true, true, true, true)), None);
        // The OR-gate passing on either side still allows.
        assert_eq!(DenyReason::from_verdict(&verdict(true, true, false, true)), None);
        assert_eq!(DenyReason::from_verdict(&verdict(true, false, true, true)), None);
    }

    #[test]
    fn authentication_wins_over_everything() {
        assert_eq!(
            DenyReason::from_verdict(&verdict(false, false, false, false)),
            Some(DenyReason::Unauthenticated)
        );
        // Even if only authentication failed.
        assert_eq!(
            DenyReason::from_verdict(&verdict(false, true, true, true)),
            Some(DenyReason::Unauthenticated)
        );
    }

    #[test]
    fn owner_role_gate_wins_over_account_tier() {
        assert_eq!(
            DenyReason::from_verdict(&verdict(true, false, false, false)),
            Some(DenyReason::NotOwnerOrRole)
        );
    }

    #[test]
    fn account_tier_reported_when_structure_passes() {
        assert_eq!(
            DenyReason::from_verdict(&verdict(true, true, true, false)),
            Some(DenyReason::InsufficientAccountTier)
        );
        // Role route through the OR-gate, still under tier.
        assert_eq!(
            DenyReason::from_verdict(&verdict(true, false, true, false)),
            Some(DenyReason::InsufficientAccountTier)
        );
    }

    #[test]
    fn messages_are_nonempty_and_distinct() {
        let reasons = [
            DenyReason::Unauthenticated,
            DenyReason::NotOwnerOrRole,
            DenyReason::InsufficientAccountTier,
            DenyReason::PermissionRequired,
        ];
        for (i, a) in reasons.iter().enumerate() {
            assert!(!a.message().is_empty());
            for b in &reasons[i + 1..] {
                assert_ne!(a.message(), b.message());
            }
        }
    }

    #[test]
    fn codes_are_stable() {
        assert_eq!(DenyReason::Unauthenticated.code(), "UNAUTHENTICATED");
        assert_eq!(DenyReason::NotOwnerOrRole.code(), "NOT_OWNER_OR_ROLE");
        assert_eq!(
            DenyReason::InsufficientAccountTier.code(),
            "INSUFFICIENT_ACCOUNT_TIER"
        );
        assert_eq!(DenyReason::PermissionRequired.code(), "PERMISSION_REQUIRED");
    }

    #[test]
    fn display_uses_code() {
        assert_eq!(DenyReason::NotOwnerOrRole.to_string(), "NOT_OWNER_OR_ROLE");
    }

    #[test]
    fn serde_is_snake_case() {
        let json = serde_json::to_string(&DenyReason::Unauthenticated).expect("serialize");
        assert_eq!(json, "\"unauthenticated\"");
    }
}
