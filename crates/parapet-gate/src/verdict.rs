//! Evaluation verdicts.
//!
//! A [`Verdict`] is the ephemeral result of one evaluation cycle: the
//! three independent structural answers plus the authentication
//! answer. It is recomputed on every render and never persisted.
//!
//! The combination rule lives here:
//!
//! ```text
//! allowed = auth_satisfied ∧ (owned ∨ role_satisfied) ∧ account_satisfied
//! ```
//!
//! Ownership and role are alternative routes to the same capability;
//! an owner passes regardless of role, and a sufficiently privileged
//! non-owner passes without ownership. Account tier is an orthogonal
//! axis: even an owner with a sufficient role is denied when under
//! tier.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Result of evaluating one [`crate::RequirementSpec`] for one viewer.
///
/// # Example
///
/// ```
/// use parapet_gate::Verdict;
///
/// // Owner with no role still passes the structural OR-gate.
/// let verdict = Verdict {
///     auth_satisfied: true,
///     owned: true,
///     role_satisfied: false,
///     account_satisfied: true,
/// };
/// assert!(verdict.allowed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// Viewer is authenticated, or the spec tolerates visitors.
    pub auth_satisfied: bool,
    /// Viewer owns the resource, or no structural requirement is
    /// imposed at all.
    pub owned: bool,
    /// Viewer's role meets an imposed minimum, or no structural
    /// requirement is imposed at all.
    pub role_satisfied: bool,
    /// Viewer's tier meets the minimum, or no tier is required.
    pub account_satisfied: bool,
}

impl Verdict {
    /// The combined allow decision.
    #[must_use]
    pub fn allowed(&self) -> bool {
        self.auth_satisfied && (self.owned || self.role_satisfied) && self.account_satisfied
    }

    /// Every structural check that failed, independently.
    ///
    /// Unlike the single prioritized deny reason, this records all
    /// failures so the overlay can mark each one for styling and
    /// diagnostics.
    #[must_use]
    pub fn failed_checks(&self) -> FailedChecks {
        let mut failed = FailedChecks::empty();
        if !self.owned {
            failed |= FailedChecks::OWNERSHIP;
        }
        if !self.role_satisfied {
            failed |= FailedChecks::ROLE;
        }
        if !self.account_satisfied {
            failed |= FailedChecks::ACCOUNT;
        }
        failed
    }
}

bitflags! {
    /// The structural checks that failed in one evaluation.
    ///
    /// | Flag | Marker class |
    /// |------|--------------|
    /// | [`OWNERSHIP`](Self::OWNERSHIP) | `ownership-required` |
    /// | [`ROLE`](Self::ROLE) | `role-required` |
    /// | [`ACCOUNT`](Self::ACCOUNT) | `account-tier-required` |
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct FailedChecks: u8 {
        /// The ownership check failed.
        const OWNERSHIP = 0b001;
        /// The role check failed.
        const ROLE      = 0b010;
        /// The account tier check failed.
        const ACCOUNT   = 0b100;
    }
}

impl FailedChecks {
    /// Marker class names for the overlay, one per failed check.
    ///
    /// # Example
    ///
    /// ```
    /// use parapet_gate::FailedChecks;
    ///
    /// let failed = FailedChecks::OWNERSHIP | FailedChecks::ROLE;
    /// assert_eq!(failed.classes(), vec!["ownership-required", "role-required"]);
    /// ```
    #[must_use]
    pub fn classes(self) -> Vec<&'static str> {
        let mut classes = Vec::new();
        if self.contains(Self::OWNERSHIP) {
            classes.push("ownership-required");
        }
        if self.contains(Self::ROLE) {
            classes.push("role-required");
        }
        if self.contains(Self::ACCOUNT) {
            classes.push("account-tier-required");
        }
        classes
    }
}

impl std::fmt::Display for FailedChecks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let classes = self.classes();
        if classes.is_empty() {
            write!(f, "(none)")
        } else {
            write!(f, "{}", classes.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_pass() -> Verdict {
        Verdict {
            auth_satisfied: true,
            owned: true,
            role_satisfied: true,
            account_satisfied: true,
        }
    }

    #[test]
    fn all_pass_is_allowed() {
        assert!(all_pass().allowed());
        assert!(all_pass().failed_checks().is_empty());
    }

    #[test]
    fn ownership_alone_satisfies_or_gate() {
        let verdict = Verdict {
            role_satisfied: false,
            ..all_pass()
        };
        assert!(verdict.allowed());
    }

    #[test]
    fn role_alone_satisfies_or_gate() {
        let verdict = Verdict {
            owned: false,
            ..all_pass()
        };
        assert!(verdict.allowed());
    }

    #[test]
    fn neither_owner_nor_role_denies() {
        let verdict = Verdict {
            owned: false,
            role_satisfied: false,
            ..all_pass()
        };
        assert!(!verdict.allowed());
    }

    #[test]
    fn account_tier_is_a_hard_and() {
        // Even the owner with a sufficient role is denied under tier.
        let verdict = Verdict {
            account_satisfied: false,
            ..all_pass()
        };
        assert!(!verdict.allowed());
    }

    #[test]
    fn unauthenticated_denies() {
        let verdict = Verdict {
            auth_satisfied: false,
            ..all_pass()
        };
        assert!(!verdict.allowed());
    }

    #[test]
    fn failed_checks_records_each_failure_independently() {
        let verdict = Verdict {
            auth_satisfied: true,
            owned: false,
            role_satisfied: true,
            account_satisfied: false,
        };
        let failed = verdict.failed_checks();
        assert!(failed.contains(FailedChecks::OWNERSHIP));
        assert!(!failed.contains(FailedChecks::ROLE));
        assert!(failed.contains(FailedChecks::ACCOUNT));
    }

    #[test]
    fn classes_match_flags() {
        assert_eq!(
            FailedChecks::all().classes(),
            vec!["ownership-required", "role-required", "account-tier-required"]
        );
        assert_eq!(FailedChecks::empty().classes(), Vec::<&str>::new());
    }

    #[test]
    fn display_formatting() {
        assert_eq!(FailedChecks::ROLE.to_string(), "role-required");
        assert_eq!(FailedChecks::empty().to_string(), "(none)");
        assert_eq!(
            (FailedChecks::OWNERSHIP | FailedChecks::ACCOUNT).to_string(),
            "ownership-required account-tier-required"
        );
    }

    #[test]
    fn verdict_serde_roundtrip() {
        let verdict = Verdict {
            auth_satisfied: true,
            owned: false,
            role_satisfied: true,
            account_satisfied: true,
        };
        let json = serde_json::to_string(&verdict).expect("serialize");
        let parsed: Verdict = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, verdict);
    }
}
