//! Requirement validation errors.
//!
//! Only construction fails loudly. Unresolved lookups are *not* errors:
//! they degrade to "requirement not satisfied" inside the evaluator, so
//! an availability failure can never grant access and nothing
//! error-shaped crosses the render boundary.

use thiserror::Error;

/// A raw requirement was rejected at construction.
///
/// Raised by `RequirementSpec::try_new` when untyped threshold values
/// (as they arrive from deserialized props or config) are out of range.
/// Thresholds are never silently coerced.
///
/// # Example
///
/// ```
/// use parapet_gate::InvalidSpec;
///
/// let err = InvalidSpec::NegativeRole(-10);
/// assert!(err.to_string().contains("-10"));
/// assert_eq!(err.code(), "SPEC_NEGATIVE_ROLE");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidSpec {
    /// `min_role` was negative.
    #[error("minimum role must not be negative, got {0}")]
    NegativeRole(i64),

    /// `min_role` does not fit the role scale.
    #[error("minimum role {value} exceeds the role scale (max {max})")]
    RoleTooLarge {
        /// The rejected raw value.
        value: i64,
        /// Largest representable level.
        max: u8,
    },

    /// `min_account_type` was negative.
    #[error("minimum account tier must not be negative, got {0}")]
    NegativeTier(i64),

    /// `min_account_type` does not fit the tier scale.
    #[error("minimum account tier {value} exceeds the tier scale (max {max})")]
    TierTooLarge {
        /// The rejected raw value.
        value: i64,
        /// Largest representable tier.
        max: u8,
    },
}

impl InvalidSpec {
    /// Returns a stable machine-readable code for this rejection.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NegativeRole(_) => "SPEC_NEGATIVE_ROLE",
            Self::RoleTooLarge { .. } => "SPEC_ROLE_TOO_LARGE",
            Self::NegativeTier(_) => "SPEC_NEGATIVE_TIER",
            Self::TierTooLarge { .. } => "SPEC_TIER_TOO_LARGE",
        }
    }
}
