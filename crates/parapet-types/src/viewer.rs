//! Viewer (principal) types.
//!
//! A [`Viewer`] represents who is looking at a protected fragment,
//! separating "who is viewing" from "what they are allowed to see".
//!
//! # Design Rationale
//!
//! The viewer is an explicit value injected by the caller, not read
//! from ambient session state, so a gate can be evaluated for any
//! viewer.
//!
//! Role level and account tier are deliberately *not* stored on the
//! viewer: they are served by the lookup interfaces in the gate crate,
//! keeping one source of truth per fact.

use crate::ViewerId;
use serde::{Deserialize, Serialize};

/// The principal a gate decision is made for.
///
/// A Viewer carries identity and authentication state only. Permission
/// facts (ownership, role, tier) come from lookups keyed by the id.
///
/// # Variants
///
/// | Variant | Description |
/// |---------|-------------|
/// | `Visitor` | Unauthenticated; has no id |
/// | `Member` | Authenticated account with a [`ViewerId`] |
///
/// # Example
///
/// ```
/// use parapet_types::{Viewer, ViewerId};
///
/// let anonymous = Viewer::Visitor;
/// assert!(!anonymous.is_authenticated());
/// assert!(anonymous.id().is_none());
///
/// let member = Viewer::Member(ViewerId::new(42));
/// assert!(member.is_authenticated());
/// assert_eq!(member.id(), Some(ViewerId::new(42)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Viewer {
    /// Unauthenticated visitor.
    Visitor,
    /// Authenticated viewer identified by [`ViewerId`].
    Member(ViewerId),
}

impl Viewer {
    /// Returns `true` if this viewer is authenticated.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Member(_))
    }

    /// Returns the [`ViewerId`] for a member, otherwise `None`.
    #[must_use]
    pub fn id(&self) -> Option<ViewerId> {
        match self {
            Self::Member(id) => Some(*id),
            Self::Visitor => None,
        }
    }
}

impl std::fmt::Display for Viewer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Visitor => write!(f, "visitor"),
            Self::Member(id) => write!(f, "member:{}", id.value()),
        }
    }
}

impl From<ViewerId> for Viewer {
    fn from(id: ViewerId) -> Self {
        Self::Member(id)
    }
}
