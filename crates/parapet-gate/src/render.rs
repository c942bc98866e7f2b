//! Render states.
//!
//! A gate decision maps to one of three render states. The gate does
//! not draw anything; it hands the host UI a value describing what to
//! draw. Pointer interception and styling are the host's concern; the
//! cover carries the message, the marker classes, and the deny reason
//! the host needs for them.

use crate::{DenyReason, FailedChecks};

/// What the host UI should render for one gate decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendering<C> {
    /// Allowed: render the children unmodified, no cover, no
    /// escalation affordance.
    Pass(C),
    /// Denied with suppression: render nothing.
    Hidden,
    /// Denied with an overlay: render the children visually present
    /// but blocked under the cover.
    Covered {
        /// The protected children, still rendered underneath.
        content: C,
        /// The blocking cover.
        cover: Cover,
    },
}

impl<C> Rendering<C> {
    /// Returns `true` if the children render unmodified.
    #[must_use]
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass(_))
    }

    /// Returns `true` if nothing renders.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        matches!(self, Self::Hidden)
    }

    /// Returns the cover, if the children render blocked.
    #[must_use]
    pub fn cover(&self) -> Option<&Cover> {
        match self {
            Self::Covered { cover, .. } => Some(cover),
            _ => None,
        }
    }
}

/// The blocking layer over denied children.
///
/// Carries everything the host UI needs: a tooltip title, one marker
/// class per failed check (all failures, not just the prioritized
/// one), and the deny reason to dispatch escalation from on
/// activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cover {
    /// Why the gate denied, prioritized.
    pub reason: DenyReason,
    /// Every structural check that failed.
    pub failed: FailedChecks,
}

impl Cover {
    /// Tooltip text for the cover.
    #[must_use]
    pub fn title(&self) -> &'static str {
        self.reason.message()
    }

    /// Marker class names for styling and diagnostics.
    #[must_use]
    pub fn classes(&self) -> Vec<&'static str> {
        self.failed.classes()
    }
}
