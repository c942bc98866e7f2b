//! Gate decisions.

use crate::{DenyReason, Verdict};
use serde::Serialize;

/// One evaluated decision: the verdict plus its prioritized deny
/// reason.
///
/// Ephemeral like the verdict it wraps: recomputed on every cycle,
/// never stored. Equal inputs produce equal decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Decision {
    verdict: Verdict,
    reason: Option<DenyReason>,
}

impl Decision {
    /// Derives the decision from a verdict.
    #[must_use]
    pub fn from_verdict(verdict: Verdict) -> Self {
        Self {
            verdict,
            reason: DenyReason::from_verdict(&verdict),
        }
    }

    /// The underlying verdict.
    #[must_use]
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// `true` when the viewer may use the fragment.
    #[must_use]
    pub fn allowed(&self) -> bool {
        self.reason.is_none()
    }

    /// The prioritized deny reason; `None` when allowed.
    #[must_use]
    pub fn reason(&self) -> Option<DenyReason> {
        self.reason
    }
}
