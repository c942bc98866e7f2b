//! Permission fact lookups.
//!
//! The gate trusts whatever these interfaces say; it performs no
//! network calls and no verification of its own. Implementations live
//! in the host application (store selectors, API caches, fixtures).
//!
//! # Architecture
//!
//! ```text
//! OwnershipLookup / RoleLookup / AccountTierLookup   ← trait seams (THIS MODULE)
//!          │
//!          └── host application impls (store selectors, API caches)
//! ```
//!
//! # Fail-closed contract
//!
//! Every method returns `Option`: `None` means "unknown or not yet
//! resolved", and the evaluator collapses it to *not satisfied*. A
//! lookup backed by an in-flight request simply answers `None` until
//! the host re-evaluates the gate; a lookup must never block and never
//! panic on a missing resource.

use parapet_types::{AccountTier, ResourceRef, RoleLevel, ViewerId};

/// Answers whether a viewer owns a resource.
pub trait OwnershipLookup: Send + Sync {
    /// Returns `Some(true)` iff the viewer owns the resource,
    /// `Some(false)` for a known non-owner, `None` while unresolved.
    fn is_owner(&self, viewer: ViewerId, resource: &ResourceRef) -> Option<bool>;
}

/// Answers a viewer's role level on a resource.
pub trait RoleLookup: Send + Sync {
    /// Returns the viewer's role level on the resource, `None` while
    /// unresolved. Callers treat `None` as [`RoleLevel::NONE`].
    fn role_level(&self, viewer: ViewerId, resource: &ResourceRef) -> Option<RoleLevel>;
}

/// Answers a viewer's account tier.
pub trait AccountTierLookup: Send + Sync {
    /// Returns the viewer's subscription tier, `None` while unresolved.
    fn tier(&self, viewer: ViewerId) -> Option<AccountTier>;
}
