//! Permission evaluation and escalation dispatch for protected UI
//! fragments.
//!
//! A use-site declares what a fragment demands with a
//! [`RequirementSpec`]; the gate decides whether to render the fragment
//! normally, render it blocked under a cover, or suppress it entirely,
//! and, when blocked, offers the viewer a remedial workflow (login,
//! account upgrade, or fork-to-own).
//!
//! # Decision Model
//!
//! ```text
//! allowed = (visitor_allowed ∨ authenticated)
//!         ∧ (owned ∨ role_satisfied)
//!         ∧ account_satisfied
//! ```
//!
//! Ownership and role are alternative routes to the same capability;
//! account tier is an orthogonal AND gate. On deny, a single
//! [`DenyReason`] is derived by fixed priority (authentication, then
//! owner/role, then tier) and drives both the cover's message and the
//! escalation workflow.
//!
//! # Crate Architecture
//!
//! ```text
//! parapet-types  (ids, Viewer, role/tier scales)
//!       ↑
//! parapet-gate  ◄── THIS CRATE
//!   RequirementSpec ──▶ PermissionEvaluator ──▶ Verdict
//!                              │                   │
//!   OwnershipLookup ───────────┤                   ▼
//!   RoleLookup ────────────────┤         Decision {allowed, DenyReason}
//!   AccountTierLookup ─────────┘                   │
//!                                ┌─────────────────┴──────────┐
//!                                ▼                            ▼
//!                        Rendering (pass /          EscalationWorkflow
//!                        hidden / covered)       ──▶ ModalPresenter
//!                                                ──▶ NavigationService
//! ```
//!
//! # Design Principles
//!
//! - **Trait seams, host implementations** — ownership, role, and tier
//!   facts come from [`OwnershipLookup`] / [`RoleLookup`] /
//!   [`AccountTierLookup`]; navigation and modals go through
//!   [`NavigationService`] / [`ModalPresenter`]. The gate performs no
//!   I/O of its own and trusts what the seams say.
//! - **Fail closed** — an unresolved lookup reads as "not satisfied";
//!   an availability failure can never grant access, and unresolved
//!   checks are indistinguishable from legitimate denials.
//! - **One source of truth** — message and escalation both read the
//!   single prioritized [`DenyReason`].
//!
//! # Example
//!
//! ```
//! use parapet_gate::{AuthorizationGate, PermissionEvaluator, RequirementSpec};
//! use parapet_types::{AccountTier, ResourceId, ResourceRef, RoleLevel, Viewer, ViewerId};
//!
//! // Host-side lookups; here a fixture with one project member.
//! struct Acl;
//! impl parapet_gate::OwnershipLookup for Acl {
//!     fn is_owner(&self, viewer: ViewerId, _: &ResourceRef) -> Option<bool> {
//!         Some(viewer == ViewerId::new(1))
//!     }
//! }
//! impl parapet_gate::RoleLookup for Acl {
//!     fn role_level(&self, _: ViewerId, _: &ResourceRef) -> Option<RoleLevel> {
//!         Some(RoleLevel::REPORTER)
//!     }
//! }
//! impl parapet_gate::AccountTierLookup for Acl {
//!     fn tier(&self, _: ViewerId) -> Option<AccountTier> {
//!         Some(AccountTier::BRONZE)
//!     }
//! }
//!
//! let gate = AuthorizationGate::new(
//!     RequirementSpec::builder()
//!         .min_role(RoleLevel::DEVELOPER)
//!         .resource(ResourceRef::project(ResourceId::new(7)))
//!         .build(),
//! );
//! let evaluator = PermissionEvaluator::new(&Acl, &Acl, &Acl);
//!
//! // The owner passes even below the role threshold.
//! assert!(gate
//!     .guard("settings", &Viewer::Member(ViewerId::new(1)), &evaluator)
//!     .is_pass());
//!
//! // A reporter is blocked and offered a fork.
//! let rendering = gate.guard("settings", &Viewer::Member(ViewerId::new(2)), &evaluator);
//! assert!(rendering.cover().is_some());
//! ```

pub mod decision;
pub mod error;
pub mod escalation;
pub mod evaluate;
pub mod gate;
pub mod lookup;
pub mod reason;
pub mod render;
pub mod requirement;
pub mod verdict;

pub use decision::Decision;
pub use error::InvalidSpec;
pub use escalation::{
    routes, EscalationWorkflow, ModalPresenter, NavigationService, WorkflowKind,
};
pub use evaluate::PermissionEvaluator;
pub use gate::AuthorizationGate;
pub use lookup::{AccountTierLookup, OwnershipLookup, RoleLookup};
pub use reason::DenyReason;
pub use render::{Cover, Rendering};
pub use requirement::{RenderMode, RequirementConfig, RequirementSpec, RequirementSpecBuilder};
pub use verdict::{FailedChecks, Verdict};

// Re-export the value types so hosts can depend on one crate.
pub use parapet_types::{
    AccountTier, ResourceId, ResourceKind, ResourceRef, RoleLevel, TryNew, Viewer, ViewerId,
};
