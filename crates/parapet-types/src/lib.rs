//! Identity and value types for the parapet authorization gate.
//!
//! This crate is the leaf of the workspace: pure value types with no
//! permission logic, safe for any layer to depend on.
//!
//! # Crate Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  parapet-types : ids, Viewer, resource refs,   ◄── HERE  │
//! │                  role/tier scales, TryNew                │
//! ├──────────────────────────────────────────────────────────┤
//! │  parapet-gate  : RequirementSpec, PermissionEvaluator,   │
//! │                  AuthorizationGate, escalation seams     │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Type Overview
//!
//! | Type | Role |
//! |------|------|
//! | [`ViewerId`] / [`ResourceId`] | Integer newtype identifiers |
//! | [`Viewer`] | Principal: visitor or authenticated member |
//! | [`ResourceRef`] / [`ResourceKind`] | What a check applies to |
//! | [`RoleLevel`] | Ordered privilege scale within a resource |
//! | [`AccountTier`] | Ordered subscription scale, orthogonal to role |
//! | [`TryNew`] | Fallible construction with validation |
//!
//! Role level and account tier are deliberately separate scales: a
//! resource owner can still be on the free plan, and a gold-tier
//! account can be a guest on someone else's project.
//!
//! # Example
//!
//! ```
//! use parapet_types::{AccountTier, ResourceId, ResourceRef, RoleLevel, Viewer, ViewerId};
//!
//! let viewer = Viewer::Member(ViewerId::new(42));
//! let resource = ResourceRef::project(ResourceId::new(7));
//!
//! assert!(viewer.is_authenticated());
//! assert!(RoleLevel::MAINTAINER.satisfies(RoleLevel::DEVELOPER));
//! assert!(!AccountTier::BRONZE.satisfies(AccountTier::SILVER));
//! # let _ = resource;
//! ```

mod construct;
mod id;
mod resource;
mod role;
mod tier;
mod viewer;

pub use construct::TryNew;
pub use id::{ResourceId, ViewerId};
pub use resource::{ResourceKind, ResourceRef};
pub use role::RoleLevel;
pub use tier::AccountTier;
pub use viewer::Viewer;
