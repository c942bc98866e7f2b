//! Permission evaluation.
//!
//! [`PermissionEvaluator`] answers the structural questions for a
//! requirement spec and a viewer, each one independently testable and
//! pure with respect to its explicit inputs. Caching belongs to the
//! lookups, not here.
//!
//! # Fail-closed
//!
//! Any unresolved lookup (`None`), unknown resource, or anonymous
//! viewer collapses to "not satisfied". A pending fact can delay an
//! allow, never produce one.
//!
//! # The structural OR-gate
//!
//! Ownership and role are alternative routes to the same capability,
//! so [`evaluate`](PermissionEvaluator::evaluate) fills the two
//! structural legs jointly:
//!
//! - Neither `owner_only` nor a role threshold imposed: both legs pass;
//!   only authentication and tier can deny.
//! - Either one imposed: the ownership leg reflects *actual* ownership
//!   (an owner is always permitted, regardless of any role threshold),
//!   and the role leg passes only through an imposed threshold; an
//!   ownership requirement cannot be satisfied by the mere absence of
//!   a role requirement.

use crate::{AccountTierLookup, OwnershipLookup, RequirementSpec, RoleLookup, Verdict};
use parapet_types::{AccountTier, ResourceRef, RoleLevel, Viewer};

/// Evaluates requirement specs against the injected lookup seams.
///
/// # Example
///
/// ```
/// use parapet_gate::{PermissionEvaluator, RequirementSpec};
/// use parapet_types::{AccountTier, ResourceRef, RoleLevel, Viewer, ViewerId};
///
/// struct Nobody;
/// impl parapet_gate::OwnershipLookup for Nobody {
///     fn is_owner(&self, _: ViewerId, _: &ResourceRef) -> Option<bool> { Some(false) }
/// }
/// impl parapet_gate::RoleLookup for Nobody {
///     fn role_level(&self, _: ViewerId, _: &ResourceRef) -> Option<RoleLevel> { None }
/// }
/// impl parapet_gate::AccountTierLookup for Nobody {
///     fn tier(&self, _: ViewerId) -> Option<AccountTier> { None }
/// }
///
/// let evaluator = PermissionEvaluator::new(&Nobody, &Nobody, &Nobody);
/// let verdict = evaluator.evaluate(
///     &RequirementSpec::default(),
///     &Viewer::Member(ViewerId::new(1)),
/// );
/// // Nothing required beyond authentication.
/// assert!(verdict.allowed());
/// ```
pub struct PermissionEvaluator<'a> {
    ownership: &'a dyn OwnershipLookup,
    roles: &'a dyn RoleLookup,
    tiers: &'a dyn AccountTierLookup,
}

impl<'a> PermissionEvaluator<'a> {
    /// Creates an evaluator over the three lookup seams.
    #[must_use]
    pub fn new(
        ownership: &'a dyn OwnershipLookup,
        roles: &'a dyn RoleLookup,
        tiers: &'a dyn AccountTierLookup,
    ) -> Self {
        Self {
            ownership,
            roles,
            tiers,
        }
    }

    /// Standalone ownership check.
    ///
    /// `true` immediately when ownership is not required. Otherwise the
    /// viewer must resolve as the owner of `resource`; an unresolved
    /// lookup or a visitor without an id is not an owner.
    #[must_use]
    pub fn evaluate_ownership(
        &self,
        owner_only: bool,
        resource: &ResourceRef,
        viewer: &Viewer,
    ) -> bool {
        !owner_only || self.owner_fact(resource, viewer)
    }

    /// Standalone role check.
    ///
    /// `true` immediately when `min_role` requires nothing. Otherwise
    /// the resolved role level must meet the minimum; unresolved
    /// counts as [`RoleLevel::NONE`].
    #[must_use]
    pub fn evaluate_role(
        &self,
        min_role: RoleLevel,
        resource: &ResourceRef,
        viewer: &Viewer,
    ) -> bool {
        !min_role.is_required() || self.role_fact(resource, viewer).satisfies(min_role)
    }

    /// Standalone account tier check.
    ///
    /// `true` immediately when `min_account_type` requires nothing.
    /// Otherwise the resolved tier must meet the minimum; unresolved
    /// counts as [`AccountTier::NONE`].
    #[must_use]
    pub fn evaluate_account_type(&self, min_account_type: AccountTier, viewer: &Viewer) -> bool {
        if !min_account_type.is_required() {
            return true;
        }
        viewer
            .id()
            .and_then(|id| self.tiers.tier(id))
            .unwrap_or(AccountTier::NONE)
            .satisfies(min_account_type)
    }

    /// Runs all checks for one spec and viewer.
    ///
    /// The authentication verdict is
    /// `visitor_allowed || viewer.is_authenticated()`; the structural
    /// legs follow the OR-gate rules described in the module docs.
    #[must_use]
    pub fn evaluate(&self, spec: &RequirementSpec, viewer: &Viewer) -> Verdict {
        let role_imposed = spec.min_role.is_required();
        let (owned, role_satisfied) = if spec.owner_only || role_imposed {
            (
                self.owner_fact(&spec.resource, viewer),
                role_imposed && self.role_fact(&spec.resource, viewer).satisfies(spec.min_role),
            )
        } else {
            (true, true)
        };
        Verdict {
            auth_satisfied: spec.visitor_allowed || viewer.is_authenticated(),
            owned,
            role_satisfied,
            account_satisfied: self.evaluate_account_type(spec.min_account_type, viewer),
        }
    }

    /// Resolved ownership fact, fail-closed.
    fn owner_fact(&self, resource: &ResourceRef, viewer: &Viewer) -> bool {
        viewer
            .id()
            .and_then(|id| self.ownership.is_owner(id, resource))
            .unwrap_or(false)
    }

    /// Resolved role level, fail-closed to [`RoleLevel::NONE`].
    fn role_fact(&self, resource: &ResourceRef, viewer: &Viewer) -> RoleLevel {
        viewer
            .id()
            .and_then(|id| self.roles.role_level(id, resource))
            .unwrap_or(RoleLevel::NONE)
    }
}
