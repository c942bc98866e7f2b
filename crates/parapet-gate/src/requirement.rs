//! Requirement specification.
//!
//! A [`RequirementSpec`] declares what a protected fragment demands:
//! ownership, a minimum role, a minimum account tier, whether visitors
//! are tolerated, and how a denial should render. It is constructed by
//! the use-site, immutable for that use, and re-evaluated whenever the
//! viewer or the backing lookups change.
//!
//! Two ways in:
//!
//! - [`RequirementSpec::builder`] for in-process callers with typed
//!   values (infallible).
//! - [`TryNew`] from a [`RequirementConfig`] of raw integers, as they
//!   arrive from deserialized props/config. Out-of-range thresholds are
//!   rejected with [`InvalidSpec`], never coerced.

use crate::InvalidSpec;
use parapet_types::{AccountTier, ResourceRef, RoleLevel, TryNew};
use serde::{Deserialize, Serialize};

/// What to render when the gate denies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Render the children under a blocking cover that carries the deny
    /// message and offers escalation on activation.
    #[default]
    Overlay,
    /// Render nothing at all.
    Suppress,
}

/// Declarative access requirements for one protected fragment.
///
/// `min_role` and `min_account_type` are independently optional (zero
/// means "not required"). `owner_only` and `min_role` are independent,
/// non-exclusive checks; the gate combines them with OR: ownership and
/// a sufficient role are alternative routes to the same capability.
/// Account tier is an orthogonal axis combined with AND.
///
/// # Example
///
/// ```
/// use parapet_gate::RequirementSpec;
/// use parapet_types::{ResourceId, ResourceRef, RoleLevel};
///
/// let spec = RequirementSpec::builder()
///     .min_role(RoleLevel::DEVELOPER)
///     .resource(ResourceRef::project(ResourceId::new(7)))
///     .build();
///
/// assert!(!spec.owner_only);
/// assert_eq!(spec.min_role, RoleLevel::DEVELOPER);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementSpec {
    /// Only the resource owner may act.
    pub owner_only: bool,
    /// Minimum role level; [`RoleLevel::NONE`] means not required.
    pub min_role: RoleLevel,
    /// Minimum account tier; [`AccountTier::NONE`] means not required.
    pub min_account_type: AccountTier,
    /// The entity ownership/role checks apply to.
    pub resource: ResourceRef,
    /// Unauthenticated viewers are not rejected for lack of
    /// authentication.
    pub visitor_allowed: bool,
    /// Deny rendering behavior.
    pub render_mode: RenderMode,
}

impl Default for RequirementSpec {
    /// Nothing required, a project resource with id 0, visitors
    /// rejected, overlay on deny.
    fn default() -> Self {
        Self {
            owner_only: false,
            min_role: RoleLevel::NONE,
            min_account_type: AccountTier::NONE,
            resource: ResourceRef::default(),
            visitor_allowed: false,
            render_mode: RenderMode::Overlay,
        }
    }
}

impl RequirementSpec {
    /// Starts a builder with the defaults.
    #[must_use]
    pub fn builder() -> RequirementSpecBuilder {
        RequirementSpecBuilder::default()
    }

    /// Returns `true` if this spec imposes no structural requirement
    /// beyond authentication.
    #[must_use]
    pub fn is_open(&self) -> bool {
        !self.owner_only && !self.min_role.is_required() && !self.min_account_type.is_required()
    }
}

/// Raw requirement values before validation.
///
/// Thresholds are signed so that out-of-range input from external
/// sources is representable and can be rejected explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementConfig {
    /// See [`RequirementSpec::owner_only`].
    #[serde(default)]
    pub owner_only: bool,
    /// Raw minimum role level.
    #[serde(default)]
    pub min_role: i64,
    /// Raw minimum account tier.
    #[serde(default)]
    pub min_account_type: i64,
    /// See [`RequirementSpec::resource`].
    #[serde(default)]
    pub resource: ResourceRef,
    /// See [`RequirementSpec::visitor_allowed`].
    #[serde(default)]
    pub visitor_allowed: bool,
    /// See [`RequirementSpec::render_mode`].
    #[serde(default)]
    pub render_mode: RenderMode,
}

impl TryNew for RequirementSpec {
    type Error = InvalidSpec;
    type Args = RequirementConfig;

    /// Validates raw thresholds and builds a typed spec.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSpec`] when a threshold is negative or exceeds
    /// its scale.
    fn try_new(config: RequirementConfig) -> Result<Self, Self::Error> {
        let min_role = validate_role(config.min_role)?;
        let min_account_type = validate_tier(config.min_account_type)?;
        Ok(Self {
            owner_only: config.owner_only,
            min_role,
            min_account_type,
            resource: config.resource,
            visitor_allowed: config.visitor_allowed,
            render_mode: config.render_mode,
        })
    }
}

fn validate_role(raw: i64) -> Result<RoleLevel, InvalidSpec> {
    if raw < 0 {
        return Err(InvalidSpec::NegativeRole(raw));
    }
    if raw > i64::from(u8::MAX) {
        return Err(InvalidSpec::RoleTooLarge {
            value: raw,
            max: u8::MAX,
        });
    }
    Ok(RoleLevel::new(raw as u8))
}

fn validate_tier(raw: i64) -> Result<AccountTier, InvalidSpec> {
    if raw < 0 {
        return Err(InvalidSpec::NegativeTier(raw));
    }
    if raw > i64::from(u8::MAX) {
        return Err(InvalidSpec::TierTooLarge {
            value: raw,
            max: u8::MAX,
        });
    }
    Ok(AccountTier::new(raw as u8))
}

/// Builder for [`RequirementSpec`] with typed setters.
#[derive(Debug, Clone, Default)]
pub struct RequirementSpecBuilder {
    spec: RequirementSpec,
}

impl RequirementSpecBuilder {
    /// Requires resource ownership.
    #[must_use]
    pub fn owner_only(mut self, owner_only: bool) -> Self {
        self.spec.owner_only = owner_only;
        self
    }

    /// Requires a minimum role level.
    #[must_use]
    pub fn min_role(mut self, min_role: RoleLevel) -> Self {
        self.spec.min_role = min_role;
        self
    }

    /// Requires a minimum account tier.
    #[must_use]
    pub fn min_account_type(mut self, min_account_type: AccountTier) -> Self {
        self.spec.min_account_type = min_account_type;
        self
    }

    /// Scopes ownership/role checks to the given resource.
    #[must_use]
    pub fn resource(mut self, resource: ResourceRef) -> Self {
        self.spec.resource = resource;
        self
    }

    /// Tolerates unauthenticated viewers.
    #[must_use]
    pub fn visitor_allowed(mut self, visitor_allowed: bool) -> Self {
        self.spec.visitor_allowed = visitor_allowed;
        self
    }

    /// Sets the deny rendering behavior.
    #[must_use]
    pub fn render_mode(mut self, render_mode: RenderMode) -> Self {
        self.spec.render_mode = render_mode;
        self
    }

    /// Finishes the spec.
    #[must_use]
    pub fn build(self) -> RequirementSpec {
        self.spec
    }
}
