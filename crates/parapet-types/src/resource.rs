//! Resource reference types.
//!
//! A [`ResourceRef`] names the entity an ownership or role check applies
//! to. The gate never dereferences it; lookups do.

use crate::ResourceId;
use serde::{Deserialize, Serialize};

/// The kind of protected resource.
///
/// A small closed set; the gate is not a general policy engine and only
/// distinguishes kinds so lookups can route the query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// A project. The default: requirement specs that name no resource
    /// are scoped to the surrounding project.
    #[default]
    Project,
    /// A group of projects sharing an access-control list.
    Group,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Project => write!(f, "project"),
            Self::Group => write!(f, "group"),
        }
    }
}

/// Reference to the entity that ownership/role checks apply to.
///
/// # Example
///
/// ```
/// use parapet_types::{ResourceId, ResourceKind, ResourceRef};
///
/// let resource = ResourceRef::project(ResourceId::new(7));
/// assert_eq!(resource.kind, ResourceKind::Project);
/// assert_eq!(resource.id.value(), 7);
/// assert_eq!(format!("{resource}"), "project/7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceRef {
    /// What kind of entity this refers to.
    pub kind: ResourceKind,
    /// Backend identifier within that kind.
    pub id: ResourceId,
}

impl ResourceRef {
    /// Creates a reference to a resource of the given kind.
    #[must_use]
    pub const fn new(kind: ResourceKind, id: ResourceId) -> Self {
        Self { kind, id }
    }

    /// Creates a project reference.
    #[must_use]
    pub const fn project(id: ResourceId) -> Self {
        Self::new(ResourceKind::Project, id)
    }

    /// Creates a group reference.
    #[must_use]
    pub const fn group(id: ResourceId) -> Self {
        Self::new(ResourceKind::Group, id)
    }
}

impl Default for ResourceRef {
    /// Use-sites that name no resource are scoped to a project with
    /// id 0.
    fn default() -> Self {
        Self::project(ResourceId::new(0))
    }
}

impl std::fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.kind, self.id.value())
    }
}
