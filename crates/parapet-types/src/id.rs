//! Identifier types for parapet.
//!
//! Identifiers are plain integers: the gate sits in front of a backend
//! that hands out numeric ids for viewers and resources, and the gate
//! never mints ids of its own. Newtypes keep the two id spaces from
//! being mixed up at call sites.

use serde::{Deserialize, Serialize};

/// Identifier for a viewer (an authenticated account).
///
/// Anonymous visitors have no `ViewerId`; see [`crate::Viewer`].
///
/// # Example
///
/// ```
/// use parapet_types::ViewerId;
///
/// let id = ViewerId::new(42);
/// assert_eq!(id.value(), 42);
/// assert_eq!(format!("{id}"), "viewer:42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewerId(pub u64);

impl ViewerId {
    /// Creates a viewer id from its backend value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw backend value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ViewerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "viewer:{}", self.0)
    }
}

impl From<u64> for ViewerId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Identifier for a protected resource (project, group, ...).
///
/// The id is only meaningful together with a [`crate::ResourceKind`];
/// see [`crate::ResourceRef`].
///
/// # Example
///
/// ```
/// use parapet_types::ResourceId;
///
/// let id = ResourceId::new(7);
/// assert_eq!(id.value(), 7);
/// assert_eq!(format!("{id}"), "resource:7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceId(pub u64);

impl ResourceId {
    /// Creates a resource id from its backend value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw backend value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "resource:{}", self.0)
    }
}

impl From<u64> for ResourceId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}
