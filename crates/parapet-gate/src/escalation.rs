//! Escalation workflows.
//!
//! When a covered fragment is activated, the gate offers the viewer a
//! remedial action matched to the deny reason: authenticate, upgrade
//! the account, or fork the project to gain ownership. The gate only
//! builds a workflow descriptor; the [`ModalPresenter`] owns rendering
//! it and the [`NavigationService`] owns the navigation the callbacks
//! issue.
//!
//! # Architecture
//!
//! ```text
//! DenyReason ──▶ EscalationWorkflow {kind, on_accept, on_decline?}
//!                        │
//!                        ▼
//!                ModalPresenter::present          ← host application
//!                        │ (viewer accepts/declines)
//!                        ▼
//!                NavigationService::go_to(path)   ← host application
//! ```
//!
//! Navigation is fire-and-forget: each activation builds and issues its
//! own one-shot callbacks, with no de-duplication and no tracking
//! afterward.

use crate::DenyReason;
use parapet_types::ResourceRef;
use std::sync::Arc;

/// Escalation navigation targets.
///
/// Opaque to the gate; the navigation service interprets them.
pub mod routes {
    use parapet_types::ResourceId;

    /// Registration flow.
    pub const REGISTER: &str = "/register";

    /// Login flow that returns the viewer to the original location.
    pub const LOGIN_RETURN: &str = "/login?redirect=goback";

    /// Account upgrade flow.
    pub const ACCOUNT_UPGRADE: &str = "/account/upgrade";

    /// Fork-creation flow for the given project.
    #[must_use]
    pub fn fork(project: ResourceId) -> String {
        format!("/my-projects/{}/fork", project.value())
    }
}

/// Issues a navigation to an escalation flow.
///
/// Paths are opaque strings the gate does not validate. If activations
/// race, each issues its own navigation; de-duplication is the
/// implementation's business.
pub trait NavigationService: Send + Sync {
    /// Navigates to the given path.
    fn go_to(&self, path: &str);
}

/// Surfaces an escalation workflow to the viewer.
///
/// The presenter owns all rendering; the gate supplies only the
/// descriptor.
pub trait ModalPresenter {
    /// Presents the workflow. The presenter invokes
    /// [`EscalationWorkflow::accept`] or
    /// [`EscalationWorkflow::decline`] based on the viewer's choice.
    fn present(&self, workflow: EscalationWorkflow);
}

/// Which remedial action a workflow offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowKind {
    /// Binary choice: log in (accept) or register (decline).
    AuthChoice,
    /// Upgrade the account plan.
    UpgradeAccount,
    /// Fork the project to gain ownership.
    ForkProject,
}

impl WorkflowKind {
    /// Prompt title for the presenter.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::AuthChoice => "You need an account",
            Self::UpgradeAccount => "Upgrade your account",
            Self::ForkProject => "Fork this project",
        }
    }

    /// Label for the accepting action.
    #[must_use]
    pub fn accept_label(&self) -> &'static str {
        match self {
            Self::AuthChoice => "Login",
            Self::UpgradeAccount => "Upgrade",
            Self::ForkProject => "Fork",
        }
    }

    /// Label for the declining action, when the workflow has one.
    #[must_use]
    pub fn decline_label(&self) -> Option<&'static str> {
        match self {
            Self::AuthChoice => Some("Register"),
            _ => None,
        }
    }
}

type Navigate = Box<dyn FnOnce() + Send>;

/// A remedial workflow descriptor handed to the [`ModalPresenter`].
///
/// Callbacks are one-shot: accepting or declining consumes the
/// workflow.
pub struct EscalationWorkflow {
    kind: WorkflowKind,
    on_accept: Navigate,
    on_decline: Option<Navigate>,
}

impl EscalationWorkflow {
    /// Builds the workflow for a deny reason, or `None` when the
    /// reason has no remedial action.
    ///
    /// The mapping mirrors the deny-reason priority, so a viewer
    /// failing several checks at once is offered the remedy for the
    /// most fundamental gap:
    ///
    /// | Reason | Workflow |
    /// |--------|----------|
    /// | `Unauthenticated` | login (accept) / register (decline) |
    /// | `InsufficientAccountTier` | account upgrade |
    /// | `NotOwnerOrRole` | fork of the spec's project |
    /// | `PermissionRequired` | none |
    #[must_use]
    pub fn for_reason(
        reason: DenyReason,
        resource: ResourceRef,
        navigator: &Arc<dyn NavigationService>,
    ) -> Option<Self> {
        match reason {
            DenyReason::Unauthenticated => {
                let login = Arc::clone(navigator);
                let register = Arc::clone(navigator);
                Some(Self {
                    kind: WorkflowKind::AuthChoice,
                    on_accept: Box::new(move || login.go_to(routes::LOGIN_RETURN)),
                    on_decline: Some(Box::new(move || register.go_to(routes::REGISTER))),
                })
            }
            DenyReason::InsufficientAccountTier => {
                let upgrade = Arc::clone(navigator);
                Some(Self {
                    kind: WorkflowKind::UpgradeAccount,
                    on_accept: Box::new(move || upgrade.go_to(routes::ACCOUNT_UPGRADE)),
                    on_decline: None,
                })
            }
            DenyReason::NotOwnerOrRole => {
                let fork = Arc::clone(navigator);
                let project = resource.id;
                Some(Self {
                    kind: WorkflowKind::ForkProject,
                    on_accept: Box::new(move || fork.go_to(&routes::fork(project))),
                    on_decline: None,
                })
            }
            DenyReason::PermissionRequired => None,
        }
    }

    /// The remedial action this workflow offers.
    #[must_use]
    pub fn kind(&self) -> WorkflowKind {
        self.kind
    }

    /// Returns `true` if the workflow has a declining action.
    #[must_use]
    pub fn has_decline(&self) -> bool {
        self.on_decline.is_some()
    }

    /// The viewer accepted; issues the navigation.
    pub fn accept(self) {
        (self.on_accept)();
    }

    /// The viewer declined; issues the decline navigation when the
    /// workflow has one, otherwise does nothing.
    pub fn decline(self) {
        if let Some(on_decline) = self.on_decline {
            on_decline();
        }
    }
}

impl std::fmt::Debug for EscalationWorkflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EscalationWorkflow")
            .field("kind", &self.kind)
            .field("has_decline", &self.on_decline.is_some())
            .finish()
    }
}
