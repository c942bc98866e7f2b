//! The authorization gate.
//!
//! [`AuthorizationGate`] holds one requirement spec and turns verdicts
//! into render states and escalation dispatches. It is an immutable
//! value: evaluation takes the viewer and the evaluator as explicit
//! arguments, so the same gate can serve any number of render cycles
//! and threads.

use crate::{
    Cover, Decision, EscalationWorkflow, ModalPresenter, NavigationService, PermissionEvaluator,
    RenderMode, Rendering, RequirementSpec,
};
use parapet_types::Viewer;
use std::sync::Arc;

/// Decides whether a protected fragment renders, renders blocked, or
/// not at all, and routes the viewer to a remedial workflow when
/// blocked.
///
/// # Example
///
/// ```
/// use parapet_gate::{AuthorizationGate, PermissionEvaluator, RequirementSpec};
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
/// let gate = AuthorizationGate::new(RequirementSpec::default());
/// let evaluator = PermissionEvaluator::new(&Nobody, &Nobody, &Nobody);
///
/// let rendering = gate.guard("delete-button", &Viewer::Member(ViewerId::new(1)), &evaluator);
/// assert!(rendering.is_pass());
///
/// let rendering = gate.guard("delete-button", &Viewer::Visitor, &evaluator);
/// assert!(rendering.cover().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct AuthorizationGate {
    spec: RequirementSpec,
    debug: bool,
}

impl AuthorizationGate {
    /// Creates a gate for one requirement spec.
    #[must_use]
    pub fn new(spec: RequirementSpec) -> Self {
        Self { spec, debug: false }
    }

    /// Enables the diagnostic record: every decision emits one
    /// structured `tracing` event with the spec, the verdict, and the
    /// allow decision. Observability only, no behavioral effect.
    #[must_use]
    pub fn with_debug(mut self) -> Self {
        self.debug = true;
        self
    }

    /// The requirement spec this gate enforces.
    #[must_use]
    pub fn spec(&self) -> &RequirementSpec {
        &self.spec
    }

    /// Evaluates the spec for a viewer and derives the allow decision
    /// and prioritized deny reason.
    #[must_use]
    pub fn decide(&self, viewer: &Viewer, evaluator: &PermissionEvaluator<'_>) -> Decision {
        let verdict = evaluator.evaluate(&self.spec, viewer);
        let decision = Decision::from_verdict(verdict);
        if self.debug {
            tracing::debug!(
                spec = ?self.spec,
                verdict = ?decision.verdict(),
                allowed = decision.allowed(),
                "authorization gate decision"
            );
        }
        decision
    }

    /// Maps a decision onto the three-way render state.
    #[must_use]
    pub fn render<C>(&self, content: C, decision: &Decision) -> Rendering<C> {
        match decision.reason() {
            None => Rendering::Pass(content),
            Some(_) if self.spec.render_mode == RenderMode::Suppress => Rendering::Hidden,
            Some(reason) => Rendering::Covered {
                content,
                cover: Cover {
                    reason,
                    failed: decision.verdict().failed_checks(),
                },
            },
        }
    }

    /// Decides and renders in one step.
    #[must_use]
    pub fn guard<C>(
        &self,
        content: C,
        viewer: &Viewer,
        evaluator: &PermissionEvaluator<'_>,
    ) -> Rendering<C> {
        let decision = self.decide(viewer, evaluator);
        self.render(content, &decision)
    }

    /// Dispatches the escalation workflow for a denied decision.
    ///
    /// No-op when the decision allows, or when the deny reason has no
    /// remedial action. Each call builds and presents a fresh one-shot
    /// workflow (fire-and-forget navigation).
    pub fn escalate(
        &self,
        decision: &Decision,
        presenter: &dyn ModalPresenter,
        navigator: &Arc<dyn NavigationService>,
    ) {
        let Some(reason) = decision.reason() else {
            return;
        };
        if let Some(workflow) = EscalationWorkflow::for_reason(reason, self.spec.resource, navigator)
        {
            presenter.present(workflow);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        AccountTierLookup, DenyReason, FailedChecks, OwnershipLookup, RoleLookup, WorkflowKind,
    };
    use parapet_types::{AccountTier, ResourceId, ResourceRef, RoleLevel, ViewerId};
    use std::sync::Mutex;

    struct Fixture {
        owner: Option<ViewerId>,
        role: Option<RoleLevel>,
        tier: Option<AccountTier>,
    }

    impl OwnershipLookup for Fixture {
        fn is_owner(&self, viewer: ViewerId, _resource: &ResourceRef) -> Option<bool> {
            self.owner.map(|owner| owner == viewer)
        }
    }

    impl RoleLookup for Fixture {
        fn role_level(&self, _viewer: ViewerId, _resource: &ResourceRef) -> Option<RoleLevel> {
            self.role
        }
    }

    impl AccountTierLookup for Fixture {
        fn tier(&self, _viewer: ViewerId) -> Option<AccountTier> {
            self.tier
        }
    }

    fn nobody() -> Fixture {
        Fixture {
            owner: None,
            role: None,
            tier: None,
        }
    }

    #[derive(Default)]
    struct RecordingPresenter {
        kinds: Mutex<Vec<WorkflowKind>>,
    }

    impl ModalPresenter for RecordingPresenter {
        fn present(&self, workflow: EscalationWorkflow) {
            self.kinds
                .lock()
                .expect("presenter lock")
                .push(workflow.kind());
        }
    }

    struct NullNavigator;

    impl NavigationService for NullNavigator {
        fn go_to(&self, _path: &str) {}
    }

    #[test]
    fn open_spec_passes_authenticated_viewer() {
        let fixture = nobody();
        let evaluator = PermissionEvaluator::new(&fixture, &fixture, &fixture);
        let gate = AuthorizationGate::new(RequirementSpec::default());

        let rendering = gate.guard((), &Viewer::Member(ViewerId::new(1)), &evaluator);
        assert!(rendering.is_pass());
    }

    #[test]
    fn overlay_carries_reason_and_failed_checks() {
        let fixture = nobody();
        let evaluator = PermissionEvaluator::new(&fixture, &fixture, &fixture);
        let gate = AuthorizationGate::new(
            RequirementSpec::builder()
                .owner_only(true)
                .min_role(RoleLevel::DEVELOPER)
                .resource(ResourceRef::project(ResourceId::new(7)))
                .build(),
        );

        let rendering = gate.guard("panel", &Viewer::Member(ViewerId::new(1)), &evaluator);
        let cover = rendering.cover().expect("denied overlay");
        assert_eq!(cover.reason, DenyReason::NotOwnerOrRole);
        assert_eq!(cover.failed, FailedChecks::OWNERSHIP | FailedChecks::ROLE);
    }

    #[test]
    fn suppress_mode_renders_nothing() {
        let fixture = nobody();
        let evaluator = PermissionEvaluator::new(&fixture, &fixture, &fixture);
        let gate = AuthorizationGate::new(
            RequirementSpec::builder()
                .min_role(RoleLevel::DEVELOPER)
                .render_mode(RenderMode::Suppress)
                .build(),
        );

        let rendering = gate.guard("panel", &Viewer::Member(ViewerId::new(1)), &evaluator);
        assert!(rendering.is_hidden());
        assert!(rendering.cover().is_none());
    }

    #[test]
    fn escalate_is_noop_when_allowed() {
        let fixture = nobody();
        let evaluator = PermissionEvaluator::new(&fixture, &fixture, &fixture);
        let gate = AuthorizationGate::new(RequirementSpec::default());
        let decision = gate.decide(&Viewer::Member(ViewerId::new(1)), &evaluator);
        assert!(decision.allowed());

        let presenter = RecordingPresenter::default();
        let navigator: Arc<dyn NavigationService> = Arc::new(NullNavigator);
        gate.escalate(&decision, &presenter, &navigator);
        assert!(presenter.kinds.lock().expect("presenter lock").is_empty());
    }

    #[test]
    fn escalate_presents_workflow_for_reason() {
        let fixture = nobody();
        let evaluator = PermissionEvaluator::new(&fixture, &fixture, &fixture);
        let gate = AuthorizationGate::new(RequirementSpec::default());
        let decision = gate.decide(&Viewer::Visitor, &evaluator);
        assert_eq!(decision.reason(), Some(DenyReason::Unauthenticated));

        let presenter = RecordingPresenter::default();
        let navigator: Arc<dyn NavigationService> = Arc::new(NullNavigator);
        gate.escalate(&decision, &presenter, &navigator);
        assert_eq!(
            *presenter.kinds.lock().expect("presenter lock"),
            vec![WorkflowKind::AuthChoice]
        );
    }

    #[test]
    fn debug_flag_does_not_change_the_decision() {
        let fixture = nobody();
        let evaluator = PermissionEvaluator::new(&fixture, &fixture, &fixture);
        let spec = RequirementSpec::builder()
            .min_role(RoleLevel::DEVELOPER)
            .build();
        let plain = AuthorizationGate::new(spec);
        let debug = AuthorizationGate::new(spec).with_debug();
        let viewer = Viewer::Member(ViewerId::new(1));

        let a = plain.decide(&viewer, &evaluator);
        let b = debug.decide(&viewer, &evaluator);
        assert_eq!(a.allowed(), b.allowed());
        assert_eq!(a.reason(), b.reason());
        assert_eq!(a.verdict(), b.verdict());
    }
}
