//! Build results and replay plans

use serde::Serialize;

use crate::step::StepKind;

/// Fully constructed SUT, state and assertion for one case.
///
/// Every build produces a fresh fixture; the assertion is borrowed from the
/// registry and is `None` when the case never set one.
#[derive(Debug)]
pub struct Fixture<'r, S, T, A> {
    /// System under test after replay
    pub sut: S,
    /// Auxiliary state after replay
    pub state: T,
    /// Assertion payload of the target case
    pub assertion: Option<&'r A>,
}

impl<'r, S, T, A> Fixture<'r, S, T, A> {
    /// Split into `(sut, state, assertion)`
    pub fn into_parts(self) -> (S, T, Option<&'r A>) {
        (self.sut, self.state, self.assertion)
    }
}

/// One step a replay would apply
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedStep {
    /// Position of the case that registered the step
    pub origin_index: usize,
    /// Name of the case that registered the step
    pub origin: String,
    /// Slot the step was registered in
    pub kind: StepKind,
}

/// Ordered list of the steps a replay applies for one case
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayPlan {
    /// Position of the case being built
    pub index: usize,
    /// Name of the case being built
    pub case: String,
    /// Steps in application order
    pub steps: Vec<PlannedStep>,
}

impl ReplayPlan {
    /// Number of steps the replay applies
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True when the replay applies no step at all
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
