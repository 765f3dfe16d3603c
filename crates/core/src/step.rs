//! Setup steps and the context they run in

use serde::Serialize;
use std::fmt;

/// Boxed setup step.
///
/// Receives the SUT and the state by mutable reference so changes persist
/// across the replay chain.
pub type SetupStep<S, T> = Box<dyn Fn(&StepContext<'_>, &mut S, &mut T) + Send + Sync>;

/// Which slot of a case a step was registered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Replayed for the owning case and every later case
    Shared,
    /// Applied only when building the owning case
    Own,
}

impl StepKind {
    /// Get the name used in logs and serialized plans
    pub fn as_str(&self) -> &'static str {
        match self {
            StepKind::Shared => "shared",
            StepKind::Own => "own",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Context handed to every setup step during a replay.
///
/// `target` is the case whose fixture is being built; `origin` is the case
/// that registered the running step. For the last steps of a replay both
/// point at the same case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepContext<'a> {
    target: &'a str,
    target_index: usize,
    origin: &'a str,
    origin_index: usize,
    kind: StepKind,
}

impl<'a> StepContext<'a> {
    pub(crate) fn new(
        target: &'a str,
        target_index: usize,
        origin: &'a str,
        origin_index: usize,
        kind: StepKind,
    ) -> Self {
        Self {
            target,
            target_index,
            origin,
            origin_index,
            kind,
        }
    }

    /// Name of the case being built
    pub fn target(&self) -> &'a str {
        self.target
    }

    /// Position of the case being built
    pub fn target_index(&self) -> usize {
        self.target_index
    }

    /// Name of the case that registered this step
    pub fn origin(&self) -> &'a str {
        self.origin
    }

    /// Position of the case that registered this step
    pub fn origin_index(&self) -> usize {
        self.origin_index
    }

    /// Slot the step was registered in
    pub fn kind(&self) -> StepKind {
        self.kind
    }

    /// True when the step belongs to the case being built
    pub fn is_target(&self) -> bool {
        self.origin_index == self.target_index
    }
}
