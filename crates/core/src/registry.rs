//! Case registry and replay
//!
//! The registry holds cases in registration order. Building the fixture for
//! case `i` starts from `Default` values and replays, in order:
//!
//! 1. the shared setup of every case at positions `0..=i`
//! 2. the own setup of case `i`
//!
//! Nothing registered after `i` is ever visited. Each build allocates its
//! own SUT and state, so builds never observe each other.
//!
//! Registration needs `&mut self` while enumeration and building need
//! `&self`: all registration is finished before the first fixture is built.

use std::fmt;
use tracing::{debug, debug_span, trace};

use crate::case::{CaseDescriptor, CaseHandle};
use crate::config::ReplayConfig;
use crate::error::{CaseError, CaseResult};
use crate::fixture::{Fixture, PlannedStep, ReplayPlan};
use crate::iter::Cases;
use crate::step::{SetupStep, StepContext, StepKind};

/// `(origin_index, origin, kind, step)` for one step of a replay
type ReplayStep<'r, S, T, A> = (
    usize,
    &'r CaseDescriptor<S, T, A>,
    StepKind,
    &'r SetupStep<S, T>,
);

/// Ordered registry of test cases.
///
/// `S` is the system under test, `T` the auxiliary state threaded through
/// setup steps and `A` the assertion payload, which the registry stores and
/// hands back without interpreting.
///
/// # Example
///
/// ```
/// use casechain_core::CaseRegistry;
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Flags { x: i32, y: i32 }
///
/// let mut registry: CaseRegistry<(), Flags> = CaseRegistry::new();
/// registry.register("A").with_shared_setup(|_, _, s| s.x = 1);
/// registry
///     .register("B")
///     .with_shared_setup(|_, _, s| s.x = 2)
///     .with_own_setup(|_, _, s| s.y = 10);
///
/// let states: Vec<_> = registry
///     .cases()
///     .map(|(name, builder)| (name, builder.build().state))
///     .collect();
/// assert_eq!(states[0], ("A", Flags { x: 1, y: 0 }));
/// assert_eq!(states[1], ("B", Flags { x: 2, y: 10 }));
/// ```
pub struct CaseRegistry<S, T, A = ()> {
    cases: Vec<CaseDescriptor<S, T, A>>,
    config: ReplayConfig,
}

impl<S, T, A> CaseRegistry<S, T, A> {
    /// Create an empty registry with default config
    pub fn new() -> Self {
        Self::with_config(ReplayConfig::default())
    }

    /// Create an empty registry with the given config
    pub fn with_config(config: ReplayConfig) -> Self {
        Self {
            cases: Vec::new(),
            config,
        }
    }

    /// Create an empty registry configured from `CASECHAIN_CONFIG`.
    ///
    /// Uses defaults when the variable is unset or empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the named file cannot be read or parsed.
    pub fn from_env() -> CaseResult<Self> {
        Ok(Self::with_config(ReplayConfig::from_env()?))
    }

    /// Replay configuration
    pub fn config(&self) -> &ReplayConfig {
        &self.config
    }

    /// Append a case and return a handle to configure it.
    ///
    /// Names are not required to be unique.
    pub fn register(&mut self, name: impl Into<String>) -> CaseHandle<'_, S, T, A> {
        let name = name.into();
        let index = self.cases.len();
        trace!(target: "casechain::registry", case = %name, index, "Case registered");

        self.cases.push(CaseDescriptor::new(name));
        CaseHandle::new(index, &mut self.cases[index])
    }

    /// Number of registered cases
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// True when no case is registered
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Case names in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.cases.iter().map(|case| case.name())
    }

    /// Descriptor at `index`
    pub fn descriptor(&self, index: usize) -> Option<&CaseDescriptor<S, T, A>> {
        self.cases.get(index)
    }

    /// Lazily enumerate `(name, builder)` pairs in registration order.
    ///
    /// Each call returns a fresh sequence over the current cases. Dropping
    /// the iterator early stops enumeration; nothing needs cleaning up.
    pub fn cases(&self) -> Cases<'_, S, T, A> {
        Cases::new(self)
    }

    /// Describe the steps a replay for `index` applies, without running them
    pub fn plan(&self, index: usize) -> CaseResult<ReplayPlan> {
        self.check_index(index)?;
        Ok(self.plan_unchecked(index))
    }

    pub(crate) fn plan_unchecked(&self, index: usize) -> ReplayPlan {
        let steps = self
            .replay_steps(index)
            .map(|(origin_index, origin, kind, _)| PlannedStep {
                origin_index,
                origin: origin.name().to_string(),
                kind,
            })
            .collect();

        ReplayPlan {
            index,
            case: self.cases[index].name().to_string(),
            steps,
        }
    }

    fn check_index(&self, index: usize) -> CaseResult<()> {
        if index >= self.cases.len() {
            return Err(CaseError::UnknownCase {
                index,
                len: self.cases.len(),
            });
        }
        Ok(())
    }

    /// Steps applied for `index`, in application order.
    ///
    /// Callers guarantee `index < len`.
    fn replay_steps(&self, index: usize) -> impl Iterator<Item = ReplayStep<'_, S, T, A>> + '_ {
        let shared = self.cases[..=index].iter().enumerate().filter_map(|(j, case)| {
            case.shared_setup()
                .map(|step| (j, case, StepKind::Shared, step))
        });

        let target = &self.cases[index];
        let own = target
            .own_setup()
            .map(|step| (index, target, StepKind::Own, step));

        shared.chain(own)
    }
}

impl<S: Default, T: Default, A> CaseRegistry<S, T, A> {
    /// Build the fixture for the case at `index`
    pub fn build(&self, index: usize) -> CaseResult<Fixture<'_, S, T, A>> {
        self.check_index(index)?;
        Ok(self.replay(index))
    }

    /// Run the replay for `index`.
    ///
    /// Callers guarantee `index < len`. Panics raised by setup steps
    /// propagate unchanged.
    pub(crate) fn replay(&self, index: usize) -> Fixture<'_, S, T, A> {
        let target = &self.cases[index];
        let span = debug_span!(
            target: "casechain::replay",
            "replay",
            suite = self.config.suite.as_deref().unwrap_or_default(),
            case = target.name(),
            index
        );
        let _guard = span.enter();

        let mut sut = S::default();
        let mut state = T::default();
        let mut applied = 0usize;

        for (origin_index, origin, kind, step) in self.replay_steps(index) {
            if self.config.trace_steps {
                trace!(
                    target: "casechain::replay",
                    origin = origin.name(),
                    origin_index,
                    kind = kind.as_str(),
                    "Applying setup step"
                );
            }
            let ctx = StepContext::new(target.name(), index, origin.name(), origin_index, kind);
            step(&ctx, &mut sut, &mut state);
            applied += 1;
        }

        debug!(target: "casechain::replay", steps = applied, "Fixture built");

        Fixture {
            sut,
            state,
            assertion: target.assertion(),
        }
    }
}

impl<S, T, A> Default for CaseRegistry<S, T, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, T, A> fmt::Debug for CaseRegistry<S, T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaseRegistry")
            .field("cases", &self.names().collect::<Vec<_>>())
            .field("config", &self.config)
            .finish()
    }
}

impl<'r, S, T, A> IntoIterator for &'r CaseRegistry<S, T, A> {
    type Item = <Cases<'r, S, T, A> as Iterator>::Item;
    type IntoIter = Cases<'r, S, T, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases()
    }
}
