//! Case descriptors and the fluent handle returned by registration

use std::fmt;

use crate::step::{SetupStep, StepContext};

/// One registered test case.
///
/// Created by [`CaseRegistry::register`](crate::CaseRegistry::register) and
/// configured through a [`CaseHandle`]. Read-only once the registry is
/// borrowed for building.
pub struct CaseDescriptor<S, T, A> {
    name: String,
    shared_setup: Option<SetupStep<S, T>>,
    own_setup: Option<SetupStep<S, T>>,
    assertion: Option<A>,
}

impl<S, T, A> CaseDescriptor<S, T, A> {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            shared_setup: None,
            own_setup: None,
            assertion: None,
        }
    }

    /// Display label of the case
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True when a shared setup step is set
    pub fn has_shared_setup(&self) -> bool {
        self.shared_setup.is_some()
    }

    /// True when an own setup step is set
    pub fn has_own_setup(&self) -> bool {
        self.own_setup.is_some()
    }

    /// Assertion payload, if one was set
    pub fn assertion(&self) -> Option<&A> {
        self.assertion.as_ref()
    }

    pub(crate) fn shared_setup(&self) -> Option<&SetupStep<S, T>> {
        self.shared_setup.as_ref()
    }

    pub(crate) fn own_setup(&self) -> Option<&SetupStep<S, T>> {
        self.own_setup.as_ref()
    }
}

impl<S, T, A: fmt::Debug> fmt::Debug for CaseDescriptor<S, T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaseDescriptor")
            .field("name", &self.name)
            .field("shared_setup", &self.has_shared_setup())
            .field("own_setup", &self.has_own_setup())
            .field("assertion", &self.assertion)
            .finish()
    }
}

/// Mutable handle to a freshly registered case.
///
/// Every setter replaces the previous value (last write wins) and returns
/// the handle so calls can be chained:
///
/// ```
/// use casechain_core::CaseRegistry;
///
/// #[derive(Default)]
/// struct Counter { value: i32 }
///
/// let mut registry: CaseRegistry<Counter, Vec<&'static str>, i32> = CaseRegistry::new();
/// registry
///     .register("starts at one")
///     .with_shared_setup(|_, sut, _| sut.value = 1)
///     .with_own_setup(|_, _, log| log.push("own"))
///     .with_assertion(1);
/// assert_eq!(registry.len(), 1);
/// ```
pub struct CaseHandle<'r, S, T, A> {
    index: usize,
    case: &'r mut CaseDescriptor<S, T, A>,
}

impl<'r, S, T, A> CaseHandle<'r, S, T, A> {
    pub(crate) fn new(index: usize, case: &'r mut CaseDescriptor<S, T, A>) -> Self {
        Self { index, case }
    }

    /// Position of the case in registration order
    pub fn index(&self) -> usize {
        self.index
    }

    /// Display label of the case
    pub fn name(&self) -> &str {
        self.case.name()
    }

    /// Set the step replayed for this case and every later case
    pub fn with_shared_setup<F>(self, step: F) -> Self
    where
        F: Fn(&StepContext<'_>, &mut S, &mut T) + Send + Sync + 'static,
    {
        self.case.shared_setup = Some(Box::new(step));
        self
    }

    /// Set the step applied only when building this case
    pub fn with_own_setup<F>(self, step: F) -> Self
    where
        F: Fn(&StepContext<'_>, &mut S, &mut T) + Send + Sync + 'static,
    {
        self.case.own_setup = Some(Box::new(step));
        self
    }

    /// Set the assertion payload handed back in the fixture
    pub fn with_assertion(self, assertion: A) -> Self {
        self.case.assertion = Some(assertion);
        self
    }
}

impl<S, T, A: fmt::Debug> fmt::Debug for CaseHandle<'_, S, T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaseHandle")
            .field("index", &self.index)
            .field("case", &self.case)
            .finish()
    }
}
