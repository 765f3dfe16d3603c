//! Lazy enumeration of registered cases

use std::fmt;
use std::iter::FusedIterator;

use crate::fixture::{Fixture, ReplayPlan};
use crate::registry::CaseRegistry;

/// Iterator over `(name, builder)` pairs, in registration order.
///
/// Returned by [`CaseRegistry::cases`]. Entries are produced on demand;
/// stopping early (`break`, `take`, dropping the iterator) is always fine.
pub struct Cases<'r, S, T, A> {
    registry: &'r CaseRegistry<S, T, A>,
    next: usize,
    end: usize,
}

impl<'r, S, T, A> Cases<'r, S, T, A> {
    pub(crate) fn new(registry: &'r CaseRegistry<S, T, A>) -> Self {
        Self {
            registry,
            next: 0,
            end: registry.len(),
        }
    }
}

impl<'r, S, T, A> Iterator for Cases<'r, S, T, A> {
    type Item = (&'r str, CaseBuilder<'r, S, T, A>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let index = self.next;
        self.next += 1;

        let case = self.registry.descriptor(index)?;
        Some((
            case.name(),
            CaseBuilder {
                registry: self.registry,
                index,
            },
        ))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl<S, T, A> ExactSizeIterator for Cases<'_, S, T, A> {}

impl<S, T, A> FusedIterator for Cases<'_, S, T, A> {}

impl<S, T, A> fmt::Debug for Cases<'_, S, T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cases")
            .field("next", &self.next)
            .field("end", &self.end)
            .finish()
    }
}

/// Deferred fixture construction for one case.
///
/// Nothing runs until [`build`](CaseBuilder::build) is called, and every
/// call replays from scratch.
pub struct CaseBuilder<'r, S, T, A> {
    registry: &'r CaseRegistry<S, T, A>,
    index: usize,
}

impl<'r, S, T, A> CaseBuilder<'r, S, T, A> {
    /// Position of the case
    pub fn index(&self) -> usize {
        self.index
    }

    /// Display label of the case
    pub fn name(&self) -> &'r str {
        self.registry
            .descriptor(self.index)
            .map(|case| case.name())
            .unwrap_or_default()
    }

    /// Steps [`build`](CaseBuilder::build) applies, in order
    pub fn plan(&self) -> ReplayPlan {
        self.registry.plan_unchecked(self.index)
    }
}

impl<'r, S: Default, T: Default, A> CaseBuilder<'r, S, T, A> {
    /// Replay setup and return a fresh fixture
    pub fn build(&self) -> Fixture<'r, S, T, A> {
        self.registry.replay(self.index)
    }
}

impl<S, T, A> Clone for CaseBuilder<'_, S, T, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, T, A> Copy for CaseBuilder<'_, S, T, A> {}

impl<S, T, A> fmt::Debug for CaseBuilder<'_, S, T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaseBuilder")
            .field("index", &self.index)
            .field("name", &self.name())
            .finish()
    }
}
