//! Lazy scan adapter and its per-traversal state machine
//!
//! The adapter captures (initial, source, combiner) and is immutable
//! after construction; all mutation lives in the iterator. Per step the
//! iterator holds exactly one pending accumulator and one upstream
//! cursor, so driving it `k` steps costs O(1) space regardless of `k`.

use std::iter::FusedIterator;

use tracing::trace;

use super::LazySequence;

/// Lazy running-fold adapter over a [`LazySequence`].
///
/// Created by [`LazySequence::scan`]; construction cannot fail and
/// performs no iteration. The adapter is itself a [`LazySequence`], so
/// further chained operations (such as [`LazySequence::prefix`]) stay
/// lazy, and it supports any number of independent traversals provided
/// the source does.
pub struct LazyScan<S, A, F> {
    initial: A,
    source: S,
    combine: F,
}

impl<S, A, F> LazyScan<S, A, F>
where
    S: LazySequence,
    A: Clone,
    F: Fn(A, S::Item) -> A + Clone,
{
    pub(crate) fn new(initial: A, source: S, combine: F) -> Self {
        trace!("constructed lazy scan adapter");
        Self {
            initial,
            source,
            combine,
        }
    }
}

impl<S, A, F> LazySequence for LazyScan<S, A, F>
where
    S: LazySequence,
    A: Clone,
    F: Fn(A, S::Item) -> A + Clone,
{
    type Item = A;
    type Iter = LazyScanIter<S::Iter, A, F>;

    fn fresh_iter(&self) -> Self::Iter {
        LazyScanIter {
            upstream: self.source.fresh_iter(),
            pending: Some(self.initial.clone()),
            started: false,
            combine: self.combine.clone(),
        }
    }
}

impl<'a, S, A, F> IntoIterator for &'a LazyScan<S, A, F>
where
    S: LazySequence,
    A: Clone,
    F: Fn(A, S::Item) -> A + Clone,
{
    type Item = A;
    type IntoIter = LazyScanIter<S::Iter, A, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.fresh_iter()
    }
}

impl<S, A, F> std::fmt::Debug for LazyScan<S, A, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyScan").finish_non_exhaustive()
    }
}

/// One traversal of a [`LazyScan`].
///
/// State machine with three implicit states:
/// - not started: `pending` holds the untouched initial value
/// - running: `pending` holds the last value returned
/// - exhausted: `pending` is empty, every call returns `None`
///
/// The first call returns the initial value without touching the
/// upstream cursor. Every later call pulls exactly one upstream element
/// and returns the freshly combined value in the same call; there is no
/// one-step lookahead, so the combiner runs only when its result is
/// actually demanded.
pub struct LazyScanIter<I, A, F> {
    upstream: I,
    /// The last value returned, threaded into the next combiner call.
    /// Empty once the upstream is exhausted; never refilled.
    pending: Option<A>,
    started: bool,
    combine: F,
}

impl<I, A, F> Iterator for LazyScanIter<I, A, F>
where
    I: Iterator,
    A: Clone,
    F: Fn(A, I::Item) -> A,
{
    type Item = A;

    fn next(&mut self) -> Option<A> {
        if !self.started {
            self.started = true;
            return self.pending.clone();
        }

        let prev = self.pending.take()?;
        match self.upstream.next() {
            Some(element) => {
                let next = (self.combine)(prev, element);
                self.pending = Some(next.clone());
                Some(next)
            }
            None => {
                // pending stays empty: exhaustion is permanent
                trace!("lazy scan traversal exhausted");
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.pending.is_none() {
            return (0, Some(0));
        }
        // One emission per remaining upstream element, plus the initial
        // value if it has not been handed out yet.
        let extra = usize::from(!self.started);
        let (lower, upper) = self.upstream.size_hint();
        (
            lower.saturating_add(extra),
            upper.and_then(|u| u.checked_add(extra)),
        )
    }
}

impl<I, A, F> FusedIterator for LazyScanIter<I, A, F>
where
    I: Iterator,
    A: Clone,
    F: Fn(A, I::Item) -> A,
{
}

impl<I, A, F> std::fmt::Debug for LazyScanIter<I, A, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LazyScanIter")
            .field("started", &self.started)
            .field("exhausted", &self.pending.is_none())
            .finish_non_exhaustive()
    }
}
