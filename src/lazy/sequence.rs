//! The lazy-sequence capability and the entry-point wrapper
//!
//! A [`LazySequence`] can hand out any number of fresh, independent
//! traversals of itself. The trait bound is the laziness marker:
//! generic code that must stay lazy asks for `S: LazySequence` and can
//! never be handed an eager collection by mistake. Combinators declared
//! here return types that implement the trait again, so chains built
//! from them stay lazy end to end.

use tracing::trace;

use super::{LazyScan, Prefix};

/// A sequence that can be traversed from the start any number of times.
///
/// Every call to [`fresh_iter`](Self::fresh_iter) returns an
/// independent iterator positioned before the first element; advancing
/// one traversal never affects another. Nothing is computed until a
/// returned iterator is driven.
pub trait LazySequence {
    /// Element type produced by each traversal.
    type Item;

    /// Iterator type for one traversal.
    type Iter: Iterator<Item = Self::Item>;

    /// Start a fresh, independent traversal from the initial state.
    fn fresh_iter(&self) -> Self::Iter;

    /// Lazy running fold over this sequence.
    ///
    /// Captures `initial`, `self`, and `combine` without iterating;
    /// each traversal of the returned adapter yields `initial`, then
    /// one new partial fold per upstream element. Safe over infinite
    /// upstreams: the consumer decides how far to drive.
    ///
    /// `A: Clone` because each partial result is both emitted and
    /// threaded onward; `F: Fn + Clone` because the combiner is shared
    /// read-only across all traversals.
    ///
    /// ```
    /// use scanfold::{lazy, LazySequence};
    ///
    /// let running = lazy(1..).scan(0, |acc, x| acc + x);
    /// let six: Vec<i32> = running.fresh_iter().take(6).collect();
    /// assert_eq!(six, [0, 1, 3, 6, 10, 15]);
    /// ```
    fn scan<A, F>(self, initial: A, combine: F) -> LazyScan<Self, A, F>
    where
        Self: Sized,
        A: Clone,
        F: Fn(A, Self::Item) -> A + Clone,
    {
        LazyScan::new(initial, self, combine)
    }

    /// Lazy truncation to the first `len` elements.
    ///
    /// Pulls at most one upstream element per emitted element and at
    /// most `len` in total, so an infinite sequence can be cut down to
    /// a finite one before materializing.
    fn prefix(self, len: usize) -> Prefix<Self>
    where
        Self: Sized,
    {
        Prefix::new(self, len)
    }
}

/// Re-iterable view over a cloneable iterator source.
///
/// This is the entry point that plugs std sequences (slices, ranges,
/// including infinite ranges like `1..`) into the [`LazySequence`]
/// machinery: each fresh traversal is a clone of the stored iterator.
#[derive(Clone)]
pub struct Lazy<I> {
    source: I,
}

/// Wrap an ordered source into a re-iterable lazy sequence.
///
/// The source's iterator must be `Clone`; the clone taken at wrap time
/// is the initial state every fresh traversal restarts from.
pub fn lazy<I>(source: I) -> Lazy<I::IntoIter>
where
    I: IntoIterator,
    I::IntoIter: Clone,
{
    trace!("wrapped source into lazy sequence");
    Lazy {
        source: source.into_iter(),
    }
}

impl<I> LazySequence for Lazy<I>
where
    I: Iterator + Clone,
{
    type Item = I::Item;
    type Iter = I;

    fn fresh_iter(&self) -> I {
        self.source.clone()
    }
}

impl<'a, I> IntoIterator for &'a Lazy<I>
where
    I: Iterator + Clone,
{
    type Item = I::Item;
    type IntoIter = I;

    fn into_iter(self) -> I {
        self.fresh_iter()
    }
}

impl<I> std::fmt::Debug for Lazy<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lazy").finish_non_exhaustive()
    }
}
