//! Lazy truncation to a finite prefix
//!
//! The consumer-side guard that makes infinite scans materializable:
//! cut the sequence down to `len` elements first, then collect.

use std::iter::FusedIterator;

use super::LazySequence;

/// Lazy view of the first `len` elements of a [`LazySequence`].
///
/// Created by [`LazySequence::prefix`]. Itself a [`LazySequence`], so
/// the truncated view stays re-iterable and chainable.
#[derive(Clone)]
pub struct Prefix<S> {
    source: S,
    len: usize,
}

impl<S: LazySequence> Prefix<S> {
    pub(crate) fn new(source: S, len: usize) -> Self {
        Self { source, len }
    }
}

impl<S: LazySequence> LazySequence for Prefix<S> {
    type Item = S::Item;
    type Iter = PrefixIter<S::Iter>;

    fn fresh_iter(&self) -> Self::Iter {
        PrefixIter {
            upstream: self.source.fresh_iter(),
            remaining: self.len,
        }
    }
}

impl<'a, S: LazySequence> IntoIterator for &'a Prefix<S> {
    type Item = S::Item;
    type IntoIter = PrefixIter<S::Iter>;

    fn into_iter(self) -> Self::IntoIter {
        self.fresh_iter()
    }
}

impl<S> std::fmt::Debug for Prefix<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Prefix")
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

/// One traversal of a [`Prefix`]: at most `remaining` more emissions,
/// one upstream pull each.
pub struct PrefixIter<I> {
    upstream: I,
    remaining: usize,
}

impl<I: Iterator> Iterator for PrefixIter<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.remaining == 0 {
            return None;
        }
        match self.upstream.next() {
            Some(value) => {
                self.remaining -= 1;
                Some(value)
            }
            None => {
                // Upstream ended early; stop pulling from it
                self.remaining = 0;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.upstream.size_hint();
        let upper = upper.map_or(self.remaining, |u| u.min(self.remaining));
        (lower.min(self.remaining), Some(upper))
    }
}

impl<I: Iterator> FusedIterator for PrefixIter<I> {}

impl<I> std::fmt::Debug for PrefixIter<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrefixIter")
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}
