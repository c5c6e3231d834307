//! Eager (materializing) scan
//!
//! One-shot running fold over a finite input:
//! - Result holds all `n + 1` partial folds, `result[0] == initial`
//! - Exactly one combiner call per input element, left to right
//! - O(n) time, O(n) space; the caller never observes a partial result

/// Running fold over a finite input, fully materialized.
///
/// Builds a `Vec` starting with `initial`; for each element `e` of the
/// input in order, appends `combine(last, e)`. An empty input yields
/// `vec![initial]` without invoking `combine` at all.
///
/// `A: Clone` because each partial result is both stored in the output
/// and threaded onward into the next combiner call.
///
/// A panic in `combine` unwinds before anything is returned, so the
/// call behaves atomically from the caller's perspective.
///
/// ```
/// let totals = scanfold::scan_eager(0, |acc, x| acc + x, [1, 2, 3, 4, 5]);
/// assert_eq!(totals, [0, 1, 3, 6, 10, 15]);
/// ```
pub fn scan_eager<A, I, F>(initial: A, mut combine: F, input: I) -> Vec<A>
where
    A: Clone,
    I: IntoIterator,
    F: FnMut(A, I::Item) -> A,
{
    let iter = input.into_iter();
    let (lower, _) = iter.size_hint();
    let mut result = Vec::with_capacity(lower.saturating_add(1));

    let mut acc = initial;
    result.push(acc.clone());
    for element in iter {
        acc = combine(acc, element);
        result.push(acc.clone());
    }
    result
}

/// Method-call form of [`scan_eager`] for any finite ordered sequence.
pub trait ScanExt: IntoIterator {
    /// Running fold over `self`, fully materialized.
    ///
    /// ```
    /// use scanfold::ScanExt;
    ///
    /// let prefixes = ["a", "b", "c"]
    ///     .scan_eager(String::new(), |acc, x| acc + x);
    /// assert_eq!(prefixes, ["", "a", "ab", "abc"]);
    /// ```
    fn scan_eager<A, F>(self, initial: A, combine: F) -> Vec<A>
    where
        Self: Sized,
        A: Clone,
        F: FnMut(A, Self::Item) -> A,
    {
        scan_eager(initial, combine, self)
    }
}

impl<I: IntoIterator> ScanExt for I {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_anchored_at_initial() {
        let result = scan_eager(100, |acc, x: i32| acc + x, [7]);
        assert_eq!(result[0], 100);
        assert_eq!(result, [100, 107]);
    }

    #[test]
    fn test_empty_input_skips_combiner() {
        let result = scan_eager(100, |_, _: i32| panic!("combiner must not run"), []);
        assert_eq!(result, [100]);
    }

    #[test]
    fn test_recurrence_holds_pointwise() {
        let input = [3, 1, 4, 1, 5, 9];
        let result = input.scan_eager(2, |acc, x| acc * 2 + x);
        assert_eq!(result.len(), input.len() + 1);
        for i in 1..result.len() {
            assert_eq!(result[i], result[i - 1] * 2 + input[i - 1]);
        }
    }
}
