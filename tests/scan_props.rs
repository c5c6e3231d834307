use std::cell::Cell;
use std::rc::Rc;

use proptest::prelude::*;
use scanfold::{lazy, scan_eager, LazySequence};

proptest! {
    #[test]
    fn eager_result_has_length_n_plus_one(
        input in proptest::collection::vec(any::<i32>(), 0..128),
        initial in any::<i64>(),
    ) {
        let result = scan_eager(initial, |acc, x| acc + i64::from(x), input.iter().copied());
        prop_assert_eq!(result.len(), input.len() + 1, "length must be n + 1");
        prop_assert_eq!(result[0], initial, "result must be anchored at the initial value");
    }

    #[test]
    fn eager_result_satisfies_recurrence(
        input in proptest::collection::vec(any::<i32>(), 0..128),
        initial in any::<i64>(),
    ) {
        let result = scan_eager(initial, |acc, x| acc + i64::from(x), input.iter().copied());
        for i in 1..result.len() {
            prop_assert_eq!(
                result[i],
                result[i - 1] + i64::from(input[i - 1]),
                "recurrence must hold at position {}", i
            );
        }
    }

    #[test]
    fn lazy_prefix_matches_eager_over_truncated_input(
        input in proptest::collection::vec(any::<i32>(), 0..128),
        cut in 0usize..129,
    ) {
        let cut = cut.min(input.len());
        let eager = scan_eager(0i64, |acc, x| acc + i64::from(x), input[..cut].iter().copied());

        let scan = lazy(input.iter().copied()).scan(0i64, |acc, x| acc + i64::from(x));
        let lazy_values: Vec<i64> = scan.fresh_iter().take(cut + 1).collect();

        prop_assert_eq!(eager, lazy_values, "first n + 1 lazy values must equal the eager scan of the first n elements");
    }

    #[test]
    fn combiner_runs_exactly_once_per_element_eager(
        input in proptest::collection::vec(any::<i32>(), 0..128),
    ) {
        let calls = Cell::new(0usize);
        let _ = scan_eager(0i64, |acc, x| {
            calls.set(calls.get() + 1);
            acc + i64::from(x)
        }, input.iter().copied());
        prop_assert_eq!(calls.get(), input.len(), "one combiner call per element");
    }

    #[test]
    fn combiner_runs_exactly_once_per_element_lazy(
        input in proptest::collection::vec(any::<i32>(), 0..128),
    ) {
        let calls = Rc::new(Cell::new(0usize));
        let counter = Rc::clone(&calls);
        let scan = lazy(input.iter().copied()).scan(0i64, move |acc, x| {
            counter.set(counter.get() + 1);
            acc + i64::from(x)
        });
        let values: Vec<i64> = scan.fresh_iter().collect();
        prop_assert_eq!(values.len(), input.len() + 1);
        prop_assert_eq!(calls.get(), input.len(), "one combiner call per consumed element");
    }

    #[test]
    fn fresh_traversals_are_deterministic(
        input in proptest::collection::vec(any::<i32>(), 0..64),
    ) {
        let scan = lazy(input.iter().copied()).scan(0i64, |acc, x| acc + i64::from(x));
        let first: Vec<i64> = scan.fresh_iter().collect();
        let second: Vec<i64> = scan.fresh_iter().collect();
        prop_assert_eq!(first, second, "every fresh traversal must replay the same values");
    }
}
