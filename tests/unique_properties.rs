//! Property-based tests for unique generation

use proptest::prelude::*;
use std::collections::HashSet;
use unique_callback::testing::{ManualClock, Scripted};
use unique_callback::{unique_with_clock, UniqueOptions};

proptest! {
    #[test]
    fn prop_no_key_is_returned_twice(
        values in prop::collection::vec(0u8..6, 1..80),
        args in prop::collection::vec(0u8..3, 1..40)
    ) {
        let script = Scripted::new(values);
        let mut next = unique_with_clock(
            script.generator(),
            UniqueOptions::new().with_max_retries(5),
            ManualClock::new(),
        );

        let mut accepted = HashSet::new();
        for arg in args {
            if let Ok(result) = next.call((arg,)) {
                prop_assert!(accepted.insert((arg, result)));
            }
        }
        prop_assert_eq!(next.store().len(), accepted.len());
    }

    #[test]
    fn prop_bare_arguments_never_falsely_rejected(
        calls in prop::collection::vec((0u32..200, 0u32..200), 1..60)
    ) {
        let results: Vec<u32> = calls.iter().map(|&(_, result)| result).collect();
        let script = Scripted::new(results);
        let mut next = unique_with_clock(
            script.generator(),
            UniqueOptions::new().with_max_retries(0),
            ManualClock::new(),
        );

        let mut accepted = HashSet::new();
        for &(arg, expected) in &calls {
            let outcome = next.call(arg);
            if accepted.insert((arg, expected)) {
                // a pair never returned before must be accepted on the first try
                prop_assert_eq!(outcome.ok(), Some(expected));
            } else {
                prop_assert!(outcome.is_err());
            }
        }
    }

    #[test]
    fn prop_excluded_value_never_returned(
        excluded in 0u8..4,
        values in prop::collection::vec(0u8..4, 1..60),
        calls in 1usize..30
    ) {
        let script = Scripted::new(values);
        let mut next = unique_with_clock(
            script.generator(),
            UniqueOptions::new().with_exclude(excluded).with_max_retries(8),
            ManualClock::new(),
        );

        for i in 0..calls {
            if let Ok(result) = next.call((i % 3,)) {
                prop_assert_ne!(result, excluded);
            }
        }
    }

    #[test]
    fn prop_attempts_bounded_by_retry_budget(
        values in prop::collection::vec(0u8..3, 1..40),
        max_retries in 0u32..6,
        calls in 1usize..10
    ) {
        let script = Scripted::new(values);
        let mut next = unique_with_clock(
            script.generator(),
            UniqueOptions::new().with_max_retries(max_retries),
            ManualClock::new(),
        );

        for _ in 0..calls {
            let before = script.calls();
            let result = next.call(());
            let attempts = script.calls() - before;

            prop_assert!((attempts as u32) <= max_retries + 1);
            if result.is_err() {
                prop_assert_eq!(attempts as u32, max_retries + 1);
            }
        }
    }

    #[test]
    fn prop_seeded_store_skips_earlier_results(
        values in prop::collection::vec(0u16..50, 1..40),
        calls in 1usize..10
    ) {
        let first = Scripted::new(values.clone());
        let mut fresh = unique_with_clock(first.generator(), UniqueOptions::new(), ManualClock::new());
        let earlier: HashSet<u16> = (0..calls).filter_map(|_| fresh.call(()).ok()).collect();

        let second = Scripted::new(values);
        let mut seeded = unique_with_clock(
            second.generator(),
            UniqueOptions::new().with_store(fresh.into_store()),
            ManualClock::new(),
        );

        for _ in 0..calls {
            if let Ok(result) = seeded.call(()) {
                prop_assert!(!earlier.contains(&result));
            }
        }
    }
}
