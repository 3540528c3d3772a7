//! Testing utilities for code built on unique generation.
//!
//! Generators are usually random, which makes them awkward to test against.
//! This module provides a scripted generator, a clock under manual control
//! and assertion macros for the two budget failures.
//!
//! # Examples
//!
//! ## Scripted generator
//!
//! ```rust
//! use unique_callback::testing::Scripted;
//! use unique_callback::{unique, UniqueOptions};
//!
//! let script = Scripted::new([1, 1, 2]);
//! let mut next = unique(script.generator(), UniqueOptions::new());
//!
//! assert_eq!(next.call(()).unwrap(), 1);
//! assert_eq!(next.call(()).unwrap(), 2);
//! assert_eq!(script.calls(), 3);
//! ```
//!
//! ## Assertion macros
//!
//! ```rust
//! use unique_callback::testing::Scripted;
//! use unique_callback::{assert_retry_budget_exceeded, unique, UniqueOptions};
//!
//! let script = Scripted::new([0]);
//! let mut next = unique(script.generator(), UniqueOptions::new().with_exclude(0));
//!
//! assert_retry_budget_exceeded!(next.call(()));
//! ```

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::unique::Clock;

/// A clock that only moves when told to.
///
/// Clones share the same time, so a test can keep one handle and give
/// another to the wrapper.
///
/// # Example
///
/// ```rust
/// use unique_callback::testing::ManualClock;
/// use unique_callback::Clock;
/// use std::time::Duration;
///
/// let clock = ManualClock::new();
/// let handle = clock.clone();
///
/// handle.advance(Duration::from_millis(20));
/// assert_eq!(clock.elapsed(), Duration::from_millis(20));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    elapsed: Rc<Cell<Duration>>,
    tick: Duration,
}

impl ManualClock {
    /// Create a clock stopped at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clock that moves forward by `tick` every time it is read.
    ///
    /// Useful to let time run out in the middle of a retry loop.
    pub fn ticking(tick: Duration) -> Self {
        Self {
            elapsed: Rc::default(),
            tick,
        }
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        self.elapsed.set(self.elapsed.get() + by);
    }

    /// Set the elapsed time.
    pub fn set(&self, elapsed: Duration) {
        self.elapsed.set(elapsed);
    }
}

impl Clock for ManualClock {
    fn elapsed(&self) -> Duration {
        let now = self.elapsed.get();
        self.elapsed.set(now + self.tick);
        now
    }
}

/// A generator replaying a fixed list of values.
///
/// Once the list is used up the last value repeats forever, which makes it
/// easy to force collisions. Clones share their position and call count.
///
/// # Panics
///
/// Generating from an empty script panics.
#[derive(Debug, Clone)]
pub struct Scripted<T> {
    values: Rc<[T]>,
    calls: Rc<Cell<usize>>,
}

impl<T: Clone> Scripted<T> {
    /// Create a script from `values`, replayed in order.
    pub fn new<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self {
            values: values.into_iter().collect(),
            calls: Rc::default(),
        }
    }

    /// Produce the next scripted value.
    pub fn next_value(&self) -> T {
        let n = self.calls.get();
        self.calls.set(n + 1);
        let last = self.values.len().checked_sub(1).expect("empty script");
        self.values[n.min(last)].clone()
    }

    /// A generator closure ignoring its arguments and replaying the script.
    pub fn generator<A>(&self) -> impl FnMut(A) -> T {
        let script = self.clone();
        move |_| script.next_value()
    }

    /// Number of values produced so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

/// Assert that a call failed because the time budget ran out.
///
/// # Example
///
/// ```rust
/// use unique_callback::testing::ManualClock;
/// use unique_callback::{assert_time_budget_exceeded, unique_with_clock, UniqueOptions};
/// use std::time::Duration;
///
/// let clock = ManualClock::new();
/// let mut next = unique_with_clock(|()| 1, UniqueOptions::new(), clock.clone());
/// clock.advance(Duration::from_secs(1));
///
/// assert_time_budget_exceeded!(next.call(()));
/// ```
#[macro_export]
macro_rules! assert_time_budget_exceeded {
    ($result:expr) => {
        match $result {
            Err($crate::UniqueError::TimeBudgetExceeded { .. }) => {}
            other => {
                panic!("Expected TimeBudgetExceeded, got: {:?}", other);
            }
        }
    };
}

/// Assert that a call failed because the retry budget ran out.
///
/// # Example
///
/// ```rust
/// use unique_callback::{assert_retry_budget_exceeded, unique, UniqueOptions};
///
/// let mut next = unique(|()| 1, UniqueOptions::new().with_exclude(1));
/// assert_retry_budget_exceeded!(next.call(()));
/// ```
#[macro_export]
macro_rules! assert_retry_budget_exceeded {
    ($result:expr) => {
        match $result {
            Err($crate::UniqueError::RetryBudgetExceeded { .. }) => {}
            other => {
                panic!("Expected RetryBudgetExceeded, got: {:?}", other);
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{unique_with_clock, UniqueError, UniqueOptions};

    #[test]
    fn manual_clock_starts_at_zero() {
        assert_eq!(ManualClock::new().elapsed(), Duration::ZERO);
    }

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new();
        let other = clock.clone();
        other.advance(Duration::from_millis(5));
        other.advance(Duration::from_millis(5));
        assert_eq!(clock.elapsed(), Duration::from_millis(10));

        clock.set(Duration::from_millis(3));
        assert_eq!(other.elapsed(), Duration::from_millis(3));
    }

    #[test]
    fn ticking_clock_advances_on_read() {
        let clock = ManualClock::ticking(Duration::from_millis(10));
        assert_eq!(clock.elapsed(), Duration::ZERO);
        assert_eq!(clock.elapsed(), Duration::from_millis(10));
        assert_eq!(clock.elapsed(), Duration::from_millis(20));
    }

    #[test]
    fn scripted_repeats_last_value() {
        let script = Scripted::new(["a", "b"]);
        assert_eq!(script.next_value(), "a");
        assert_eq!(script.next_value(), "b");
        assert_eq!(script.next_value(), "b");
        assert_eq!(script.calls(), 3);
    }

    #[test]
    fn scripted_generator_shares_count() {
        let script = Scripted::new([1, 2, 3]);
        let mut generate = script.generator::<(u8, u8)>();
        assert_eq!(generate((0, 0)), 1);
        assert_eq!(generate((9, 9)), 2);
        assert_eq!(script.calls(), 2);
    }

    #[test]
    #[should_panic(expected = "empty script")]
    fn scripted_empty_panics() {
        Scripted::<u8>::new([]).next_value();
    }

    #[test]
    fn assert_time_budget_macro() {
        let clock = ManualClock::new();
        clock.set(Duration::from_millis(51));
        let mut next = unique_with_clock(|()| 1, UniqueOptions::new(), clock);
        assert_time_budget_exceeded!(next.call(()));
    }

    #[test]
    fn assert_retry_budget_macro() {
        let result: Result<u8, UniqueError> = Err(UniqueError::retry_budget(1));
        assert_retry_budget_exceeded!(result);
    }

    #[test]
    #[should_panic(expected = "Expected TimeBudgetExceeded")]
    fn assert_time_budget_panics_on_success() {
        let result: Result<u8, UniqueError> = Ok(1);
        assert_time_budget_exceeded!(result);
    }

    #[test]
    #[should_panic(expected = "Expected RetryBudgetExceeded")]
    fn assert_retry_budget_panics_on_other_error() {
        let result: Result<u8, UniqueError> = Err(UniqueError::time_budget(Duration::ZERO, 0));
        assert_retry_budget_exceeded!(result);
    }
}
