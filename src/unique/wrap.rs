//! The deduplicating wrapper and its retry loop.

use std::fmt;
use std::marker::PhantomData;
use std::time::Duration;

use serde::Serialize;

use super::clock::{Clock, SystemClock};
use super::error::UniqueError;
use super::key;
use super::options::UniqueOptions;
use super::store::Store;

/// A generator wrapped so that it never repeats a result.
///
/// Created by [`unique`] or [`unique_with_clock`]. The wrapper owns its
/// options, its store and its clock for as long as it lives; dropping it
/// discards the record of produced results.
///
/// `call` takes `&mut self`, so a wrapper is used by one caller at a time.
/// Put it behind a `Mutex` to share it between threads.
pub struct Unique<F, A, T, C = SystemClock> {
    generator: F,
    options: UniqueOptions<T>,
    store: Store<T>,
    clock: C,
    _args: PhantomData<fn(A)>,
}

/// Wrap `generator` so every call returns a result it has not returned before.
///
/// The generator takes its arguments as a single value, usually a tuple:
/// `|()| ...` for a generator without arguments, `|(a, b): (u32, u32)| ...`
/// for one with two. A result is rejected and the generator called again when
/// the result is in the exclude set, or when the same result was already
/// returned for the same arguments.
///
/// The time budget starts now and is shared by all calls.
///
/// # Examples
///
/// ```rust
/// use unique_callback::{unique, UniqueOptions};
///
/// let mut rolls = [1, 1, 2, 1, 3].into_iter();
/// let mut next = unique(move |()| rolls.next().unwrap_or(0), UniqueOptions::new());
///
/// assert_eq!(next.call(()).unwrap(), 1);
/// assert_eq!(next.call(()).unwrap(), 2);
/// assert_eq!(next.call(()).unwrap(), 3);
/// ```
pub fn unique<F, A, T>(generator: F, options: UniqueOptions<T>) -> Unique<F, A, T>
where
    F: FnMut(A) -> T,
{
    unique_with_clock(generator, options, SystemClock::start())
}

/// Like [`unique`], but measures the time budget with `clock`.
///
/// # Examples
///
/// ```rust
/// use unique_callback::testing::ManualClock;
/// use unique_callback::{unique_with_clock, UniqueOptions};
/// use std::time::Duration;
///
/// let clock = ManualClock::new();
/// let mut next = unique_with_clock(|(n,): (u32,)| n * 2, UniqueOptions::new(), clock.clone());
///
/// assert_eq!(next.call((1,)).unwrap(), 2);
///
/// clock.advance(Duration::from_millis(51));
/// assert!(next.call((2,)).unwrap_err().is_time_budget());
/// ```
pub fn unique_with_clock<F, A, T, C>(
    generator: F,
    mut options: UniqueOptions<T>,
    clock: C,
) -> Unique<F, A, T, C>
where
    F: FnMut(A) -> T,
    C: Clock,
{
    let store = options.take_store();
    Unique {
        generator,
        options,
        store,
        clock,
        _args: PhantomData,
    }
}

impl<F, A, T, C> Unique<F, A, T, C>
where
    F: FnMut(A) -> T,
    A: Clone + Serialize,
    T: Clone + PartialEq + Serialize,
    C: Clock,
{
    /// Generate a result not produced before for these arguments.
    ///
    /// The generator is invoked until it yields an acceptable result. Before
    /// each invocation the time budget and then the retry budget are checked;
    /// the call fails as soon as either is exhausted, leaving the store as it
    /// was. At most `max_retries + 1` invocations happen per call.
    ///
    /// The time budget is only checked between invocations. A generator that
    /// is itself slow is never interrupted.
    pub fn call(&mut self, args: A) -> Result<T, UniqueError> {
        let encoded_args = key::arguments(&args)?;
        let max_time = self.options.max_time();
        let max_retries = self.options.max_retries();
        let mut retries = 0u32;

        loop {
            if self.clock.elapsed() > max_time {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    max_time_ms = u64::try_from(max_time.as_millis()).unwrap_or(u64::MAX),
                    retries,
                    "time budget exceeded"
                );
                return Err(UniqueError::time_budget(max_time, retries));
            }
            if retries > max_retries {
                #[cfg(feature = "tracing")]
                tracing::debug!(max_retries, "retry budget exceeded");
                return Err(UniqueError::retry_budget(max_retries));
            }

            let candidate = (self.generator)(args.clone());
            let key = key::encode(&encoded_args, &candidate)?;

            if self.options.is_excluded(&candidate) {
                #[cfg(feature = "tracing")]
                tracing::trace!(%key, retries, reason = "excluded", "rejected candidate");
                retries = retries.saturating_add(1);
                continue;
            }
            if self.store.contains_key(&key) {
                #[cfg(feature = "tracing")]
                tracing::trace!(%key, retries, reason = "duplicate", "rejected candidate");
                retries = retries.saturating_add(1);
                continue;
            }

            #[cfg(feature = "tracing")]
            tracing::trace!(%key, retries, "accepted candidate");
            self.store.insert(key, candidate.clone());
            return Ok(candidate);
        }
    }

    /// Turn the wrapper into a plain closure with the generator's arguments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_callback::{unique, UniqueOptions};
    ///
    /// let mut counter = 0;
    /// let mut next_id = unique(
    ///     move |()| {
    ///         counter += 1;
    ///         counter / 2
    ///     },
    ///     UniqueOptions::new(),
    /// )
    /// .into_fn();
    ///
    /// assert_eq!(next_id(()).unwrap(), 0);
    /// assert_eq!(next_id(()).unwrap(), 1);
    /// assert_eq!(next_id(()).unwrap(), 2);
    /// ```
    pub fn into_fn(mut self) -> impl FnMut(A) -> Result<T, UniqueError> {
        move |args| self.call(args)
    }
}

impl<F, A, T, C: Clock> Unique<F, A, T, C> {
    /// The options this wrapper was built with.
    ///
    /// The initial store has been moved into the wrapper, so
    /// [`UniqueOptions::store`] is always `None` here; use [`Unique::store`].
    pub fn options(&self) -> &UniqueOptions<T> {
        &self.options
    }

    /// Results produced so far, including any pre-seeded entries.
    pub fn store(&self) -> &Store<T> {
        &self.store
    }

    /// Consume the wrapper and keep its store, e.g. to seed another wrapper.
    pub fn into_store(self) -> Store<T> {
        self.store
    }

    /// Time spent since the wrapper was created, as seen by its clock.
    pub fn elapsed(&self) -> Duration {
        self.clock.elapsed()
    }
}

impl<F, A, T: fmt::Debug, C: fmt::Debug> fmt::Debug for Unique<F, A, T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unique")
            .field("options", &self.options)
            .field("store", &self.store)
            .field("clock", &self.clock)
            .finish_non_exhaustive()
    }
}
