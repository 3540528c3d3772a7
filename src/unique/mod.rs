//! Unique results from repeatable generators.
//!
//! This module wraps a generator function so that its results never repeat:
//!
//! - **Options are data**: [`UniqueOptions`] only describes budgets and
//!   excluded values, it is easy to build, inspect and deserialize
//! - **State is owned**: the record of produced results lives inside the
//!   [`Unique`] wrapper, not in any global
//! - **Failures are values**: exhausted budgets come back as [`UniqueError`]
//!
//! # Quick Start
//!
//! ```rust
//! use unique_callback::{unique, UniqueOptions};
//!
//! let mut seq = [0, 0, 5].into_iter();
//! let mut pick = unique(move |()| seq.next().unwrap_or(9), UniqueOptions::new().with_exclude(0));
//!
//! // both zeros are rejected internally
//! assert_eq!(pick.call(()).unwrap(), 5);
//! ```
//!
//! # Acceptance Rules
//!
//! A candidate is rejected when either holds:
//!
//! - it equals a value of the exclude set, whatever the call arguments
//! - the pair (arguments, candidate) was already recorded in the store
//!
//! Results are therefore unique per argument list: `f(1)` and `f(2)` may both
//! return `"a"` once.
//!
//! # Budgets
//!
//! - `max_retries` bounds the retries of a single call, allowing
//!   `max_retries + 1` generator invocations
//! - `max_time` bounds the time since the wrapper was created, across all calls

mod clock;
mod error;
mod key;
mod options;
mod store;
mod wrap;

pub use clock::{Clock, SystemClock};
pub use error::UniqueError;
pub use options::{UniqueOptions, DEFAULT_MAX_RETRIES, DEFAULT_MAX_TIME};
pub use store::Store;
pub use wrap::{unique, unique_with_clock, Unique};
