//! # unique-callback
//!
//! Wrap a generator function so that repeated calls only ever yield results
//! it has not produced before.
//!
//! The wrapper keeps a record of every result it returned. When the
//! generator comes up with a value that is already recorded for the same
//! arguments, or that is explicitly excluded, the generator is simply called
//! again, until a new value turns up or a retry or time budget runs out.
//!
//! ## Quick Example
//!
//! ```rust
//! use unique_callback::{unique, UniqueOptions};
//!
//! let names = ["ada", "ada", "grace", "ada", "linus"];
//! let mut i = 0;
//! let mut next_name = unique(
//!     move |()| {
//!         let name = names[i % names.len()];
//!         i += 1;
//!         name.to_string()
//!     },
//!     UniqueOptions::new().with_max_retries(10),
//! );
//!
//! assert_eq!(next_name.call(()).unwrap(), "ada");
//! assert_eq!(next_name.call(()).unwrap(), "grace");
//! assert_eq!(next_name.call(()).unwrap(), "linus");
//! assert!(next_name.call(()).unwrap_err().is_retry_budget());
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events for rejected and accepted candidates
//!   and for exhausted budgets

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod testing;
pub mod unique;

// Re-exports
pub use unique::{
    unique, unique_with_clock, Clock, Store, SystemClock, Unique, UniqueError, UniqueOptions,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::unique::{
        unique, unique_with_clock, Clock, Store, Unique, UniqueError, UniqueOptions,
    };
}
