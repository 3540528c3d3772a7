//! Time sources for the wrapper's time budget.

use std::time::{Duration, Instant};

/// A source of elapsed time.
///
/// The wrapper asks its clock how much time has passed since the wrapper was
/// created. Implement this to drive the time budget from something other
/// than the system's monotonic clock, such as
/// [`ManualClock`](crate::testing::ManualClock) in tests.
pub trait Clock {
    /// Time elapsed since the clock was started.
    fn elapsed(&self) -> Duration;
}

/// Monotonic wall clock started when it is created.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    /// Start a new clock at the current instant.
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::start()
    }
}

impl Clock for SystemClock {
    fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn elapsed(&self) -> Duration {
        (**self).elapsed()
    }
}
