//! # Clocks
//!
//! Time in this crate is a [`Duration`] measured from a clock's own origin.
//! [`SystemClock`] follows the wall clock and really sleeps; [`ManualClock`]
//! only moves when told to, which makes timing behaviour reproducible.

use std::cell::Cell;
use std::thread;
use std::time::{Duration, Instant};

/// A source of monotonic time.
pub trait Clock {
    /// Time elapsed since the clock's origin.
    fn now(&self) -> Duration;

    /// Blocks until `now() >= deadline`. Returns immediately if that already
    /// holds.
    fn sleep_until(&self, deadline: Duration);
}

/// Real time, measured from when the clock was created.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        SystemClock {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn sleep_until(&self, deadline: Duration) {
        let now = self.now();
        if deadline > now {
            thread::sleep(deadline - now);
        }
    }
}

/// Virtual time. Sleeping jumps straight to the deadline.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use underbar_functions::{Clock, ManualClock};
///
/// let clock = ManualClock::new();
/// clock.advance(Duration::from_millis(40));
/// clock.sleep_until(Duration::from_millis(100));
/// assert_eq!(clock.now(), Duration::from_millis(100));
/// ```
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(now: Duration) -> Self {
        ManualClock {
            now: Cell::new(now),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    /// Moves the clock to `to`. Time never runs backwards, so an earlier
    /// value is ignored.
    pub fn set(&self, to: Duration) {
        if to > self.now.get() {
            self.now.set(to);
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }

    fn sleep_until(&self, deadline: Duration) {
        self.set(deadline);
    }
}
