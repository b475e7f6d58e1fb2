//! # underbar Functions
//!
//! Function decorators that keep private state between calls, and the timer
//! facility the time-based ones run on.
//!
//! ## Modules
//!
//! - [`once`]: Run a function on the first call only
//! - [`memoize`]: Cache results per argument
//! - [`throttle`]: Run at most once per interval, optionally flushing deferred calls
//! - [`scheduler`]: One-shot and repeating timers, plus `delay`
//! - [`clock`]: System and manual time sources
//!
//! Everything here is single-threaded: decorators hold their state in
//! `Cell`/`RefCell`, and timers only fire while the owner drives a
//! [`Scheduler`].

pub mod clock;
pub mod memoize;
pub mod once;
pub mod scheduler;
pub mod throttle;

pub use clock::{Clock, ManualClock, SystemClock};
pub use memoize::{MemoStats, Memoized, memoize};
pub use once::{Once, once};
pub use scheduler::{Scheduler, TimerId, default_scheduler, delay};
pub use throttle::{ThrottleOptions, Throttled, throttle};
