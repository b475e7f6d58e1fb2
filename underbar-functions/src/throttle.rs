//! # Throttling
//!
//! A throttled function runs at most once per interval. Calls that arrive too
//! soon are not run; they return the result of the last run and are kept as
//! the pending call, the newest arguments replacing older ones.
//!
//! ```text
//! interval = 100ms
//!
//!   t=0    call(a)  ──> runs f(a)             result ra
//!   t=50   call(b)  ──> deferred, returns ra  pending = b
//!   t=70   call(c)  ──> deferred, returns ra  pending = c
//!   t=100  (leading) flush ──> runs f(c)      pending = none
//!   t=150  call(d)  ──> deferred, returns f(c)'s result
//! ```
//!
//! Without `leading`, pending calls are simply dropped at the next run. With
//! it, a repeating timer on the scheduler flushes the pending call once a full
//! interval has passed since the last run. The timer is cancelled when the
//! [`Throttled`] wrapper is dropped.

use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::Duration;

use tracing::{debug, trace, warn};
use underbar_common::{Result, UnderbarError};

use crate::clock::Clock;
use crate::scheduler::{Scheduler, TimerId};

/// Settings for [`throttle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrottleOptions {
    pub interval: Duration,
    pub leading: bool,
}

impl ThrottleOptions {
    pub fn new(interval: Duration) -> Self {
        ThrottleOptions {
            interval,
            leading: false,
        }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    /// Flush deferred calls on a timer.
    pub fn leading(mut self, leading: bool) -> Self {
        self.leading = leading;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.interval.is_zero() {
            return Err(UnderbarError::ZeroInterval { name: "throttle" });
        }
        Ok(())
    }
}

struct ThrottleState<F, A, R> {
    func: F,
    last: Option<(Duration, R)>,
    pending: Option<A>,
}

impl<F, A, R> ThrottleState<F, A, R>
where
    F: FnMut(A) -> R,
    R: Clone,
{
    fn run(&mut self, arg: A, now: Duration) -> R {
        self.pending = None;
        let result = (self.func)(arg);
        self.last = Some((now, result.clone()));
        result
    }

    fn ready(&self, now: Duration, interval: Duration) -> bool {
        match &self.last {
            Some((ran_at, _)) => now.saturating_sub(*ran_at) >= interval,
            None => true,
        }
    }

    fn flush(&mut self, now: Duration, interval: Duration) {
        if !self.ready(now, interval) {
            return;
        }
        if let Some(arg) = self.pending.take() {
            debug!(?now, "throttle: flushed pending call");
            self.run(arg, now);
        }
    }
}

/// A function limited to one run per interval.
pub struct Throttled<F, A, R> {
    state: Rc<RefCell<ThrottleState<F, A, R>>>,
    scheduler: Rc<Scheduler>,
    interval: Duration,
    flush_timer: Option<TimerId>,
}

impl<F, A, R> Throttled<F, A, R>
where
    F: FnMut(A) -> R + 'static,
    A: 'static,
    R: Clone + 'static,
{
    pub fn new(func: F, options: ThrottleOptions, scheduler: &Rc<Scheduler>) -> Result<Self> {
        options.validate()?;

        let state = Rc::new(RefCell::new(ThrottleState {
            func,
            last: None,
            pending: None,
        }));

        let flush_timer = if options.leading {
            let weak = Rc::downgrade(&state);
            let clock = scheduler.clock();
            let interval = options.interval;
            Some(scheduler.schedule_repeating(interval, move || {
                flush_pending(&weak, clock.as_ref(), interval)
            })?)
        } else {
            None
        };

        Ok(Throttled {
            state,
            scheduler: Rc::clone(scheduler),
            interval: options.interval,
            flush_timer,
        })
    }

    /// Runs `f(arg)` if a full interval has passed since the last run (or it
    /// never ran). Otherwise keeps `arg` as the pending call and returns the
    /// last result.
    pub fn call(&self, arg: A) -> R {
        let now = self.scheduler.now();
        let mut state = self.state.borrow_mut();

        let deferred = match &state.last {
            Some((ran_at, result)) if now.saturating_sub(*ran_at) < self.interval => {
                Some(result.clone())
            }
            _ => None,
        };

        match deferred {
            Some(result) => {
                state.pending = Some(arg);
                trace!(?now, "throttle: deferred");
                result
            }
            None => {
                trace!(?now, "throttle: running");
                state.run(arg, now)
            }
        }
    }

    pub fn has_pending(&self) -> bool {
        self.state.borrow().pending.is_some()
    }

    pub fn into_fn(self) -> impl Fn(A) -> R {
        move |arg| self.call(arg)
    }
}

fn flush_pending<F, A, R>(
    state: &Weak<RefCell<ThrottleState<F, A, R>>>,
    clock: &dyn Clock,
    interval: Duration,
) where
    F: FnMut(A) -> R,
    R: Clone,
{
    let Some(state) = state.upgrade() else {
        return;
    };
    match state.try_borrow_mut() {
        Ok(mut state) => state.flush(clock.now(), interval),
        Err(_) => warn!("throttle: flush skipped while the function is running"),
    }
}

impl<F, A, R> Drop for Throttled<F, A, R> {
    fn drop(&mut self) {
        if let Some(id) = self.flush_timer.take() {
            if let Err(err) = self.scheduler.cancel(id) {
                trace!(%id, %err, "throttle: flush timer already gone");
            }
        }
    }
}

/// Wraps `f` so it runs at most once per `options.interval`.
///
/// Fails with [`UnderbarError::ZeroInterval`] when the interval is zero.
///
/// # Example
/// ```
/// use std::rc::Rc;
/// use std::time::Duration;
/// use underbar_functions::{throttle, ManualClock, Scheduler, ThrottleOptions};
///
/// let clock = Rc::new(ManualClock::new());
/// let scheduler = Rc::new(Scheduler::new(clock.clone()));
/// let double = throttle(|n: i32| n * 2, ThrottleOptions::from_millis(100), &scheduler).unwrap();
///
/// assert_eq!(double.call(1), 2);
/// clock.advance(Duration::from_millis(50));
/// assert_eq!(double.call(5), 2);
/// clock.advance(Duration::from_millis(100));
/// assert_eq!(double.call(7), 14);
/// ```
pub fn throttle<F, A, R>(
    f: F,
    options: ThrottleOptions,
    scheduler: &Rc<Scheduler>,
) -> Result<Throttled<F, A, R>>
where
    F: FnMut(A) -> R + 'static,
    A: 'static,
    R: Clone + 'static,
{
    Throttled::new(f, options, scheduler)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use crate::clock::ManualClock;

    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn setup() -> (Rc<ManualClock>, Rc<Scheduler>, Rc<RefCell<Vec<i32>>>) {
        let clock = Rc::new(ManualClock::new());
        let scheduler = Rc::new(Scheduler::new(clock.clone()));
        (clock, scheduler, Rc::new(RefCell::new(Vec::new())))
    }

    fn recorder(log: Rc<RefCell<Vec<i32>>>) -> impl FnMut(i32) -> i32 {
        move |n| {
            log.borrow_mut().push(n);
            n
        }
    }

    #[test]
    fn test_runs_at_most_once_per_interval() {
        let (clock, scheduler, log) = setup();
        let throttled = throttle(
            recorder(Rc::clone(&log)),
            ThrottleOptions::from_millis(100),
            &scheduler,
        )
        .unwrap();

        assert_eq!(throttled.call(1), 1);
        clock.advance(ms(50));
        assert_eq!(throttled.call(2), 1);
        assert!(throttled.has_pending());
        assert_eq!(*log.borrow(), vec![1]);

        clock.advance(ms(100));
        assert_eq!(throttled.call(3), 3);
        assert!(!throttled.has_pending());
        assert_eq!(*log.borrow(), vec![1, 3]);
    }

    #[test]
    fn test_leading_flushes_latest_pending_call() {
        let (clock, scheduler, log) = setup();
        let throttled = throttle(
            recorder(Rc::clone(&log)),
            ThrottleOptions::from_millis(100).leading(true),
            &scheduler,
        )
        .unwrap();

        throttled.call(1);
        clock.advance(ms(30));
        throttled.call(2);
        throttled.call(3);

        scheduler.run_until(ms(100));
        assert_eq!(*log.borrow(), vec![1, 3]);

        clock.advance(ms(20));
        assert_eq!(throttled.call(4), 3);

        scheduler.run_until(ms(300));
        assert_eq!(*log.borrow(), vec![1, 3, 4]);
        assert!(!throttled.has_pending());
    }

    #[test]
    fn test_flush_waits_for_a_full_interval() {
        let (clock, scheduler, log) = setup();
        let throttled = throttle(
            recorder(Rc::clone(&log)),
            ThrottleOptions::from_millis(100).leading(true),
            &scheduler,
        )
        .unwrap();

        clock.set(ms(50));
        throttled.call(1);
        clock.set(ms(60));
        throttled.call(2);

        // tick at 100 is only 50ms after the run at 50
        scheduler.run_until(ms(100));
        assert_eq!(*log.borrow(), vec![1]);

        scheduler.run_until(ms(200));
        assert_eq!(*log.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_without_leading_pending_calls_are_dropped() {
        let (clock, scheduler, log) = setup();
        let throttled = throttle(
            recorder(Rc::clone(&log)),
            ThrottleOptions::from_millis(10),
            &scheduler,
        )
        .unwrap();

        throttled.call(1);
        throttled.call(2);
        assert_eq!(scheduler.pending(), 0);
        scheduler.run_for(ms(100));
        assert_eq!(*log.borrow(), vec![1]);

        clock.advance(ms(1));
        throttled.call(5);
        assert_eq!(*log.borrow(), vec![1, 5]);
    }

    #[test]
    fn test_drop_cancels_flush_timer() {
        let (_, scheduler, log) = setup();
        let throttled = throttle(
            recorder(Rc::clone(&log)),
            ThrottleOptions::from_millis(100).leading(true),
            &scheduler,
        )
        .unwrap();
        assert_eq!(scheduler.pending(), 1);

        drop(throttled);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_drop_after_flush_timer_was_cancelled() {
        let (clock, scheduler, log) = setup();
        let throttled = throttle(
            recorder(Rc::clone(&log)),
            ThrottleOptions::from_millis(100).leading(true),
            &scheduler,
        )
        .unwrap();
        let id = throttled.flush_timer.unwrap();
        scheduler.cancel(id).unwrap();

        throttled.call(1);
        clock.advance(ms(10));
        throttled.call(2);
        scheduler.run_for(ms(300));
        assert_eq!(*log.borrow(), vec![1]);

        drop(throttled);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let (_, scheduler, log) = setup();
        let result = throttle(
            recorder(Rc::clone(&log)),
            ThrottleOptions::new(Duration::ZERO),
            &scheduler,
        );
        assert!(matches!(
            result,
            Err(UnderbarError::ZeroInterval { name: "throttle" })
        ));
    }

    #[test]
    fn test_into_fn_keeps_throttling() {
        let (clock, scheduler, _) = setup();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let tick = throttle(
            move |()| {
                counter.set(counter.get() + 1);
                counter.get()
            },
            ThrottleOptions::from_millis(100),
            &scheduler,
        )
        .unwrap()
        .into_fn();

        assert_eq!(tick(()), 1);
        assert_eq!(tick(()), 1);
        clock.advance(ms(150));
        assert_eq!(tick(()), 2);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_options_builder() {
        let options = ThrottleOptions::from_millis(250).leading(true);
        assert_eq!(options.interval, ms(250));
        assert!(options.leading);
        assert!(options.validate().is_ok());
    }
}
