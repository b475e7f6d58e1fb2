//! # Timer Facility
//!
//! A single-threaded agenda of one-shot and repeating timers, read against a
//! [`Clock`]. Nothing fires on its own: the owner drives the scheduler with
//! [`Scheduler::run_pending`], [`Scheduler::run_until`] or
//! [`Scheduler::run_for`].
//!
//! ```text
//!   clock.now() ──> run_pending ──> due timers, earliest (due, id) first
//!                                      │
//!                   one-shot: removed ─┤
//!                   repeating: due += every, then fired
//! ```
//!
//! Callbacks may schedule and cancel timers, including themselves.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use tracing::{debug, trace};
use underbar_common::{Result, UnderbarError};

use crate::clock::{Clock, SystemClock};

/// Handle for a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

impl TimerId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

type Task = Rc<RefCell<dyn FnMut()>>;

struct Timer {
    due: Duration,
    every: Option<Duration>,
    task: Task,
}

/// One-shot and repeating timers driven by a [`Clock`].
///
/// # Example
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use std::time::Duration;
/// use underbar_functions::{ManualClock, Scheduler};
///
/// let clock = Rc::new(ManualClock::new());
/// let scheduler = Scheduler::new(clock.clone());
///
/// let ticks = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&ticks);
/// scheduler
///     .schedule_repeating(Duration::from_millis(10), move || counter.set(counter.get() + 1))
///     .unwrap();
///
/// scheduler.run_for(Duration::from_millis(35));
/// assert_eq!(ticks.get(), 3);
/// ```
pub struct Scheduler {
    clock: Rc<dyn Clock>,
    timers: RefCell<BTreeMap<TimerId, Timer>>,
    next_id: Cell<u64>,
}

impl Scheduler {
    pub fn new(clock: Rc<dyn Clock>) -> Self {
        Scheduler {
            clock,
            timers: RefCell::new(BTreeMap::new()),
            next_id: Cell::new(1),
        }
    }

    pub fn clock(&self) -> Rc<dyn Clock> {
        Rc::clone(&self.clock)
    }

    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    /// Runs `task` once, `delay` from now.
    pub fn schedule_once(&self, delay: Duration, task: impl FnOnce() + 'static) -> TimerId {
        let mut task = Some(task);
        self.insert(delay, None, move || {
            if let Some(task) = task.take() {
                task();
            }
        })
    }

    /// Runs `task` every `interval`, starting one interval from now.
    ///
    /// Fails with [`UnderbarError::ZeroInterval`] when `interval` is zero.
    pub fn schedule_repeating(
        &self,
        interval: Duration,
        task: impl FnMut() + 'static,
    ) -> Result<TimerId> {
        if interval.is_zero() {
            return Err(UnderbarError::ZeroInterval { name: "repeating timer" });
        }
        Ok(self.insert(interval, Some(interval), task))
    }

    fn insert(
        &self,
        delay: Duration,
        every: Option<Duration>,
        task: impl FnMut() + 'static,
    ) -> TimerId {
        let id = TimerId(self.next_id.get());
        self.next_id.set(id.0 + 1);

        let due = self.clock.now() + delay;
        let task: Task = Rc::new(RefCell::new(task));
        self.timers.borrow_mut().insert(id, Timer { due, every, task });
        trace!(%id, ?due, ?every, "timer scheduled");
        id
    }

    /// Removes a timer. Fails with [`UnderbarError::UnknownTimer`] if it
    /// already fired (one-shot) or was cancelled before.
    pub fn cancel(&self, id: TimerId) -> Result<()> {
        match self.timers.borrow_mut().remove(&id) {
            Some(_) => {
                trace!(%id, "timer cancelled");
                Ok(())
            }
            None => Err(UnderbarError::UnknownTimer { id: id.0 }),
        }
    }

    /// Fires every timer due at the current time and returns how many
    /// callbacks ran. A repeating timer that fell several intervals behind
    /// fires once per missed interval.
    pub fn run_pending(&self) -> usize {
        let now = self.clock.now();
        let mut fired = 0;
        while let Some((id, task)) = self.take_due(now) {
            trace!(%id, ?now, "timer fired");
            (task.borrow_mut())();
            fired += 1;
        }
        if fired > 0 {
            debug!(fired, ?now, "ran pending timers");
        }
        fired
    }

    fn take_due(&self, now: Duration) -> Option<(TimerId, Task)> {
        let mut timers = self.timers.borrow_mut();
        let (id, timer) = timers
            .iter()
            .filter(|(_, timer)| timer.due <= now)
            .min_by_key(|(id, timer)| (timer.due, **id))?;
        let id = *id;
        let every = timer.every;
        let task = Rc::clone(&timer.task);

        match every {
            Some(every) => {
                if let Some(timer) = timers.get_mut(&id) {
                    timer.due += every;
                }
            }
            None => {
                timers.remove(&id);
            }
        }
        Some((id, task))
    }

    /// Sleeps from one due time to the next, firing timers along the way,
    /// until `deadline`. Returns how many callbacks ran.
    pub fn run_until(&self, deadline: Duration) -> usize {
        let mut fired = self.run_pending();
        while let Some(due) = self.next_due().filter(|due| *due <= deadline) {
            self.clock.sleep_until(due);
            fired += self.run_pending();
        }
        self.clock.sleep_until(deadline);
        fired + self.run_pending()
    }

    /// [`run_until`](Self::run_until) `duration` from now.
    pub fn run_for(&self, duration: Duration) -> usize {
        self.run_until(self.clock.now() + duration)
    }

    /// Number of scheduled timers.
    pub fn pending(&self) -> usize {
        self.timers.borrow().len()
    }

    /// Earliest due time among scheduled timers.
    pub fn next_due(&self) -> Option<Duration> {
        self.timers.borrow().values().map(|timer| timer.due).min()
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Scheduler::new(Rc::new(SystemClock::new()))
    }
}

thread_local! {
    static DEFAULT_SCHEDULER: Rc<Scheduler> = Rc::new(Scheduler::default());
}

/// This thread's scheduler over the system clock.
pub fn default_scheduler() -> Rc<Scheduler> {
    DEFAULT_SCHEDULER.with(Rc::clone)
}

/// Runs `f` once after `wait`.
///
/// # Example
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use std::time::Duration;
/// use underbar_functions::{delay, ManualClock, Scheduler};
///
/// let scheduler = Scheduler::new(Rc::new(ManualClock::new()));
/// let done = Rc::new(Cell::new(false));
/// let flag = Rc::clone(&done);
///
/// delay(&scheduler, Duration::from_millis(100), move || flag.set(true));
/// scheduler.run_for(Duration::from_millis(99));
/// assert!(!done.get());
/// scheduler.run_for(Duration::from_millis(1));
/// assert!(done.get());
/// ```
pub fn delay(scheduler: &Scheduler, wait: Duration, f: impl FnOnce() + 'static) -> TimerId {
    scheduler.schedule_once(wait, f)
}

#[cfg(test)]
mod tests {
    use crate::clock::ManualClock;

    use super::*;

    fn manual() -> (Rc<ManualClock>, Rc<Scheduler>) {
        let clock = Rc::new(ManualClock::new());
        let scheduler = Rc::new(Scheduler::new(clock.clone()));
        (clock, scheduler)
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_once_fires_when_due_and_only_once() {
        let (clock, scheduler) = manual();
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        scheduler.schedule_once(ms(20), move || sink.borrow_mut().push("fired"));

        clock.advance(ms(19));
        assert_eq!(scheduler.run_pending(), 0);
        clock.advance(ms(1));
        assert_eq!(scheduler.run_pending(), 1);
        clock.advance(ms(100));
        assert_eq!(scheduler.run_pending(), 0);

        assert_eq!(*log.borrow(), vec!["fired"]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_fires_in_due_then_id_order() {
        let (clock, scheduler) = manual();
        let log = Rc::new(RefCell::new(Vec::new()));
        for (label, wait) in [("c", 30), ("a", 10), ("b1", 20), ("b2", 20)] {
            let sink = Rc::clone(&log);
            scheduler.schedule_once(ms(wait), move || sink.borrow_mut().push(label));
        }

        clock.advance(ms(50));
        assert_eq!(scheduler.run_pending(), 4);
        assert_eq!(*log.borrow(), vec!["a", "b1", "b2", "c"]);
    }

    #[test]
    fn test_repeating_catches_up_missed_intervals() {
        let (clock, scheduler) = manual();
        let ticks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&ticks);
        scheduler
            .schedule_repeating(ms(10), move || counter.set(counter.get() + 1))
            .unwrap();

        clock.advance(ms(35));
        assert_eq!(scheduler.run_pending(), 3);
        assert_eq!(scheduler.next_due(), Some(ms(40)));
    }

    #[test]
    fn test_cancel() {
        let (clock, scheduler) = manual();
        let id = scheduler.schedule_once(ms(5), || panic!("cancelled timer ran"));
        assert_eq!(scheduler.cancel(id), Ok(()));
        assert_eq!(
            scheduler.cancel(id),
            Err(UnderbarError::UnknownTimer { id: id.get() })
        );

        clock.advance(ms(10));
        assert_eq!(scheduler.run_pending(), 0);
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let (_, scheduler) = manual();
        let result = scheduler.schedule_repeating(Duration::ZERO, || {});
        assert!(matches!(result, Err(UnderbarError::ZeroInterval { .. })));
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_callbacks_can_schedule_and_cancel() {
        let (_, scheduler) = manual();
        let ticks = Rc::new(Cell::new(0));
        let own_id = Rc::new(Cell::new(None));

        let counter = Rc::clone(&ticks);
        let id_slot = Rc::clone(&own_id);
        let handle = Rc::clone(&scheduler);
        let id = scheduler
            .schedule_repeating(ms(10), move || {
                counter.set(counter.get() + 1);
                if counter.get() == 2 {
                    if let Some(id) = id_slot.get() {
                        handle.cancel(id).unwrap();
                    }
                    let follow_up = Rc::clone(&counter);
                    handle.schedule_once(ms(1), move || follow_up.set(follow_up.get() + 100));
                }
            })
            .unwrap();
        own_id.set(Some(id));

        assert_eq!(scheduler.run_for(ms(100)), 3);
        assert_eq!(ticks.get(), 102);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_run_until_advances_clock_to_deadline() {
        let (clock, scheduler) = manual();
        scheduler.schedule_once(ms(30), || {});
        assert_eq!(scheduler.run_until(ms(100)), 1);
        assert_eq!(clock.now(), ms(100));
        assert_eq!(scheduler.next_due(), None);
    }

    #[test]
    fn test_default_scheduler_is_shared_per_thread() {
        let first = default_scheduler();
        let second = default_scheduler();
        assert!(Rc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_timer_id_display() {
        assert_eq!(TimerId(7).to_string(), "timer#7");
    }
}
