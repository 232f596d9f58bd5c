//! Tick source and deferred scheduler.
//!
//! The engine never sleeps or spawns. It asks a [`Scheduler`] for a
//! one-second tick subscription and for one-shot deferred tasks, and the
//! event loop drains whatever has come due with [`Scheduler::next_fired`].

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Interval between countdown ticks.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Source of monotonic time, measured from an arbitrary origin.
pub trait Clock {
    /// Time elapsed since the clock's origin.
    fn now(&self) -> Duration;
}

/// Real monotonic clock.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Create a clock whose origin is the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
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
}

/// Clock that only moves when told to.
///
/// Clones share the same time, so a test can keep one handle and give
/// another to a [`Timeline`].
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    /// Create a clock at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Handle for a deferred task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

/// Something that came due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fired {
    /// One period of the tick subscription elapsed.
    Tick,
    /// A deferred task reached its deadline.
    Deferred(TaskId),
}

/// Timing services consumed by the engine.
pub trait Scheduler {
    /// Start one-second ticks. Does nothing if already subscribed.
    fn subscribe_ticks(&mut self);

    /// Stop ticks. Does nothing if not subscribed.
    fn cancel_ticks(&mut self);

    /// Schedule a one-shot task.
    fn after(&mut self, delay: Duration) -> TaskId;

    /// Cancel a deferred task. Unknown or already-fired handles are ignored.
    fn cancel(&mut self, task: TaskId);

    /// Pop the earliest event that is due, if any.
    fn next_fired(&mut self) -> Option<Fired>;
}

/// [`Scheduler`] backed by a [`Clock`].
#[derive(Debug)]
pub struct Timeline<C: Clock = SystemClock> {
    clock: C,
    next_tick: Option<Duration>,
    deferred: Vec<(TaskId, Duration)>,
    next_id: u64,
}

impl<C: Clock> Timeline<C> {
    /// Create a timeline with no subscriptions.
    pub const fn new(clock: C) -> Self {
        Self {
            clock,
            next_tick: None,
            deferred: Vec::new(),
            next_id: 0,
        }
    }

    fn earliest_deferred(&self) -> Option<(usize, Duration)> {
        self.deferred
            .iter()
            .enumerate()
            .min_by_key(|(_, (_, at))| *at)
            .map(|(i, (_, at))| (i, *at))
    }
}

impl<C: Clock> Scheduler for Timeline<C> {
    fn subscribe_ticks(&mut self) {
        if self.next_tick.is_none() {
            self.next_tick = Some(self.clock.now() + TICK_PERIOD);
        }
    }

    fn cancel_ticks(&mut self) {
        self.next_tick = None;
    }

    fn after(&mut self, delay: Duration) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.deferred.push((id, self.clock.now() + delay));
        id
    }

    fn cancel(&mut self, task: TaskId) {
        self.deferred.retain(|(id, _)| *id != task);
    }

    fn next_fired(&mut self) -> Option<Fired> {
        let now = self.clock.now();
        let tick = self.next_tick.filter(|at| *at <= now);
        let deferred = self.earliest_deferred().filter(|(_, at)| *at <= now);

        match (tick, deferred) {
            (Some(tick_at), Some((_, task_at))) if tick_at <= task_at => {
                self.next_tick = Some(tick_at + TICK_PERIOD);
                Some(Fired::Tick)
            }
            (Some(tick_at), None) => {
                self.next_tick = Some(tick_at + TICK_PERIOD);
                Some(Fired::Tick)
            }
            (_, Some((index, _))) => {
                let (id, _) = self.deferred.remove(index);
                Some(Fired::Deferred(id))
            }
            (None, None) => None,
        }
    }
}
