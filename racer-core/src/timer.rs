use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::freeze::Freezeable;

// A monotonic time source. Readings are offsets from an arbitrary, fixed origin.
pub trait Clock {
    fn now(&self) -> Duration;
}

#[derive(Copy, Clone, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        MonotonicClock {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

// A clock that only moves when told to. Clones share the same reading, so a
// test can hold one handle and advance time under every timer built from it.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

// The start/stop/elapsed capability race logic needs from a timer.
pub trait Stopwatch {
    fn start(&mut self);
    fn stop(&mut self);
    fn reset(&mut self);
    fn elapsed(&self) -> Duration;
    fn is_running(&self) -> bool;
    // Whether start was called since the last reset, even if no time passed
    fn has_started(&self) -> bool;
}

// Measures how long a round takes; can be read while running and paused
// without losing the time accumulated so far.
#[derive(Clone, Debug)]
pub struct RoundTimer<C: Clock = MonotonicClock> {
    clock: C,
    accumulated: Duration,
    started_at: Option<Duration>,
    started: bool,
}

impl<C: Clock> RoundTimer<C> {
    pub fn new(clock: C) -> Self {
        RoundTimer {
            clock,
            accumulated: Duration::ZERO,
            started_at: None,
            started: false,
        }
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }
}

impl<C: Clock> Stopwatch for RoundTimer<C> {
    fn start(&mut self) {
        if self.started_at.is_none() {
            self.started_at = Some(self.clock.now());
        }
        self.started = true;
    }

    fn stop(&mut self) {
        if let Some(started_at) = self.started_at.take() {
            self.accumulated += self.clock.now().saturating_sub(started_at);
        }
    }

    fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
        self.started_at = None;
        self.started = false;
    }

    fn elapsed(&self) -> Duration {
        match self.started_at {
            Some(started_at) => self.accumulated + self.clock.now().saturating_sub(started_at),
            None => self.accumulated,
        }
    }

    fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    fn has_started(&self) -> bool {
        self.started
    }
}

impl<C: Clock> Freezeable for RoundTimer<C> {
    fn freeze(&mut self) {
        self.stop();
    }

    fn unfreeze(&mut self) {
        self.start();
    }
}

// MM:SS, whole seconds only
impl<C: Clock> fmt::Display for RoundTimer<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.elapsed().as_secs();
        write!(f, "{:02}:{:02}", secs / 60, secs % 60)
    }
}

// Counts down before a round and reports, exactly once, when it has run out.
#[derive(Clone, Debug)]
pub struct CountdownTimer<C: Clock = MonotonicClock> {
    clock: C,
    length: Duration,
    deadline: Option<Duration>,
    fired: bool,
}

impl<C: Clock> CountdownTimer<C> {
    pub fn new(clock: C, length: Duration) -> Self {
        CountdownTimer {
            clock,
            length,
            deadline: None,
            fired: false,
        }
    }

    pub fn start(&mut self) {
        self.reset();
        self.deadline = Some(self.clock.now() + self.length);
    }

    // Disarms the countdown; it won't fire until started again
    pub fn stop(&mut self) {
        self.fired = true;
        self.deadline = None;
    }

    pub fn reset(&mut self) {
        self.deadline = None;
        self.fired = false;
    }

    pub fn is_running(&self) -> bool {
        self.deadline
            .map_or(false, |deadline| self.clock.now() < deadline)
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    // The digit to show: seconds left rounded up, so a 3s countdown reads
    // 3, 2, 1.
    pub fn remaining_secs(&self) -> Option<u64> {
        let deadline = self.deadline?;
        let now = self.clock.now();
        if now >= deadline {
            return None;
        }
        let remaining_ms = (deadline - now).as_millis() as u64;
        Some((remaining_ms + 999) / 1_000)
    }

    pub fn fire_on_zero(&mut self) -> bool {
        match self.deadline {
            Some(deadline) if !self.fired && self.clock.now() >= deadline => {
                self.fired = true;
                true
            }
            _ => false,
        }
    }
}
