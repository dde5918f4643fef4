//! Tick time model.
//!
//! Unlike a simulated-time framework, this engine's tick is driven by wall
//! clock: one tick happens every `1 / tick_hz` seconds, for as long as the
//! process runs. `Tick` is still the canonical unit nodes reason about
//! (ordering, "last updated" comparisons); `TickClock` is the thing that
//! turns ticks into real sleep durations and back into elapsed wall time for
//! nodes that need actual seconds (`FlickeringButton`, `MultiClickButton`).

use std::fmt;
use std::time::{Duration, Instant};

// ── Tick ─────────────────────────────────────────────────────────────────────

/// A monotonically increasing tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── TickClock ─────────────────────────────────────────────────────────────────

/// Paces a fixed-frequency tick loop and hands out wall-clock timestamps.
///
/// `current_tick` and `tick_started_at` are advanced by [`TickClock::advance`]
/// at the top of each iteration of the mapping host's run loop.
#[derive(Debug)]
pub struct TickClock {
    /// Target ticks per second. Spec default is 30.
    pub tick_hz: f64,
    /// Instant the clock was created — the origin for `elapsed()`.
    epoch: Instant,
    /// The tick currently being processed.
    pub current_tick: Tick,
    /// Wall-clock instant at which `current_tick` began.
    tick_started_at: Instant,
}

impl TickClock {
    pub fn new(tick_hz: f64) -> Self {
        let now = Instant::now();
        Self {
            tick_hz,
            epoch: now,
            current_tick: Tick::ZERO,
            tick_started_at: now,
        }
    }

    /// Target duration of one tick.
    #[inline]
    pub fn tick_period(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tick_hz)
    }

    /// Advance to the next tick, recording the wall-clock instant it began.
    pub fn advance(&mut self) {
        self.current_tick = self.current_tick.offset(1);
        self.tick_started_at = Instant::now();
    }

    /// Wall-clock seconds elapsed since the clock was created.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }

    /// How long processing the current tick has taken so far.
    #[inline]
    pub fn tick_elapsed(&self) -> Duration {
        self.tick_started_at.elapsed()
    }

    /// Remaining sleep to hit the target tick period, or `Duration::ZERO`
    /// if the tick already ran long.
    pub fn remaining_in_tick(&self) -> Duration {
        self.tick_period().saturating_sub(self.tick_elapsed())
    }
}

/// Snapshot passed to every node's `update` call: the tick being processed
/// and a wall-clock "now" captured once per tick, shared by every node so a
/// single tick observes one consistent timestamp.
#[derive(Copy, Clone, Debug)]
pub struct TickContext {
    pub tick: Tick,
    now_secs: f64,
}

impl TickContext {
    pub fn new(tick: Tick, clock: &TickClock) -> Self {
        Self { tick, now_secs: clock.elapsed_secs() }
    }

    /// Build a context with an explicit timestamp rather than deriving one
    /// from a live `TickClock`. For tests that replay a specific sequence
    /// of wall-clock times.
    pub fn for_test(tick: Tick, now_secs: f64) -> Self {
        Self { tick, now_secs }
    }

    /// Real elapsed seconds since the clock's epoch, for nodes that measure
    /// wall-clock intervals (`FlickeringButton`, `MultiClickButton`).
    #[inline]
    pub fn now_secs(&self) -> f64 {
        self.now_secs
    }
}
