//! Frame Loop Pacing
//!
//! Decides, once per loop iteration, whether enough wall-clock time has
//! passed to run Update + Render, or how long to wait for the next tick.
//! The simulation step is the measured elapsed time, so movement is frame
//! rate independent while ticks are capped at `max_frame_rate`.

use std::time::{Duration, Instant};

use crate::config::TimingConfig;

/// Whether the loop keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

impl LoopState {
    /// Running becomes Stopped on quit; Stopped never restarts.
    pub fn on_quit_signal(self, quit: bool) -> Self {
        match self {
            LoopState::Running if quit => LoopState::Stopped,
            other => other,
        }
    }

    pub fn is_running(self) -> bool {
        self == LoopState::Running
    }
}

/// Result of [`FramePacer::poll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStep {
    /// Run Update with `elapsed`, then Render.
    Tick { elapsed: Duration },
    /// Too early; sleep until `until`.
    Wait { until: Instant },
}

/// Fixed tick-interval pacer anchored at the start of the last tick.
#[derive(Debug, Clone)]
pub struct FramePacer {
    tick_interval: Duration,
    last_tick: Instant,
    ticks: u64,
}

impl FramePacer {
    pub fn new(tick_interval: Duration, start: Instant) -> Self {
        Self {
            tick_interval,
            last_tick: start,
            ticks: 0,
        }
    }

    pub fn from_config(timing: &TimingConfig, start: Instant) -> Self {
        Self::new(timing.tick_interval(), start)
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Start of the most recent tick (or the pacer's creation time).
    pub fn last_tick(&self) -> Instant {
        self.last_tick
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Next instant at which a tick is allowed.
    pub fn next_tick(&self) -> Instant {
        self.last_tick + self.tick_interval
    }

    /// Tick if at least one interval has passed since the last tick, moving
    /// the anchor to `now`. A `now` earlier than the anchor counts as zero
    /// elapsed time.
    pub fn poll(&mut self, now: Instant) -> FrameStep {
        let elapsed = now.saturating_duration_since(self.last_tick);
        if elapsed >= self.tick_interval {
            self.last_tick = now;
            self.ticks += 1;
            FrameStep::Tick { elapsed }
        } else {
            FrameStep::Wait {
                until: self.next_tick(),
            }
        }
    }
}
