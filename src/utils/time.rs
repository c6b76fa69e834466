#[cfg(not(target_arch = "wasm32"))]
use std::time::{Duration, Instant};

#[cfg(target_arch = "wasm32")]
use web_time::{Duration, Instant};

use chrono::{Local, NaiveTime};

use crate::app::FrameState;

/// Produces one [`FrameState`] per displayed frame.
///
/// Real-time mode reads the monotonic clock and local wall-clock time on
/// every [`tick`](Self::tick). Headless drivers can instead push synthetic
/// time with [`advance`](Self::advance).
pub struct FrameClock {
    start_time: Instant,
    last_update: Instant,
    /// Time since last tick
    pub delta: Duration,
    /// Total elapsed time since creation
    pub elapsed: Duration,
    /// Total number of ticks
    pub frame_count: u64,
    /// Wall-clock time of day at the last tick
    pub local_time: NaiveTime,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Creates a clock starting from now.
    #[must_use]
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_update: now,
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
            local_time: Local::now().time(),
        }
    }

    /// Samples real time and returns the new frame.
    pub fn tick(&mut self) -> FrameState {
        let now = Instant::now();
        self.delta = now - self.last_update;
        self.elapsed = now - self.start_time;
        self.last_update = now;
        self.local_time = Local::now().time();
        self.frame_count += 1;
        self.frame()
    }

    /// Advances synthetic time by `delta` and sets the time of day.
    pub fn advance(&mut self, delta: Duration, local_time: NaiveTime) -> FrameState {
        self.delta = delta;
        self.elapsed += delta;
        self.local_time = local_time;
        self.frame_count += 1;
        self.frame()
    }

    /// The state of the last tick.
    #[must_use]
    pub fn frame(&self) -> FrameState {
        FrameState {
            time_ms: self.elapsed.as_secs_f64() * 1000.0,
            dt: self.delta.as_secs_f32(),
            frame_count: self.frame_count,
            local_time: self.local_time,
        }
    }
}
