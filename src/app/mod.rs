//! Frame Loop
//!
//! The rendering substrate calls into the configurator once per displayed
//! frame. [`FrameScheduler`] holds those per-frame callbacks; a subscriber
//! keeps the returned [`SubscriptionKey`] and must remove it on teardown so
//! nothing fires against released handles.
//!
//! ```rust,ignore
//! let mut scheduler = FrameScheduler::new();
//! let mut clock = FrameClock::new();
//!
//! let key = scheduler.subscribe(|frame| log::info!("frame {}", frame.frame_count));
//! loop {
//!     scheduler.dispatch(&clock.tick());
//! }
//! scheduler.unsubscribe(key);
//! ```

use chrono::NaiveTime;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Handle to a frame subscription.
    pub struct SubscriptionKey;
}

/// Per-frame timing information handed to every subscriber.
#[derive(Debug, Clone, Copy)]
pub struct FrameState {
    /// Monotonic timestamp in milliseconds.
    pub time_ms: f64,
    /// Delta time since the last frame (in seconds). May be garbage when the
    /// substrate was suspended; consumers sanitize it.
    pub dt: f32,
    /// Total number of frames since startup.
    pub frame_count: u64,
    /// Local wall-clock time of day.
    pub local_time: NaiveTime,
}

impl FrameState {
    /// `dt` clamped to zero when negative or non-finite.
    #[inline]
    #[must_use]
    pub fn sanitized_dt(&self) -> f32 {
        if self.dt.is_finite() && self.dt > 0.0 {
            self.dt
        } else {
            0.0
        }
    }
}

pub type FrameCallback = Box<dyn FnMut(&FrameState)>;

/// Registry of per-frame callbacks.
#[derive(Default)]
pub struct FrameScheduler {
    callbacks: SlotMap<SubscriptionKey, FrameCallback>,
}

impl FrameScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionKey
    where
        F: FnMut(&FrameState) + 'static,
    {
        let key = self.callbacks.insert(Box::new(callback));
        log::debug!("Frame subscription {key:?} added");
        key
    }

    /// Removes a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, key: SubscriptionKey) -> bool {
        let removed = self.callbacks.remove(key).is_some();
        if removed {
            log::debug!("Frame subscription {key:?} removed");
        }
        removed
    }

    #[must_use]
    pub fn is_subscribed(&self, key: SubscriptionKey) -> bool {
        self.callbacks.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Invokes every subscriber once with `frame`.
    pub fn dispatch(&mut self, frame: &FrameState) {
        for callback in self.callbacks.values_mut() {
            callback(frame);
        }
    }
}
