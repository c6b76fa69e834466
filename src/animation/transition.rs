use crate::animation::easing::Easing;
use crate::animation::values::{CameraPose, Interpolatable};
use crate::camera::view::ViewId;

/// One in-flight camera transition.
///
/// Holds the pose captured when the request was made and the pose of the
/// requested view. A tick that arrives late simply lands further along the
/// curve (clamped at the end). Sampled progress never decreases, so a
/// timestamp that runs backwards holds the camera in place.
#[derive(Debug, Clone)]
pub struct TransitionState {
    pub view: ViewId,
    pub from: CameraPose,
    pub to: CameraPose,
    /// Timestamp of the request, in milliseconds.
    pub start_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,

    last_progress: f32,
}

impl TransitionState {
    #[must_use]
    pub fn new(
        view: ViewId,
        from: CameraPose,
        to: CameraPose,
        start_ms: f64,
        duration_ms: f64,
        easing: Easing,
    ) -> Self {
        debug_assert!(duration_ms > 0.0, "transition duration must be positive");
        Self {
            view,
            from,
            to,
            start_ms,
            duration_ms,
            easing,
            last_progress: 0.0,
        }
    }

    /// Linear progress in `[0, 1]`, never below what was last sampled.
    ///
    /// A non-finite timestamp, or one earlier than the last sample, counts as
    /// zero advance.
    #[must_use]
    pub fn progress(&self, now_ms: f64) -> f32 {
        let linear = (now_ms - self.start_ms) / self.duration_ms;
        if !linear.is_finite() {
            return self.last_progress;
        }
        (linear.clamp(0.0, 1.0) as f32).max(self.last_progress)
    }

    /// Interpolated pose at `now_ms`, together with the linear progress used.
    pub fn sample(&mut self, now_ms: f64) -> (CameraPose, f32) {
        if !self.start_ms.is_finite() && now_ms.is_finite() {
            // Requested with a bad timestamp: the first good one starts the clock.
            self.start_ms = now_ms;
        }
        let linear = self.progress(now_ms);
        self.last_progress = linear;
        if linear >= 1.0 {
            // Land exactly on the stored values rather than a lerp result.
            return (self.to, 1.0);
        }
        let eased = self.easing.apply(linear);
        (CameraPose::interpolate_linear(self.from, self.to, eased), linear)
    }
}
