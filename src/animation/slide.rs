use glam::Vec3;
use serde::Deserialize;

use crate::animation::values::Interpolatable;
use crate::scene::transform::Transform;

/// Summed per-frame deltas rarely land exactly on 1.0 in `f32`.
const COMPLETE_EPSILON: f32 = 1e-4;

/// Phase of a part's show/hide motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlidePhase {
    Hidden,
    SlidingIn,
    Visible,
    SlidingOut,
}

impl SlidePhase {
    #[inline]
    #[must_use]
    pub fn is_sliding(self) -> bool {
        matches!(self, SlidePhase::SlidingIn | SlidePhase::SlidingOut)
    }
}

/// How a slide starts when the visibility predicate flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReversalMode {
    /// Each slide starts at progress 0 and only begins once the opposite
    /// slide has finished. The position stays continuous but the velocity
    /// flips sign abruptly at the turnaround.
    #[default]
    Restart,
    /// A flip mid-slide reverses immediately with `progress = 1 - progress`,
    /// so the reverse slide starts from the current pose.
    Mirror,
}

/// Fixed geometry of one animatable part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideTrack {
    /// Fully extended position.
    pub visible_position: Vec3,
    /// Displacement from the visible position to the retracted one.
    pub hidden_offset: Vec3,
    /// Uniform scale while extended or sliding.
    pub visible_scale: f32,
    /// Slide length in seconds.
    pub duration_secs: f32,
}

impl SlideTrack {
    #[inline]
    #[must_use]
    pub fn hidden_position(&self) -> Vec3 {
        self.visible_position + self.hidden_offset
    }
}

/// Pose written to the part's transform each tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartPose {
    pub position: Vec3,
    pub scale: f32,
}

impl PartPose {
    pub fn apply_to(&self, transform: &mut Transform) {
        transform.position = self.position;
        transform.scale = Vec3::splat(self.scale);
    }
}

/// Four-phase show/hide state machine for a single part.
///
/// The desired visibility is re-evaluated on every tick, so the machine
/// converges on the latest selection no matter how often it toggled in
/// between.
#[derive(Debug, Clone)]
pub struct PartSlideAnimator {
    name: &'static str,
    track: SlideTrack,
    reversal: ReversalMode,

    phase: SlidePhase,
    progress: f32,
}

impl PartSlideAnimator {
    #[must_use]
    pub fn new(name: &'static str, track: SlideTrack) -> Self {
        Self {
            name,
            track,
            reversal: ReversalMode::Restart,
            phase: SlidePhase::Hidden,
            progress: 0.0,
        }
    }

    #[must_use]
    pub fn with_reversal(mut self, reversal: ReversalMode) -> Self {
        self.reversal = reversal;
        self
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    #[must_use]
    pub fn phase(&self) -> SlidePhase {
        self.phase
    }

    /// Slide progress in `[0, 1]`; only meaningful while sliding.
    #[inline]
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[inline]
    #[must_use]
    pub fn track(&self) -> &SlideTrack {
        &self.track
    }

    /// Advances the machine by `dt` seconds and returns the pose to write.
    ///
    /// A negative or non-finite `dt` counts as zero.
    pub fn update(&mut self, should_show: bool, dt: f32) -> PartPose {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };

        // 1. Re-enter from the resting phases (or reverse, when mirroring)
        match (self.phase, should_show) {
            (SlidePhase::Hidden, true) => self.enter(SlidePhase::SlidingIn, 0.0),
            (SlidePhase::Visible, false) => self.enter(SlidePhase::SlidingOut, 0.0),
            (SlidePhase::SlidingIn, false) if self.reversal == ReversalMode::Mirror => {
                self.enter(SlidePhase::SlidingOut, 1.0 - self.progress);
            }
            (SlidePhase::SlidingOut, true) if self.reversal == ReversalMode::Mirror => {
                self.enter(SlidePhase::SlidingIn, 1.0 - self.progress);
            }
            _ => {}
        }

        // 2. Integrate
        if self.phase.is_sliding() {
            let step = if self.track.duration_secs > 0.0 {
                dt / self.track.duration_secs
            } else {
                1.0
            };
            self.progress = (self.progress + step).min(1.0);

            if self.progress >= 1.0 - COMPLETE_EPSILON {
                let settled = match self.phase {
                    SlidePhase::SlidingIn => SlidePhase::Visible,
                    _ => SlidePhase::Hidden,
                };
                self.enter(settled, 0.0);
            }
        }

        self.pose()
    }

    /// Pose for the current phase and progress, without advancing.
    #[must_use]
    pub fn pose(&self) -> PartPose {
        let visible = self.track.visible_position;
        let hidden = self.track.hidden_position();
        match self.phase {
            SlidePhase::Hidden => PartPose {
                position: hidden,
                scale: 0.0,
            },
            SlidePhase::Visible => PartPose {
                position: visible,
                scale: self.track.visible_scale,
            },
            SlidePhase::SlidingIn => PartPose {
                position: Vec3::interpolate_linear(hidden, visible, self.progress),
                scale: self.track.visible_scale,
            },
            SlidePhase::SlidingOut => PartPose {
                position: Vec3::interpolate_linear(visible, hidden, self.progress),
                scale: self.track.visible_scale,
            },
        }
    }

    fn enter(&mut self, phase: SlidePhase, progress: f32) {
        log::debug!("{}: {:?} -> {:?} (progress {progress:.3})", self.name, self.phase, phase);
        self.phase = phase;
        self.progress = match phase {
            SlidePhase::Visible => 1.0,
            SlidePhase::Hidden => 0.0,
            _ => progress.clamp(0.0, 1.0),
        };
    }
}
