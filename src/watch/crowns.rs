use glam::Vec3;

use crate::animation::slide::{PartSlideAnimator, ReversalMode, SlidePhase, SlideTrack};
use crate::scene::transform::Transform;
use crate::watch::options::KnobStyle;

/// Default slide length of a crown.
pub const DEFAULT_SLIDE_SECS: f32 = 0.5;

const CROWN_SCALE: f32 = 0.4;
const CROWN_RETRACT: Vec3 = Vec3::new(0.25, 0.0, 0.0);

/// Track of the crown shown for double and triple layouts.
#[must_use]
pub fn first_crown_track(duration_secs: f32) -> SlideTrack {
    SlideTrack {
        visible_position: Vec3::new(0.392, 0.184, -0.06),
        hidden_offset: CROWN_RETRACT,
        visible_scale: CROWN_SCALE,
        duration_secs,
    }
}

/// Track of the crown shown only for the triple layout.
#[must_use]
pub fn second_crown_track(duration_secs: f32) -> SlideTrack {
    SlideTrack {
        visible_position: Vec3::new(0.368, 0.184, 0.14),
        hidden_offset: CROWN_RETRACT,
        visible_scale: CROWN_SCALE,
        duration_secs,
    }
}

/// Crown group transforms, written every tick.
#[derive(Debug, Clone)]
pub struct CrownTransforms {
    pub first: Transform,
    pub second: Transform,
}

impl Default for CrownTransforms {
    fn default() -> Self {
        let mut first =
            Transform::from_position(first_crown_track(DEFAULT_SLIDE_SECS).hidden_position());
        let mut second =
            Transform::from_position(second_crown_track(DEFAULT_SLIDE_SECS).hidden_position());
        first.scale = Vec3::ZERO;
        second.scale = Vec3::ZERO;
        Self { first, second }
    }
}

/// The two optional crowns and the layouts that show them.
#[derive(Debug, Clone)]
pub struct CrownRig {
    pub first: PartSlideAnimator,
    pub second: PartSlideAnimator,
}

impl CrownRig {
    #[must_use]
    pub fn new(duration_secs: f32, reversal: ReversalMode) -> Self {
        Self {
            first: PartSlideAnimator::new("first crown", first_crown_track(duration_secs))
                .with_reversal(reversal),
            second: PartSlideAnimator::new("second crown", second_crown_track(duration_secs))
                .with_reversal(reversal),
        }
    }

    #[must_use]
    pub fn shows_first(style: KnobStyle) -> bool {
        style != KnobStyle::SingleCrown
    }

    #[must_use]
    pub fn shows_second(style: KnobStyle) -> bool {
        style == KnobStyle::TripleCrown
    }

    /// Advances both crowns for the current knob style and writes their poses.
    pub fn update(&mut self, style: KnobStyle, dt: f32, transforms: &mut CrownTransforms) {
        let first = self.first.update(Self::shows_first(style), dt);
        let second = self.second.update(Self::shows_second(style), dt);
        first.apply_to(&mut transforms.first);
        second.apply_to(&mut transforms.second);
    }

    /// Whether either crown is mid-slide.
    #[must_use]
    pub fn is_sliding(&self) -> bool {
        self.first.phase().is_sliding() || self.second.phase().is_sliding()
    }

    #[must_use]
    pub fn phases(&self) -> (SlidePhase, SlidePhase) {
        (self.first.phase(), self.second.phase())
    }
}

impl Default for CrownRig {
    fn default() -> Self {
        Self::new(DEFAULT_SLIDE_SECS, ReversalMode::default())
    }
}
