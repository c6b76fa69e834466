//! Easing curves.
//!
//! An easing curve reparametrizes normalized time `t ∈ [0, 1]` so that an
//! interpolation accelerates and decelerates instead of moving at constant
//! speed. Every curve here maps 0 to 0 and 1 to 1 and is monotonic.

use serde::Deserialize;

/// Cubic ease-in/ease-out.
///
/// `4t³` for the first half, `1 - (-2t + 2)³ / 2` for the second half. Both
/// halves meet at `(0.5, 0.5)` with matching slope. Input outside `[0, 1]`
/// is clamped.
#[inline]
#[must_use]
pub fn ease_in_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Selectable easing curve for camera transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    #[default]
    CubicInOut,
}

impl Easing {
    /// Maps linear progress to eased progress.
    #[inline]
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t.clamp(0.0, 1.0),
            Easing::CubicInOut => ease_in_out_cubic(t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halves_meet_at_midpoint() {
        let left = 4.0 * 0.499_f32.powi(3);
        let right = ease_in_out_cubic(0.5);
        assert!((left - right).abs() < 1e-2);
        assert!((right - 0.5).abs() < 1e-6);
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_eq!(ease_in_out_cubic(-3.0), 0.0);
        assert_eq!(ease_in_out_cubic(7.0), 1.0);
        assert_eq!(Easing::Linear.apply(1.5), 1.0);
    }
}
