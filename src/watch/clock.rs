use std::f32::consts::TAU;

use chrono::Timelike;
use glam::Vec3;
use serde::Deserialize;

use crate::scene::transform::Transform;

/// Rest rotation of each hand in the model, in radians about Y.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct HandOffsets {
    pub hour: f32,
    pub minute: f32,
    pub second: f32,
}

impl Default for HandOffsets {
    fn default() -> Self {
        Self {
            hour: 0.841,
            minute: -0.816,
            second: 0.739,
        }
    }
}

/// Whole-second time of day on a 12-hour dial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    pub hour12: u32,
    pub minute: u32,
    pub second: u32,
}

impl ClockTime {
    /// Drops sub-second precision so the second hand ticks.
    #[must_use]
    pub fn from_time<T: Timelike>(time: &T) -> Self {
        Self {
            hour12: time.hour() % 12,
            minute: time.minute(),
            second: time.second(),
        }
    }
}

/// Dial angles in radians, clockwise from twelve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandAngles {
    pub hour: f32,
    pub minute: f32,
    pub second: f32,
}

impl HandAngles {
    #[must_use]
    pub fn at(time: ClockTime) -> Self {
        let hour = time.hour12 as f32;
        let minute = time.minute as f32;
        let second = time.second as f32;

        Self {
            second: second / 60.0 * TAU,
            // The minute hand sweeps with the seconds, the hour hand with the minutes.
            minute: (minute + second / 60.0) / 60.0 * TAU,
            hour: (hour + minute / 60.0) / 12.0 * TAU,
        }
    }
}

/// The three hand groups of the watch model.
#[derive(Debug, Clone)]
pub struct ClockHands {
    pub hour: Transform,
    pub minute: Transform,
    pub second: Transform,
}

impl Default for ClockHands {
    fn default() -> Self {
        let pivot = Vec3::new(0.0, 0.199, 0.0);
        Self {
            hour: Transform::from_position(pivot),
            minute: Transform::from_position(pivot),
            second: Transform::from_position(pivot),
        }
    }
}

/// Sets the hands from the time of day. Stateless: every call recomputes
/// the rotations from scratch.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClockHandDriver {
    pub offsets: HandOffsets,
}

impl ClockHandDriver {
    #[must_use]
    pub fn new(offsets: HandOffsets) -> Self {
        Self { offsets }
    }

    pub fn update(&self, time: ClockTime, hands: &mut ClockHands) {
        let angles = HandAngles::at(time);
        hands.hour.set_rotation_y(-angles.hour - self.offsets.hour);
        hands.minute.set_rotation_y(-angles.minute - self.offsets.minute);
        hands.second.set_rotation_y(-angles.second - self.offsets.second);
    }
}
