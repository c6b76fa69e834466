use glam::Vec3;

/// A value that can be blended between two endpoints.
///
/// `t` is expected in `[0, 1]`; implementations do not clamp it.
pub trait Interpolatable: Copy + Sized {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self;
}

impl Interpolatable for Vec3 {
    #[inline]
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.lerp(end, t)
    }
}

/// A camera pose: eye position plus the orbit target it looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
}

impl CameraPose {
    #[must_use]
    pub const fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }

    /// Component-wise comparison of both vectors within `epsilon`.
    #[must_use]
    pub fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.position.abs_diff_eq(other.position, epsilon)
            && self.target.abs_diff_eq(other.target, epsilon)
    }
}

impl Interpolatable for CameraPose {
    #[inline]
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        Self {
            position: Vec3::interpolate_linear(start.position, end.position, t),
            target: Vec3::interpolate_linear(start.target, end.target, t),
        }
    }
}
