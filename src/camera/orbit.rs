use std::f32::consts::{FRAC_PI_2, PI};

use glam::{Vec2, Vec3};

use crate::camera::rig::CameraRig;
use crate::scene::transform::Transform;

const EPS: f32 = 0.0001;

/// Orbit camera around a target point.
///
/// Owns the camera transform and keeps a spherical description of it
/// (`radius`, azimuth `theta`, polar `phi`) relative to `target`. User input
/// accumulates into a rotate delta that is bled off with frame-rate
/// independent damping in [`update`](Self::update).
pub struct OrbitControls {
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub damping_factor: f32,
    pub enable_damping: bool,
    pub min_distance: f32,
    pub max_distance: f32,

    pub camera: Transform,
    pub target: Vec3,
    pub radius: f32,
    pub theta: f32,
    pub phi: f32,

    rotate_delta: Vec2,
}

impl OrbitControls {
    #[must_use]
    pub fn new(position: Vec3, target: Vec3) -> Self {
        let mut controls = Self {
            rotate_speed: 1.0,
            zoom_speed: 0.05,
            damping_factor: 0.05,
            enable_damping: true,
            min_distance: 1.0,
            max_distance: 1000.0,

            camera: Transform::from_position(position),
            target,
            radius: 1.0,
            theta: 0.0,
            phi: FRAC_PI_2,

            rotate_delta: Vec2::ZERO,
        };
        controls.sync_spherical();
        controls
    }

    /// Queues an orbit rotation in radians (azimuth, polar).
    pub fn rotate(&mut self, delta: Vec2) {
        self.rotate_delta += delta * self.rotate_speed;
    }

    /// Dollies toward (positive) or away from (negative) the target.
    pub fn zoom(&mut self, scroll: f32) {
        if scroll == 0.0 {
            return;
        }
        let scale = (1.0 - self.zoom_speed).powf(scroll.abs());
        if scroll > 0.0 {
            self.radius *= scale;
        } else {
            self.radius /= scale;
        }
        self.radius = self.radius.clamp(self.min_distance, self.max_distance);
        self.write_camera();
    }

    /// Applies pending user rotation and rewrites the camera transform.
    pub fn update(&mut self, dt: f32) {
        if self.rotate_delta == Vec2::ZERO {
            return;
        }

        if self.enable_damping {
            let target_fps = 60.0;
            let retention = (1.0 - self.damping_factor).powf(dt.max(0.0) * target_fps);
            let delta_apply = self.rotate_delta * (1.0 - retention);

            self.theta += delta_apply.x;
            self.phi += delta_apply.y;

            self.rotate_delta *= retention;
            if self.rotate_delta.length_squared() < 1e-12 {
                self.rotate_delta = Vec2::ZERO;
            }
        } else {
            self.theta += self.rotate_delta.x;
            self.phi += self.rotate_delta.y;
            self.rotate_delta = Vec2::ZERO;
        }

        self.phi = self.phi.clamp(EPS, PI - EPS);
        self.write_camera();
    }

    /// Whether queued user rotation is still being applied.
    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.rotate_delta != Vec2::ZERO
    }

    /// Drops any queued rotation.
    pub fn stop(&mut self) {
        self.rotate_delta = Vec2::ZERO;
    }

    /// Re-derives the spherical state from the current position and target.
    ///
    /// Returns `true` when the limits had to be enforced, in which case the
    /// camera position was rewritten.
    fn sync_spherical(&mut self) -> bool {
        let offset = self.camera.position - self.target;
        let distance = offset.length();

        if distance > 0.0 {
            self.theta = offset.x.atan2(offset.z);
            self.phi = (offset.y / distance).clamp(-1.0, 1.0).acos();
        }

        let radius = distance.clamp(self.min_distance, self.max_distance);
        let phi = self.phi.clamp(EPS, PI - EPS);
        let clamped = radius != distance || phi != self.phi;

        self.radius = radius;
        self.phi = phi;

        if clamped {
            self.write_camera();
        } else {
            self.camera.look_at(self.target, Vec3::Y);
        }
        clamped
    }

    fn write_camera(&mut self) {
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (sin_theta, cos_theta) = self.theta.sin_cos();

        let offset = Vec3::new(
            self.radius * sin_phi * sin_theta,
            self.radius * cos_phi,
            self.radius * sin_phi * cos_theta,
        );

        self.camera.position = self.target + offset;
        self.camera.look_at(self.target, Vec3::Y);
    }
}

impl CameraRig for OrbitControls {
    fn position(&self) -> Vec3 {
        self.camera.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.camera.position = position;
    }

    fn target(&self) -> Vec3 {
        self.target
    }

    fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    fn apply_update(&mut self) {
        if self.sync_spherical() {
            log::debug!("Orbit limits enforced: radius {:.3}, phi {:.3}", self.radius, self.phi);
        }
    }
}
