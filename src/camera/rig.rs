use glam::Vec3;

use crate::animation::values::CameraPose;

/// Capability to read and write an externally owned camera and its orbit
/// target.
///
/// The transition controller never stores a rig; one is lent to it for the
/// duration of a single request or tick.
pub trait CameraRig {
    fn position(&self) -> Vec3;
    fn set_position(&mut self, position: Vec3);

    fn target(&self) -> Vec3;
    fn set_target(&mut self, target: Vec3);

    /// Must be called after mutating the target so the orbit state agrees
    /// with the new position/target pair.
    fn apply_update(&mut self);

    fn pose(&self) -> CameraPose {
        CameraPose::new(self.position(), self.target())
    }

    /// Writes both vectors, then runs [`apply_update`](Self::apply_update).
    fn set_pose(&mut self, pose: CameraPose) {
        self.set_position(pose.position);
        self.set_target(pose.target);
        self.apply_update();
    }
}
