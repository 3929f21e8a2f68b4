//! Fixed-angle camera that follows the pan offset.

use glam::{Mat4, Vec3};
use hexscape_config::CameraConfig;
use hexscape_world::CameraController;

/// Eye and target anchors, both shifted by the controller's offset, plus
/// the perspective parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    pub eye_anchor: Vec3,
    pub target_anchor: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            eye_anchor: Vec3::new(0.0, 30.0, 40.0),
            target_anchor: Vec3::ZERO,
            fov_y: std::f32::consts::FRAC_PI_4,
            near: 0.01,
            far: 100.0,
        }
    }
}

impl CameraRig {
    pub fn from_config(config: &CameraConfig) -> Self {
        Self {
            eye_anchor: Vec3::from_array(config.eye_anchor),
            target_anchor: Vec3::from_array(config.target_anchor),
            fov_y: config.fov_y_degrees.to_radians(),
            near: config.near,
            far: config.far,
        }
    }

    pub fn eye(&self, camera: &CameraController) -> Vec3 {
        self.eye_anchor + camera.offset()
    }

    pub fn target(&self, camera: &CameraController) -> Vec3 {
        self.target_anchor + camera.offset()
    }

    /// Right-handed look-at with `+Y` up.
    pub fn view_matrix(&self, camera: &CameraController) -> Mat4 {
        Mat4::look_at_rh(self.eye(camera), self.target(camera), Vec3::Y)
    }

    /// OpenGL-style clip space (`z` in `[-1, 1]`).
    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y, aspect_ratio, self.near, self.far)
    }
}
