//! Ambient plus single directional light, and the per-draw uniform block.
//!
//! [`LightingModel`] is the CPU-side description; [`SceneUniforms`] is the
//! GPU-side block written once per draw.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// Light vector used when none is configured.
pub const DEFAULT_LIGHT_DIRECTION: Vec3 = Vec3::new(-1.0, -8.0, -3.0);

/// Flat shading: `color * (ambient + max(dot(n, l), 0) * directional)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightingModel {
    pub ambient: f32,
    pub directional: f32,
    direction: Vec3,
}

impl Default for LightingModel {
    fn default() -> Self {
        Self::new(0.5, 1.0, DEFAULT_LIGHT_DIRECTION)
    }
}

impl LightingModel {
    /// A degenerate `direction` falls back to [`DEFAULT_LIGHT_DIRECTION`].
    pub fn new(ambient: f32, directional: f32, direction: Vec3) -> Self {
        let direction = direction.try_normalize().unwrap_or_else(|| {
            tracing::warn!(?direction, "zero light direction; using default");
            DEFAULT_LIGHT_DIRECTION.normalize()
        });
        Self {
            ambient,
            directional,
            direction,
        }
    }

    /// Unit light vector.
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Lit color of a surface with the given unit `normal`.
    pub fn shade(&self, normal: Vec3, color: [f32; 3]) -> [f32; 3] {
        let diffuse = normal.dot(self.direction).max(0.0) * self.directional;
        let factor = self.ambient + diffuse;
        color.map(|c| c * factor)
    }
}

/// Uniform block matching `SceneUniforms` in the terrain shader, 224 bytes.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct SceneUniforms {
    pub model: [[f32; 4]; 4],
    pub perspective: [[f32; 4]; 4],
    pub camera: [[f32; 4]; 4],
    /// RGBA surface color.
    pub color: [f32; 4],
    /// xyz = unit light vector, w = padding.
    pub light_dir: [f32; 4],
}

static_assertions::const_assert_eq!(std::mem::size_of::<SceneUniforms>(), 224);

impl SceneUniforms {
    pub fn new(
        model: Mat4,
        perspective: Mat4,
        camera: Mat4,
        color: [f32; 4],
        light: &LightingModel,
    ) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            perspective: perspective.to_cols_array_2d(),
            camera: camera.to_cols_array_2d(),
            color,
            light_dir: light.direction().extend(0.0).to_array(),
        }
    }
}
