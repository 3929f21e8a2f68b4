//! Backend-agnostic render interface.
//!
//! Turns a [`ViewerState`](hexscape_world::ViewerState) into a
//! [`FrameSnapshot`]: per-chunk model matrices and colors, the camera and
//! projection matrices, the lighting model and the shader source a GPU
//! backend needs to draw the terrain.

mod frame;
mod lighting;
mod rig;
mod shader;
mod upload;

pub use frame::{ChunkDraw, FrameSnapshot, RenderSettings, WaterDraw};
pub use lighting::{LightingModel, SceneUniforms};
pub use rig::CameraRig;
pub use shader::TERRAIN_SHADER_WGSL;
pub use upload::UploadTracker;
