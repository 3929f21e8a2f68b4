//! Per-frame draw list built from a viewer snapshot.

use std::sync::Arc;

use glam::{Mat4, Vec3};
use hexscape_config::Config;
use hexscape_coords::AxialPosition;
use hexscape_mesh::{HexMesh, chunk_model_matrix, water_plane};
use hexscape_world::{Chunk, ViewerState};

use crate::lighting::{LightingModel, SceneUniforms};
use crate::rig::CameraRig;

/// Everything about drawing that does not change between frames.
#[derive(Clone, Debug)]
pub struct RenderSettings {
    pub terrain_color: [f32; 4],
    pub water_color: [f32; 4],
    pub lighting: LightingModel,
    pub rig: CameraRig,
    water: Arc<HexMesh>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl RenderSettings {
    pub fn from_config(config: &Config) -> Self {
        let render = &config.render;
        Self {
            terrain_color: rgba(render.terrain_color),
            water_color: rgba(render.water_color),
            lighting: LightingModel::new(0.5, 1.0, Vec3::from_array(render.light_direction)),
            rig: CameraRig::from_config(&config.camera),
            water: Arc::new(water_plane(render.water_extent, render.water_height)),
        }
    }

    /// The shared water plane mesh.
    pub fn water_mesh(&self) -> &Arc<HexMesh> {
        &self.water
    }
}

fn rgba([r, g, b]: [f32; 3]) -> [f32; 4] {
    [r, g, b, 1.0]
}

/// One terrain chunk to draw.
#[derive(Clone, Debug)]
pub struct ChunkDraw {
    pub position: AxialPosition,
    pub model: Mat4,
    pub color: [f32; 4],
    pub mesh: Arc<Chunk>,
}

/// The water plane draw.
#[derive(Clone, Debug)]
pub struct WaterDraw {
    pub model: Mat4,
    pub color: [f32; 4],
    pub mesh: Arc<HexMesh>,
}

/// A complete, immutable description of one frame.
#[derive(Clone, Debug)]
pub struct FrameSnapshot {
    pub view: Mat4,
    pub projection: Mat4,
    pub lighting: LightingModel,
    /// Sorted by chunk coordinate.
    pub chunks: Vec<ChunkDraw>,
    pub water: WaterDraw,
}

impl FrameSnapshot {
    /// Builds the draw list for `state`.
    ///
    /// With no chunks cached yet, a single empty chunk at `(0, 0)` is drawn.
    pub fn build(state: &ViewerState, settings: &RenderSettings, aspect_ratio: f32) -> Self {
        let camera = state.camera();
        let store = state.chunks();
        let mut chunks: Vec<ChunkDraw> = store
            .coordinates()
            .into_iter()
            .filter_map(|position| store.get_at(position))
            .map(|chunk| chunk_draw(Arc::clone(chunk), settings))
            .collect();

        if chunks.is_empty() {
            tracing::trace!("no chunks cached; drawing empty placeholder");
            // The origin model matrix is the identity at any width.
            let placeholder = Arc::new(Chunk::empty(AxialPosition::ORIGIN, 1));
            chunks.push(chunk_draw(placeholder, settings));
        }

        Self {
            view: settings.rig.view_matrix(camera),
            projection: settings.rig.projection_matrix(aspect_ratio),
            lighting: settings.lighting,
            chunks,
            water: WaterDraw {
                model: Mat4::IDENTITY,
                color: settings.water_color,
                mesh: Arc::clone(settings.water_mesh()),
            },
        }
    }

    /// Uniform block for one chunk draw.
    pub fn chunk_uniforms(&self, draw: &ChunkDraw) -> SceneUniforms {
        SceneUniforms::new(draw.model, self.projection, self.view, draw.color, &self.lighting)
    }

    pub fn water_uniforms(&self) -> SceneUniforms {
        SceneUniforms::new(
            self.water.model,
            self.projection,
            self.view,
            self.water.color,
            &self.lighting,
        )
    }

    /// Terrain plus water triangles.
    pub fn triangle_count(&self) -> usize {
        let terrain: usize = self.chunks.iter().map(|d| d.mesh.mesh().triangle_count()).sum();
        terrain + self.water.mesh.triangle_count()
    }
}

fn chunk_draw(chunk: Arc<Chunk>, settings: &RenderSettings) -> ChunkDraw {
    ChunkDraw {
        position: chunk.position(),
        model: chunk_model_matrix(chunk.position(), chunk.width()),
        color: settings.terrain_color,
        mesh: chunk,
    }
}
