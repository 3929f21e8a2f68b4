//! A running viewer: generator, current snapshot and upload bookkeeping.

use std::sync::Arc;

use hexscape_config::Config;
use hexscape_input::{KeyBindings, RawKeyEvent};
use hexscape_render::{FrameSnapshot, RenderSettings, UploadTracker};
use hexscape_terrain::{NoiseParams, NoisePermutationTable, NoiseSampler};
use hexscape_world::{CameraController, ChunkGenerator, ViewerCommand, ViewerState};

/// Counts reported for one rendered frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStats {
    pub chunks: usize,
    pub triangles: usize,
    /// Chunk meshes handed to the backend this frame.
    pub uploaded: usize,
    /// Vertex buffer bytes of those meshes.
    pub uploaded_bytes: usize,
}

pub struct Session {
    generator: ChunkGenerator,
    state: ViewerState,
    settings: RenderSettings,
    bindings: KeyBindings,
    uploads: UploadTracker,
    aspect_ratio: f32,
}

impl Session {
    /// Builds the generator from `config` and resolves the starting chunks.
    pub fn new(config: &Config) -> Self {
        let terrain = &config.terrain;
        let table = Arc::new(NoisePermutationTable::new(terrain.seed));
        let params = NoiseParams {
            octaves: terrain.octaves,
            persistence: terrain.persistence,
            base_scale: terrain.base_scale,
            amplitude: terrain.amplitude,
        };
        let generator = ChunkGenerator::new(NoiseSampler::new(table, params), terrain.chunk_width);
        let camera = CameraController::new(config.camera.pan_step);
        let state = ViewerState::initial(&generator, camera);

        tracing::info!(
            seed = terrain.seed,
            chunk_width = terrain.chunk_width,
            chunks = state.chunks().len(),
            "session started"
        );

        Self {
            generator,
            state,
            settings: RenderSettings::from_config(config),
            bindings: KeyBindings::with_overrides(&config.input.keybindings),
            uploads: UploadTracker::new(),
            aspect_ratio: config.render.aspect_ratio,
        }
    }

    /// Replaces the current snapshot with the result of `command`.
    pub fn apply(&mut self, command: ViewerCommand) {
        if command == ViewerCommand::Ignore {
            return;
        }
        self.state = self.state.apply(command, &self.generator);
    }

    /// Decodes a keyboard event and applies it.
    pub fn handle_key(&mut self, event: RawKeyEvent) -> ViewerCommand {
        let command = self.bindings.command_for(event);
        self.apply(command);
        command
    }

    /// Builds this frame's draw list and uploads any new chunk meshes.
    pub fn render(&mut self) -> (FrameSnapshot, FrameStats) {
        let frame = FrameSnapshot::build(&self.state, &self.settings, self.aspect_ratio);
        let pending: Vec<_> = self
            .uploads
            .pending(&frame)
            .iter()
            .map(|d| (d.position, d.mesh.mesh().as_bytes().len()))
            .collect();
        let mut uploaded_bytes = 0;
        for (position, bytes) in &pending {
            self.uploads.mark_uploaded(*position);
            uploaded_bytes += bytes;
        }
        if !pending.is_empty() {
            tracing::debug!(count = pending.len(), bytes = uploaded_bytes, "uploaded chunk meshes");
        }

        let stats = FrameStats {
            chunks: frame.chunks.len(),
            triangles: frame.triangle_count(),
            uploaded: pending.len(),
            uploaded_bytes,
        };
        (frame, stats)
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use hexscape_coords::AxialPosition;
    use hexscape_world::PanDirection;
    use winit::keyboard::KeyCode;

    use super::*;

    fn config() -> Config {
        let mut config = Config::default();
        config.terrain.chunk_width = 4;
        config
    }

    #[test]
    fn test_new_session_has_origin_neighborhood() {
        let session = Session::new(&config());
        assert_eq!(session.state().chunks().len(), 9);
        assert_eq!(session.state().focus(), AxialPosition::ORIGIN);
    }

    #[test]
    fn test_render_uploads_once() {
        let mut session = Session::new(&config());
        let (_, first) = session.render();
        assert_eq!(first.chunks, 9);
        assert_eq!(first.uploaded, 9);
        assert_eq!(first.triangles, 9 * 16 * 6 + 2);
        // 24-byte vertices, three per triangle.
        assert_eq!(first.uploaded_bytes, 9 * 16 * 6 * 3 * 24);
        let (_, second) = session.render();
        assert_eq!(second.uploaded, 0);
        assert_eq!(second.uploaded_bytes, 0);
    }

    #[test]
    fn test_keys_drive_the_camera() {
        let mut session = Session::new(&config());
        let command = session.handle_key(RawKeyEvent::pressed(KeyCode::ArrowRight));
        assert_eq!(command, ViewerCommand::Pan(PanDirection::Right));
        assert_eq!(session.state().camera().offset().x, 10.0);
        assert_eq!(session.state().chunks().len(), 12);

        let (_, stats) = session.render();
        assert_eq!(stats.chunks, 12);
    }

    #[test]
    fn test_ignored_key_keeps_snapshot() {
        let mut session = Session::new(&config());
        let before = session.state().chunks().coordinates();
        assert_eq!(
            session.handle_key(RawKeyEvent::pressed(KeyCode::KeyQ)),
            ViewerCommand::Ignore
        );
        assert_eq!(session.state().chunks().coordinates(), before);
    }

    #[test]
    fn test_keybinding_overrides_from_config() {
        let mut config = config();
        config.input.keybindings =
            HashMap::from([("pan_left".to_string(), "KeyJ".to_string())]);
        let mut session = Session::new(&config);
        assert_eq!(
            session.handle_key(RawKeyEvent::pressed(KeyCode::KeyJ)),
            ViewerCommand::Pan(PanDirection::Left)
        );
        assert_eq!(
            session.handle_key(RawKeyEvent::pressed(KeyCode::ArrowLeft)),
            ViewerCommand::Ignore
        );
    }
}
