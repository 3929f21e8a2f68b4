//! Immutable viewer state snapshots.
//!
//! Every input event produces a new [`ViewerState`]; the previous snapshot is
//! never mutated, so a renderer holding it keeps a consistent view. Chunk
//! generation triggered by an event completes before the new snapshot is
//! returned.

use hexscape_coords::AxialPosition;

use crate::camera::{CameraController, PanDirection};
use crate::chunk::ChunkGenerator;
use crate::chunk_store::ChunkStore;

/// A decoded input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewerCommand {
    /// Move the camera offset one step.
    Pan(PanDirection),
    /// Re-resolve the neighborhood around the current focus chunk.
    AddChunk,
    /// Unrecognized input; produces an identical snapshot.
    Ignore,
}

/// Everything the renderer reads for one frame.
#[derive(Clone, Debug)]
pub struct ViewerState {
    camera: CameraController,
    chunks: ChunkStore,
    focus: AxialPosition,
}

impl ViewerState {
    /// A state with no chunks generated yet.
    pub fn empty(generator: &ChunkGenerator, camera: CameraController) -> Self {
        Self {
            focus: camera.focus_chunk(generator.width()),
            camera,
            chunks: ChunkStore::new(),
        }
    }

    /// Starting state with the neighborhood of the camera's focus resolved.
    pub fn initial(generator: &ChunkGenerator, camera: CameraController) -> Self {
        Self::empty(generator, camera).apply(ViewerCommand::AddChunk, generator)
    }

    /// Applies one command and returns the resulting snapshot.
    #[must_use]
    pub fn apply(&self, command: ViewerCommand, generator: &ChunkGenerator) -> Self {
        let mut next = self.clone();
        match command {
            ViewerCommand::Pan(direction) => {
                next.camera = self.camera.pan(direction);
                next.focus = next.camera.focus_chunk(generator.width());
                if next.focus != self.focus {
                    tracing::debug!(from = %self.focus, to = %next.focus, "focus chunk changed");
                }
                next.chunks.resolve(generator, next.focus);
            }
            ViewerCommand::AddChunk => {
                next.chunks.resolve(generator, next.focus);
            }
            ViewerCommand::Ignore => {}
        }
        next
    }

    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    pub fn chunks(&self) -> &ChunkStore {
        &self.chunks
    }

    /// Chunk coordinate the camera currently focuses on.
    pub fn focus(&self) -> AxialPosition {
        self.focus
    }
}
