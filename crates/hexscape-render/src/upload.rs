//! Tracks which chunk meshes a GPU backend already holds.
//!
//! Generation and upload are separate stages: the viewer state gains chunks
//! as soon as they are generated, and a backend uploads them when it next
//! builds a frame.

use hexscape_coords::AxialPosition;
use rustc_hash::FxHashSet;

use crate::frame::{ChunkDraw, FrameSnapshot};

#[derive(Debug, Default, Clone)]
pub struct UploadTracker {
    uploaded: FxHashSet<AxialPosition>,
}

impl UploadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws in `frame` whose meshes have not been uploaded yet.
    ///
    /// Empty meshes are never pending, so the placeholder drawn before any
    /// chunk exists does not claim the `(0, 0)` slot.
    pub fn pending<'a>(&self, frame: &'a FrameSnapshot) -> Vec<&'a ChunkDraw> {
        frame
            .chunks
            .iter()
            .filter(|draw| !draw.mesh.mesh().is_empty())
            .filter(|draw| !self.uploaded.contains(&draw.position))
            .collect()
    }

    /// Returns `true` the first time `position` is marked.
    pub fn mark_uploaded(&mut self, position: AxialPosition) -> bool {
        self.uploaded.insert(position)
    }

    pub fn is_uploaded(&self, position: AxialPosition) -> bool {
        self.uploaded.contains(&position)
    }

    pub fn len(&self) -> usize {
        self.uploaded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.uploaded.is_empty()
    }
}
