//! The infinite chunk grid: lazily generated chunk meshes, the panning camera
//! offset, and immutable viewer state snapshots.

mod camera;
mod chunk;
mod chunk_store;
mod viewer;

pub use camera::{CameraController, DEFAULT_PAN_STEP, PanDirection};
pub use chunk::{Chunk, ChunkGenerator, DEFAULT_CHUNK_WIDTH};
pub use chunk_store::ChunkStore;
pub use viewer::{ViewerCommand, ViewerState};
