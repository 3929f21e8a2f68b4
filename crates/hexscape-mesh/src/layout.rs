//! World-space layout of hex cells and chunks.
//!
//! Cells are two units wide; rows are 1.5 units apart and odd rows are
//! shifted one unit east. A chunk of width `W` spans `W * 2` units along X and
//! `W * 1.5` units along Z.

use glam::{Mat4, Vec3};
use hexscape_coords::AxialPosition;

/// Horizontal distance between cell centers in the same row.
pub const CELL_WIDTH: f32 = 2.0;

/// Distance between adjacent rows.
pub const CELL_ROW_SPACING: f32 = 1.5;

/// Chunk-local center of cell `(x, y)` at the given height.
///
/// `odd_row` must reflect the parity of the cell's world row so that odd-row
/// offsets stay consistent across chunk boundaries.
pub fn cell_center(x: i32, y: i32, odd_row: bool, height: f32) -> Vec3 {
    let shift = if odd_row { 1.0 } else { 0.0 };
    Vec3::new(x as f32 * CELL_WIDTH + shift, height, y as f32 * CELL_ROW_SPACING)
}

/// World-space extent of one chunk along X and Z.
pub fn chunk_span(width: u32) -> (f32, f32) {
    let w = width as f32;
    (w * CELL_WIDTH, w * CELL_ROW_SPACING)
}

/// World-space translation of a chunk's local origin.
pub fn chunk_origin(chunk: AxialPosition, width: u32) -> Vec3 {
    let (span_x, span_z) = chunk_span(width);
    Vec3::new(chunk.x as f32 * span_x, 0.0, chunk.y as f32 * span_z)
}

/// Model matrix placing a chunk mesh in the world.
pub fn chunk_model_matrix(chunk: AxialPosition, width: u32) -> Mat4 {
    Mat4::from_translation(chunk_origin(chunk, width))
}
