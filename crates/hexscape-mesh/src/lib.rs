//! Hex terrain meshing: per-cell triangle fans, flat-shaded normals, and the sea-level plane.

pub mod hex_mesh;
pub mod layout;
pub mod triangulate;
pub mod water;

pub use hex_mesh::{HexMesh, MeshVertex, Triangle};
pub use layout::{
    CELL_ROW_SPACING, CELL_WIDTH, cell_center, chunk_model_matrix, chunk_origin, chunk_span,
};
pub use triangulate::{RIM_NEIGHBORS, RIM_OFFSETS, TRIANGLES_PER_CELL, triangulate};
pub use water::water_plane;
