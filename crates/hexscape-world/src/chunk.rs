//! A single terrain chunk and the generator that builds it.

use hexscape_coords::AxialPosition;
use hexscape_mesh::{HexMesh, triangulate};
use hexscape_terrain::{HeightField, NoiseSampler};

/// Cells per chunk side.
pub const DEFAULT_CHUNK_WIDTH: u32 = 32;

/// A generated chunk. Its mesh is a pure function of the position, the chunk
/// width and the noise table, and never changes after generation.
#[derive(Clone, Debug, PartialEq)]
pub struct Chunk {
    position: AxialPosition,
    width: u32,
    mesh: HexMesh,
}

impl Chunk {
    pub fn new(position: AxialPosition, width: u32, mesh: HexMesh) -> Self {
        Self {
            position,
            width,
            mesh,
        }
    }

    /// An empty mesh at `position`, used as a stand-in before any chunk exists.
    pub fn empty(position: AxialPosition, width: u32) -> Self {
        Self::new(position, width, HexMesh::new())
    }

    /// Chunk coordinate in the world chunk grid.
    pub fn position(&self) -> AxialPosition {
        self.position
    }

    /// Cells per side the mesh was built with; fixes the chunk's world span.
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn mesh(&self) -> &HexMesh {
        &self.mesh
    }
}

/// Builds chunks from a shared noise sampler.
#[derive(Clone, Debug)]
pub struct ChunkGenerator {
    sampler: NoiseSampler,
    width: u32,
}

impl ChunkGenerator {
    pub fn new(sampler: NoiseSampler, width: u32) -> Self {
        Self { sampler, width }
    }

    /// Samples the height field and triangulates it.
    pub fn generate(&self, position: AxialPosition) -> Chunk {
        let field = HeightField::build(&self.sampler, position, self.width);
        let mesh = triangulate(&field);
        tracing::debug!(
            chunk = %position,
            triangles = mesh.triangle_count(),
            "generated chunk"
        );
        Chunk::new(position, self.width, mesh)
    }

    /// Cells per chunk side. The camera's focus and every model matrix use it.
    pub fn width(&self) -> u32 {
        self.width
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use hexscape_terrain::{NoiseParams, NoisePermutationTable};

    use super::*;

    fn generator(width: u32) -> ChunkGenerator {
        let table = Arc::new(NoisePermutationTable::new(1));
        ChunkGenerator::new(NoiseSampler::new(table, NoiseParams::default()), width)
    }

    #[test]
    fn test_generate_is_reproducible() {
        let g = generator(4);
        let a = g.generate(AxialPosition::new(2, 3));
        let b = g.generate(AxialPosition::new(2, 3));
        assert_eq!(a, b);
        assert_eq!(a.position(), AxialPosition::new(2, 3));
        assert_eq!(a.width(), 4);
        assert_eq!(a.mesh().triangle_count(), 4 * 4 * 6);
    }

    #[test]
    fn test_different_chunks_differ() {
        let g = generator(4);
        assert_ne!(
            g.generate(AxialPosition::new(0, 0)).mesh(),
            g.generate(AxialPosition::new(1, 0)).mesh()
        );
    }

    #[test]
    fn test_empty_chunk() {
        let c = Chunk::empty(AxialPosition::ORIGIN, 4);
        assert!(c.mesh().is_empty());
        assert_eq!(c.width(), 4);
    }
}
