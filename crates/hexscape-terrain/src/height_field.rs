//! Per-chunk height grid with a one-cell halo.
//!
//! A chunk of width `W` owns cells `0..W` on both axes. Triangulating the
//! boundary cells needs the heights of their true world neighbors, so the
//! field also samples one extra ring of cells: local indices run over
//! `-1..=W`, giving `(W + 2)²` samples.

use hexscape_coords::AxialPosition;

use crate::NoiseSampler;

/// Height returned for lookups outside the sampled grid (sea level).
pub const HALO_FALLBACK_HEIGHT: f32 = 0.0;

/// Immutable grid of terrain heights for one chunk plus its halo.
#[derive(Clone, Debug, PartialEq)]
pub struct HeightField {
    chunk: AxialPosition,
    width: i32,
    /// Row-major, `(width + 2)²` entries; index `0` is local cell `(-1, -1)`.
    heights: Vec<f32>,
}

impl HeightField {
    /// Samples the field for the chunk at chunk coordinate `chunk`.
    ///
    /// Local cell `(i, j)` maps to world cell `(chunk.x * W + i, chunk.y * W + j)`.
    pub fn build(sampler: &NoiseSampler, chunk: AxialPosition, width: u32) -> Self {
        let width = width as i32;
        let stride = (width + 2) as usize;
        let origin = chunk_origin_cell(chunk, width);
        let mut heights = Vec::with_capacity(stride * stride);

        for j in -1..=width {
            for i in -1..=width {
                let wx = (origin.x + i) as f64;
                let wy = (origin.y + j) as f64;
                heights.push(sampler.height(wx, wy));
            }
        }

        tracing::trace!(%chunk, samples = heights.len(), "sampled height field");
        Self {
            chunk,
            width,
            heights,
        }
    }

    /// Chunk coordinate this field belongs to.
    pub fn chunk(&self) -> AxialPosition {
        self.chunk
    }

    /// Number of visible cells along each axis (halo excluded).
    pub fn width(&self) -> u32 {
        self.width as u32
    }

    /// World cell of local cell `(0, 0)`.
    pub fn origin_cell(&self) -> AxialPosition {
        chunk_origin_cell(self.chunk, self.width)
    }

    /// Returns `true` if local `(i, j)` was sampled, halo included.
    pub fn is_inside(&self, i: i32, j: i32) -> bool {
        (-1..=self.width).contains(&i) && (-1..=self.width).contains(&j)
    }

    /// Height at local cell `(i, j)`, or [`HALO_FALLBACK_HEIGHT`] outside the halo.
    pub fn get(&self, i: i32, j: i32) -> f32 {
        if !self.is_inside(i, j) {
            return HALO_FALLBACK_HEIGHT;
        }
        let stride = self.width + 2;
        self.heights[((j + 1) * stride + (i + 1)) as usize]
    }

    /// Height at an absolute world cell.
    pub fn at_world(&self, world: AxialPosition) -> f32 {
        let origin = self.origin_cell();
        self.get(world.x - origin.x, world.y - origin.y)
    }
}

fn chunk_origin_cell(chunk: AxialPosition, width: i32) -> AxialPosition {
    AxialPosition::new(chunk.x * width, chunk.y * width)
}
