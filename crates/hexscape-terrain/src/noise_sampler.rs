//! Seeded 2D coherent noise with an optional multi-octave layer.
//!
//! The permutation table is built once from the world seed and shared
//! read-only by every sampler. Sampling is a pure function of the table, the
//! parameters and the coordinate.

use std::sync::Arc;

use noise::{NoiseFn, Perlin, Seedable};

/// The seeded gradient permutation table backing all terrain noise.
///
/// Wraps the `noise` crate's Perlin generator, which owns the shuffled
/// permutation table. Two tables built from the same seed are equal and
/// produce identical samples.
#[derive(Clone, Copy, Debug)]
pub struct NoisePermutationTable {
    perlin: Perlin,
}

impl NoisePermutationTable {
    pub fn new(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
        }
    }

    /// The seed this table was derived from.
    pub fn seed(&self) -> u32 {
        self.perlin.seed()
    }

    /// Raw gradient noise at a point, approximately in `[-1, 1]`.
    #[inline]
    pub fn get(&self, x: f64, y: f64) -> f64 {
        self.perlin.get([x, y])
    }
}

impl PartialEq for NoisePermutationTable {
    fn eq(&self, other: &Self) -> bool {
        self.seed() == other.seed()
    }
}

impl Eq for NoisePermutationTable {}

/// Shape of the height noise.
#[derive(Clone, Debug, PartialEq)]
pub struct NoiseParams {
    /// Number of octaves. `0` and `1` both mean a single octave.
    pub octaves: u32,
    /// Amplitude multiplier between successive octaves.
    pub persistence: f64,
    /// Frequency of the first octave, in cycles per world cell.
    pub base_scale: f64,
    /// Multiplier turning normalized noise into world-unit height.
    pub amplitude: f64,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            octaves: 4,
            persistence: 0.5,
            base_scale: 0.05,
            amplitude: 4.0,
        }
    }
}

/// Samples terrain height from a shared permutation table.
#[derive(Clone, Debug)]
pub struct NoiseSampler {
    table: Arc<NoisePermutationTable>,
    params: NoiseParams,
}

impl NoiseSampler {
    pub fn new(table: Arc<NoisePermutationTable>, params: NoiseParams) -> Self {
        Self { table, params }
    }

    /// Single-octave noise at a world cell coordinate, approximately in `[-1, 1]`.
    pub fn sample_2d(&self, x: f64, y: f64) -> f64 {
        let scale = self.params.base_scale;
        self.table.get(x * scale, y * scale)
    }

    /// Multi-octave noise normalized by the total amplitude.
    ///
    /// Each octave doubles the frequency and multiplies the amplitude by
    /// `persistence`. The result stays approximately in `[-1, 1]`.
    pub fn sample_octaves(&self, x: f64, y: f64) -> f64 {
        let octaves = self.params.octaves.max(1);
        let mut total = 0.0;
        let mut norm = 0.0;
        let mut frequency = self.params.base_scale;
        let mut amplitude = 1.0;

        for _ in 0..octaves {
            total += self.table.get(x * frequency, y * frequency) * amplitude;
            norm += amplitude;
            frequency *= 2.0;
            amplitude *= self.params.persistence;
        }

        if norm > 0.0 { total / norm } else { 0.0 }
    }

    /// Terrain height in world units at a world cell coordinate.
    pub fn height(&self, x: f64, y: f64) -> f32 {
        let n = if self.params.octaves > 1 {
            self.sample_octaves(x, y)
        } else {
            self.sample_2d(x, y)
        };
        (n * self.params.amplitude) as f32
    }
}
