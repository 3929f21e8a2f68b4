//! Procedural terrain heights: seeded coherent noise and per-chunk height fields.

mod height_field;
mod noise_sampler;

pub use height_field::{HALO_FALLBACK_HEIGHT, HeightField};
pub use noise_sampler::{NoiseParams, NoisePermutationTable, NoiseSampler};
