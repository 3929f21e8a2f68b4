//! Sparse map of generated chunks keyed by chunk coordinate.
//!
//! The store never replaces or evicts a chunk: the first chunk inserted at a
//! coordinate is the one kept for the process lifetime. Chunks are held behind
//! [`Arc`] so cloning the store for a new state snapshot only copies pointers.

use std::collections::hash_map::Entry;
use std::sync::Arc;

use hexscape_coords::AxialPosition;
use rustc_hash::FxHashMap;

use crate::chunk::{Chunk, ChunkGenerator};

/// Offsets of the 3×3 neighborhood resolved around a focus chunk.
const NEIGHBORHOOD: [(i32, i32); 9] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (0, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Owns every generated chunk.
#[derive(Clone, Debug, Default)]
pub struct ChunkStore {
    chunks: FxHashMap<AxialPosition, Arc<Chunk>>,
}

impl ChunkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `chunk` unless its coordinate is already occupied.
    ///
    /// Returns `true` if the chunk was stored, `false` if it was discarded.
    pub fn insert(&mut self, chunk: Chunk) -> bool {
        self.insert_shared(Arc::new(chunk))
    }

    /// Like [`insert`](Self::insert) for an already shared chunk.
    pub fn insert_shared(&mut self, chunk: Arc<Chunk>) -> bool {
        match self.chunks.entry(chunk.position()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(chunk);
                true
            }
        }
    }

    /// Ensures the 3×3 neighborhood around `center` exists.
    ///
    /// Only missing coordinates are generated; existing chunks are untouched.
    /// Returns the coordinates generated by this call.
    pub fn resolve(
        &mut self,
        generator: &ChunkGenerator,
        center: AxialPosition,
    ) -> Vec<AxialPosition> {
        let mut generated = Vec::new();

        for (dx, dy) in NEIGHBORHOOD {
            let position = center.offset(dx, dy);
            if let Entry::Vacant(slot) = self.chunks.entry(position) {
                slot.insert(Arc::new(generator.generate(position)));
                generated.push(position);
            }
        }

        if !generated.is_empty() {
            tracing::info!(
                center = %center,
                generated = generated.len(),
                total = self.chunks.len(),
                "resolved chunk neighborhood"
            );
        }
        generated
    }

    /// Looks up a chunk. Never generates.
    pub fn get(&self, x: i32, y: i32) -> Option<&Arc<Chunk>> {
        self.chunks.get(&AxialPosition::new(x, y))
    }

    pub fn get_at(&self, position: AxialPosition) -> Option<&Arc<Chunk>> {
        self.chunks.get(&position)
    }

    pub fn contains(&self, position: AxialPosition) -> bool {
        self.chunks.contains_key(&position)
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Iterates over all chunks in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Chunk>> {
        self.chunks.values()
    }

    /// All stored coordinates, sorted by `(x, y)`.
    pub fn coordinates(&self) -> Vec<AxialPosition> {
        let mut coords: Vec<_> = self.chunks.keys().copied().collect();
        coords.sort_unstable();
        coords
    }
}
