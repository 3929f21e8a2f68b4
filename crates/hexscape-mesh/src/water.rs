//! Flat sea-level reference plane.

use glam::Vec3;

use crate::hex_mesh::{HexMesh, Triangle};

/// Two triangles spanning `[-extent, extent]` on X and Z at `height`.
///
/// Wound like the terrain fans, so the normal is `-Y`.
pub fn water_plane(extent: f32, height: f32) -> HexMesh {
    let a = Vec3::new(-extent, height, -extent);
    let b = Vec3::new(extent, height, -extent);
    let c = Vec3::new(-extent, height, extent);
    let d = Vec3::new(extent, height, extent);

    let mut mesh = HexMesh::with_capacity(2);
    mesh.push(Triangle::flat(a, b, c));
    mesh.push(Triangle::flat(b, d, c));
    mesh
}
