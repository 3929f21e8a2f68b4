//! Triangle-soup mesh data produced by terrain triangulation.
//!
//! Vertices are not shared between triangles: every triangle carries its own
//! flat normal, so the buffer is uploaded as-is without an index buffer.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// A single mesh vertex, 24 bytes.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct MeshVertex {
    /// Position in chunk-local space.
    pub position: [f32; 3],
    /// Unit face normal of the owning triangle.
    pub normal: [f32; 3],
}

static_assertions::assert_eq_size!(MeshVertex, [u8; 24]);

impl MeshVertex {
    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn normal(&self) -> Vec3 {
        Vec3::from_array(self.normal)
    }
}

/// Three vertices sharing one face normal.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct Triangle(pub [MeshVertex; 3]);

static_assertions::assert_eq_size!(Triangle, [MeshVertex; 3]);

impl Triangle {
    /// Builds a triangle whose normal is `normalize((b - a) × (c - a))`.
    pub fn flat(a: Vec3, b: Vec3, c: Vec3) -> Self {
        let normal = face_normal(a, b, c).to_array();
        Self([a, b, c].map(|p| MeshVertex {
            position: p.to_array(),
            normal,
        }))
    }

    pub fn positions(&self) -> [Vec3; 3] {
        self.0.map(|v| v.position())
    }

    pub fn normal(&self) -> Vec3 {
        self.0[0].normal()
    }
}

/// Unit normal of the triangle `(a, b, c)`; zero for degenerate input.
pub fn face_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    (b - a).cross(c - a).normalize_or_zero()
}

/// The triangle list for one chunk (or the water plane).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HexMesh {
    /// Triangles in emission order: six per cell, cells row by row.
    pub triangles: Vec<Triangle>,
}

impl HexMesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(triangles: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(triangles),
        }
    }

    pub fn push(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn vertex_count(&self) -> usize {
        self.triangles.len() * 3
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Raw bytes ready for a vertex buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.triangles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_mesh() {
        let mesh = HexMesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert!(mesh.as_bytes().is_empty());
    }

    #[test]
    fn test_flat_triangle_normal() {
        let t = Triangle::flat(Vec3::ZERO, Vec3::X, Vec3::Y);
        assert!((t.normal() - Vec3::Z).length() < 1e-6);
        for v in t.0 {
            assert_eq!(v.normal, [0.0, 0.0, 1.0]);
        }
    }

    #[test]
    fn test_degenerate_triangle_has_zero_normal() {
        let t = Triangle::flat(Vec3::ZERO, Vec3::X, Vec3::X * 2.0);
        assert_eq!(t.normal(), Vec3::ZERO);
    }

    #[test]
    fn test_bytes_are_vertex_buffer() {
        let mut mesh = HexMesh::new();
        mesh.push(Triangle::flat(Vec3::ZERO, Vec3::X, Vec3::Z));
        mesh.push(Triangle::flat(Vec3::ZERO, Vec3::Z, Vec3::X));
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.as_bytes().len(), 6 * 24);
        let vertices: &[MeshVertex] = bytemuck::cast_slice(mesh.as_bytes());
        assert_eq!(vertices[4].position, [0.0, 0.0, 1.0]);
    }
}
