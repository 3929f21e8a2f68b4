//! Height field to hex-fan triangulation.
//!
//! Every visible cell becomes a fan of six triangles around its raised
//! center. A rim corner is shared by exactly three cells, and its height is
//! the mean of those three cell heights, so neighboring fans (including fans
//! in adjacent chunks, via the height field halo) meet without seams.

use glam::Vec3;
use hexscape_coords::{AxialPosition, HexDirection};
use hexscape_terrain::HeightField;

use crate::hex_mesh::{HexMesh, Triangle};
use crate::layout::cell_center;

/// Triangles emitted for one cell.
pub const TRIANGLES_PER_CELL: usize = 6;

/// Horizontal `(x, z)` offsets of the six rim corners from the cell center.
pub const RIM_OFFSETS: [(f32, f32); 6] = [
    (-1.0, -0.5),
    (-1.0, 0.5),
    (0.0, 1.0),
    (1.0, 0.5),
    (1.0, -0.5),
    (0.0, -1.0),
];

/// The two neighbors that share each rim corner, in [`RIM_OFFSETS`] order.
pub const RIM_NEIGHBORS: [(HexDirection, HexDirection); 6] = [
    (HexDirection::West, HexDirection::NorthWest),
    (HexDirection::West, HexDirection::SouthWest),
    (HexDirection::SouthWest, HexDirection::SouthEast),
    (HexDirection::SouthEast, HexDirection::East),
    (HexDirection::East, HexDirection::NorthEast),
    (HexDirection::NorthEast, HexDirection::NorthWest),
];

/// Builds the chunk mesh for every visible cell of `field`.
///
/// Triangle `i` of a cell is `(rim[i], center, rim[i + 1])`, wrapping at six.
/// Normals follow that winding, which puts them at `-Y` on level ground.
pub fn triangulate(field: &HeightField) -> HexMesh {
    let width = field.width() as i32;
    let origin = field.origin_cell();
    let mut mesh = HexMesh::with_capacity((width * width) as usize * TRIANGLES_PER_CELL);

    for y in 0..width {
        for x in 0..width {
            let world = origin.offset(x, y);
            push_cell(&mut mesh, field, x, y, world);
        }
    }

    mesh
}

fn push_cell(mesh: &mut HexMesh, field: &HeightField, x: i32, y: i32, world: AxialPosition) {
    let height = field.at_world(world);
    let center = cell_center(x, y, world.is_odd_row(), height);

    let rim: [Vec3; 6] = std::array::from_fn(|i| {
        let (a, b) = RIM_NEIGHBORS[i];
        let h_a = field.at_world(world.neighbor(a));
        let h_b = field.at_world(world.neighbor(b));
        let (dx, dz) = RIM_OFFSETS[i];
        Vec3::new(center.x + dx, (height + h_a + h_b) / 3.0, center.z + dz)
    });

    for i in 0..TRIANGLES_PER_CELL {
        let next = (i + 1) % TRIANGLES_PER_CELL;
        mesh.push(Triangle::flat(rim[i], center, rim[next]));
    }
}
