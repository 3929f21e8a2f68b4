//! Hex grid coordinate spaces: odd-r axial positions, cube coordinates, and neighbor lookup.
//!
//! Every cell and every chunk of the terrain is addressed by an [`AxialPosition`]
//! in "odd-r" offset layout: odd rows are shifted half a cell to the east.
//! Neighbor arithmetic happens in [`CubeCoordinate`] space, where each of the
//! six directions is a constant additive offset, and the result is converted
//! back to axial form.
//!
//! # Integer division
//!
//! The odd-row adjustment needs `floor(y / 2)`. Rust's `/` truncates toward
//! zero, which is wrong for negative rows (`-1 / 2 == 0`, but the floor is
//! `-1`). All conversions in this crate use [`i32::div_euclid`] with the
//! positive divisor `2`, which is identical to floor division.
//!
//! ```rust
//! use hexscape_coords::{AxialPosition, HexDirection, neighbor_axial};
//!
//! let origin = AxialPosition::new(0, 0);
//! assert_eq!(neighbor_axial(origin, HexDirection::NorthWest), AxialPosition::new(-1, -1));
//! ```

mod cube;
mod direction;

pub use cube::CubeCoordinate;
pub use direction::HexDirection;

use glam::IVec2;

/// A cell (or chunk) address in the odd-r offset hex layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AxialPosition {
    /// Column.
    pub x: i32,
    /// Row. Odd rows sit half a cell further east.
    pub y: i32,
}

impl AxialPosition {
    /// The origin cell.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns `true` if this position lies on an odd (east-shifted) row.
    ///
    /// Uses Euclidean remainder so that row `-1` is odd.
    pub fn is_odd_row(self) -> bool {
        self.y.rem_euclid(2) == 1
    }

    /// Converts to cube coordinates.
    pub fn to_cube(self) -> CubeCoordinate {
        axial_to_cube(self)
    }

    /// The adjacent cell in the given direction.
    pub fn neighbor(self, direction: HexDirection) -> Self {
        neighbor_axial(self, direction)
    }

    /// All six neighbors, in [`HexDirection::ALL`] order.
    pub fn neighbors(self) -> [Self; 6] {
        HexDirection::ALL.map(|dir| neighbor_axial(self, dir))
    }

    /// Component-wise offset, used to move between chunk-local and world cells.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<IVec2> for AxialPosition {
    fn from(v: IVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<AxialPosition> for IVec2 {
    fn from(p: AxialPosition) -> Self {
        IVec2::new(p.x, p.y)
    }
}

impl std::fmt::Display for AxialPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Converts an odd-r axial position into cube coordinates.
///
/// `x = pos.x - floor(pos.y / 2)`, `z = pos.y`, `y = -x - z`.
pub fn axial_to_cube(pos: AxialPosition) -> CubeCoordinate {
    let x = pos.x - pos.y.div_euclid(2);
    let z = pos.y;
    CubeCoordinate::from_xz(x, z)
}

/// Converts cube coordinates back into an odd-r axial position.
///
/// Inverse of [`axial_to_cube`] for every integer input.
pub fn cube_to_axial(cube: CubeCoordinate) -> AxialPosition {
    AxialPosition::new(cube.x() + cube.z().div_euclid(2), cube.z())
}

/// The cell adjacent to `pos` in `direction`.
pub fn neighbor_axial(pos: AxialPosition, direction: HexDirection) -> AxialPosition {
    cube_to_axial(axial_to_cube(pos).neighbor(direction))
}
