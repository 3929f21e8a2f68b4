//! The six hex directions and their cube-space offsets.

use crate::CubeCoordinate;

/// One of the six directions to an adjacent hex cell.
///
/// North is towards decreasing rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HexDirection {
    East,
    NorthEast,
    SouthEast,
    SouthWest,
    West,
    NorthWest,
}

impl HexDirection {
    /// All directions, in declaration order.
    pub const ALL: [HexDirection; 6] = [
        HexDirection::East,
        HexDirection::NorthEast,
        HexDirection::SouthEast,
        HexDirection::SouthWest,
        HexDirection::West,
        HexDirection::NorthWest,
    ];

    /// Unit offset in cube space. Each offset is itself zero-sum.
    pub const fn offset(self) -> CubeCoordinate {
        match self {
            HexDirection::East => CubeCoordinate::from_xz(1, 0),
            HexDirection::NorthEast => CubeCoordinate::from_xz(1, -1),
            HexDirection::SouthEast => CubeCoordinate::from_xz(0, 1),
            HexDirection::SouthWest => CubeCoordinate::from_xz(-1, 1),
            HexDirection::West => CubeCoordinate::from_xz(-1, 0),
            HexDirection::NorthWest => CubeCoordinate::from_xz(0, -1),
        }
    }

    /// The direction pointing back.
    pub const fn opposite(self) -> Self {
        match self {
            HexDirection::East => HexDirection::West,
            HexDirection::NorthEast => HexDirection::SouthWest,
            HexDirection::SouthEast => HexDirection::NorthWest,
            HexDirection::SouthWest => HexDirection::NorthEast,
            HexDirection::West => HexDirection::East,
            HexDirection::NorthWest => HexDirection::SouthEast,
        }
    }
}
