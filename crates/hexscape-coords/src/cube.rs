//! Cube hex coordinates with the `x + y + z == 0` invariant.

use std::ops::{Add, Sub};

use crate::HexDirection;

/// A hex cell in cube space.
///
/// Fields are private so the zero-sum invariant cannot be broken from outside
/// the crate; construct through [`CubeCoordinate::new`] or
/// [`CubeCoordinate::from_xz`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CubeCoordinate {
    x: i32,
    y: i32,
    z: i32,
}

impl CubeCoordinate {
    pub const ORIGIN: Self = Self { x: 0, y: 0, z: 0 };

    /// Returns `None` unless `x + y + z == 0`.
    pub fn new(x: i32, y: i32, z: i32) -> Option<Self> {
        (x + y + z == 0).then_some(Self { x, y, z })
    }

    /// Builds a coordinate from two axes; `y` is derived.
    pub const fn from_xz(x: i32, z: i32) -> Self {
        Self { x, y: -x - z, z }
    }

    pub const fn x(self) -> i32 {
        self.x
    }

    pub const fn y(self) -> i32 {
        self.y
    }

    pub const fn z(self) -> i32 {
        self.z
    }

    /// The adjacent cell in `direction`.
    pub fn neighbor(self, direction: HexDirection) -> Self {
        self + direction.offset()
    }

    pub fn east(self) -> Self {
        self.neighbor(HexDirection::East)
    }

    pub fn north_east(self) -> Self {
        self.neighbor(HexDirection::NorthEast)
    }

    pub fn south_east(self) -> Self {
        self.neighbor(HexDirection::SouthEast)
    }

    pub fn south_west(self) -> Self {
        self.neighbor(HexDirection::SouthWest)
    }

    pub fn west(self) -> Self {
        self.neighbor(HexDirection::West)
    }

    pub fn north_west(self) -> Self {
        self.neighbor(HexDirection::NorthWest)
    }

    /// Hex (Manhattan-on-cube) distance between two cells.
    pub fn distance(self, other: Self) -> i32 {
        let d = self - other;
        (d.x.abs() + d.y.abs() + d.z.abs()) / 2
    }
}

impl Add for CubeCoordinate {
    type Output = Self;

    // Sum of two zero-sum triples is zero-sum.
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for CubeCoordinate {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_zero_sum(c: CubeCoordinate) -> bool {
        c.x() + c.y() + c.z() == 0
    }

    #[test]
    fn test_new_rejects_non_zero_sum() {
        assert!(CubeCoordinate::new(1, 1, 1).is_none());
        assert!(CubeCoordinate::new(1, -2, 1).is_some());
    }

    #[test]
    fn test_from_xz_derives_y() {
        let c = CubeCoordinate::from_xz(3, -7);
        assert_eq!(c.y(), 4);
        assert!(is_zero_sum(c));
    }

    #[test]
    fn test_named_neighbors_preserve_zero_sum() {
        for x in -6..=6 {
            for z in -6..=6 {
                let c = CubeCoordinate::from_xz(x, z);
                let all = [
                    c.east(),
                    c.north_east(),
                    c.south_east(),
                    c.south_west(),
                    c.west(),
                    c.north_west(),
                ];
                for n in all {
                    assert!(is_zero_sum(n), "{n:?} from {c:?}");
                    assert_eq!(c.distance(n), 1);
                }
            }
        }
    }

    #[test]
    fn test_named_neighbors_match_offsets() {
        let o = CubeCoordinate::ORIGIN;
        assert_eq!(o.east(), CubeCoordinate::from_xz(1, 0));
        assert_eq!(o.north_east(), CubeCoordinate::from_xz(1, -1));
        assert_eq!(o.south_east(), CubeCoordinate::from_xz(0, 1));
        assert_eq!(o.south_west(), CubeCoordinate::from_xz(-1, 1));
        assert_eq!(o.west(), CubeCoordinate::from_xz(-1, 0));
        assert_eq!(o.north_west(), CubeCoordinate::from_xz(0, -1));
    }

    #[test]
    fn test_distance() {
        let a = CubeCoordinate::from_xz(0, 0);
        let b = CubeCoordinate::from_xz(3, -1);
        assert_eq!(a.distance(b), 3);
        assert_eq!(b.distance(a), 3);
        assert_eq!(a.distance(a), 0);
    }
}
