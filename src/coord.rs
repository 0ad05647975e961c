//! Offset hex coordinates and the direction tables used to walk between them.
use std::fmt;

use bevy::{math::IVec2, reflect::Reflect};
use smallvec::SmallVec;
use strum::{EnumIter, IntoEnumIterator};

/// Position of a cell on an odd-row offset hex grid.
///
/// Odd rows (`z`) are shifted half a cell towards +x, so the set of neighbors
/// depends on the parity of the row.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Reflect)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexCoord {
    pub x: i32,
    pub z: i32,
}

impl HexCoord {
    pub const fn new(x: i32, z: i32) -> Self {
        HexCoord { x, z }
    }

    pub fn from_ivec2(ivec2: IVec2) -> Self {
        HexCoord {
            x: ivec2.x,
            z: ivec2.y,
        }
    }

    /// Returns true if this coordinate sits on an even row.
    #[inline(always)]
    pub fn is_even_row(self) -> bool {
        self.z % 2 == 0
    }

    /// This coordinate moved by `(dx, dz)`, or `None` past the edge of the `i32` range.
    #[inline(always)]
    pub fn offset(self, (dx, dz): (i32, i32)) -> Option<HexCoord> {
        Some(HexCoord::new(self.x.checked_add(dx)?, self.z.checked_add(dz)?))
    }

    /// The coordinate one step away in `dir`.
    #[inline(always)]
    pub fn neighbor(self, dir: HexDirection) -> Option<HexCoord> {
        self.offset(dir.offset(self.is_even_row()))
    }

    /// The coordinates around this one, in [`HexDirection`] order.
    /// Fewer than six only at the edge of the `i32` range.
    pub fn neighbors(self) -> SmallVec<[HexCoord; 6]> {
        HexDirection::iter()
            .filter_map(|dir| self.neighbor(dir))
            .collect()
    }

    /// Direction of `other` if it is adjacent to this coordinate.
    pub fn direction_to(self, other: HexCoord) -> Option<HexDirection> {
        HexDirection::iter().find(|&dir| self.neighbor(dir) == Some(other))
    }

    pub fn is_adjacent(self, other: HexCoord) -> bool {
        self.direction_to(other).is_some()
    }

    /// Converts to axial `(q, r)` coordinates.
    pub fn to_axial(self) -> (i64, i64) {
        let (x, z) = (i64::from(self.x), i64::from(self.z));
        (x - (z - (z & 1)) / 2, z)
    }
}

impl From<(i32, i32)> for HexCoord {
    fn from((x, z): (i32, i32)) -> Self {
        HexCoord::new(x, z)
    }
}

impl From<IVec2> for HexCoord {
    fn from(ivec2: IVec2) -> Self {
        HexCoord::from_ivec2(ivec2)
    }
}

impl fmt::Display for HexCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.z)
    }
}

/// Search distance between two cells: `|dx| + |dz| - min(|dx|, |dz|)`.
///
/// Every step between adjacent cells changes `x` and `z` by at most one, so this
/// never overestimates the number of steps and is 1 for any adjacent pair.
/// It is used both as the A* heuristic and as the edge cost.
#[inline(always)]
pub fn distance(a: HexCoord, b: HexCoord) -> f32 {
    let dx = u64::from(a.x.abs_diff(b.x));
    let dz = u64::from(a.z.abs_diff(b.z));
    (dx + dz - dx.min(dz)) as f32
}

/// Exact number of steps between two cells on an unobstructed grid.
pub fn hex_distance(a: HexCoord, b: HexCoord) -> u64 {
    let (aq, ar) = a.to_axial();
    let (bq, br) = b.to_axial();
    let dq = aq - bq;
    let dr = ar - br;
    (dq.unsigned_abs() + dr.unsigned_abs() + (dq + dr).unsigned_abs()) / 2
}

/// The six directions of a hex cell, in the order neighbors are reported.
///
/// `z` grows towards the north.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum HexDirection {
    East = 0,
    SouthEast = 1,
    SouthWest = 2,
    West = 3,
    NorthWest = 4,
    NorthEast = 5,
}

pub use self::HexDirection::*;

pub(crate) const EVEN_ROW_OFFSETS: [(i32, i32); 6] =
    [(1, 0), (0, -1), (-1, -1), (-1, 0), (-1, 1), (0, 1)];

pub(crate) const ODD_ROW_OFFSETS: [(i32, i32); 6] =
    [(1, 0), (1, -1), (0, -1), (-1, 0), (0, 1), (1, 1)];

impl HexDirection {
    /// `(dx, dz)` for this direction from a cell on an even or odd row.
    #[inline(always)]
    pub fn offset(self, even_row: bool) -> (i32, i32) {
        if even_row {
            EVEN_ROW_OFFSETS[self as usize]
        } else {
            ODD_ROW_OFFSETS[self as usize]
        }
    }

    pub fn opposite(self) -> HexDirection {
        match self {
            East => West,
            SouthEast => NorthWest,
            SouthWest => NorthEast,
            West => East,
            NorthWest => SouthEast,
            NorthEast => SouthWest,
        }
    }
}
