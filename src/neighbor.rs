use std::fmt::Debug;

use smallvec::SmallVec;

use crate::coord::{distance, HexCoord, EVEN_ROW_OFFSETS, ODD_ROW_OFFSETS};

/// Adjacency and cost rules for a hex layout.
pub trait Neighborhood: Clone + Debug + Default + Sync + Send {
    /// The `(dx, dz)` offsets of the cells around `pos`, in the order they are reported.
    fn directions(&self, pos: HexCoord) -> [(i32, i32); 6];

    /// Estimated cost from `pos` to `target`. Must never overestimate.
    fn heuristic(&self, pos: HexCoord, target: HexCoord) -> f32;

    /// Cost of stepping from `from` to the adjacent cell `to`.
    fn cost(&self, from: HexCoord, to: HexCoord) -> f32 {
        self.heuristic(from, to)
    }

    /// Every candidate position around `pos`, without any map filtering.
    /// Offsets that would leave the `i32` range are skipped.
    #[inline(always)]
    fn neighbors(&self, pos: HexCoord) -> SmallVec<[HexCoord; 6]> {
        self.directions(pos)
            .into_iter()
            .filter_map(|offset| pos.offset(offset))
            .collect()
    }
}

/// Odd-row offset layout: odd rows are pushed half a cell towards +x.
#[derive(Clone, Copy, Debug, Default)]
pub struct OddRowNeighborhood;

impl Neighborhood for OddRowNeighborhood {
    #[inline(always)]
    fn directions(&self, pos: HexCoord) -> [(i32, i32); 6] {
        if pos.is_even_row() {
            EVEN_ROW_OFFSETS
        } else {
            ODD_ROW_OFFSETS
        }
    }

    #[inline(always)]
    fn heuristic(&self, pos: HexCoord, target: HexCoord) -> f32 {
        distance(pos, target)
    }
}
