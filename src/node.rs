//! This module defines the `SearchNode` used by the A* search.
use std::hash::{Hash, Hasher};

use crate::{coord::HexCoord, NodeId};

/// A cell as seen by one search: its costs and where it was reached from.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SearchNode {
    pub(crate) coord: HexCoord,
    /// Best known cost from the start.
    pub(crate) g_cost: f32,
    /// Estimated cost to the goal.
    pub(crate) h_cost: f32,
    /// Index of the finalized node this one was reached from.
    pub(crate) parent: Option<NodeId>,
}

impl SearchNode {
    pub(crate) fn new(coord: HexCoord) -> Self {
        SearchNode {
            coord,
            g_cost: f32::MAX,
            h_cost: 0.0,
            parent: None,
        }
    }

    pub(crate) fn start(coord: HexCoord, h_cost: f32) -> Self {
        SearchNode {
            coord,
            g_cost: 0.0,
            h_cost,
            parent: None,
        }
    }

    #[inline(always)]
    pub(crate) fn f_cost(&self) -> f32 {
        self.g_cost + self.h_cost
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Eq for SearchNode {}

impl Hash for SearchNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coord.hash(state);
    }
}
