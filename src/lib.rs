//! A* pathfinding on odd-row offset hexagonal grids, with a Bevy plugin on top.
use std::hash::BuildHasherDefault;

use indexmap::IndexMap;
use rustc_hash::FxHasher;

#[macro_use]
mod macros;

mod astar;
pub mod cell;
pub mod coord;
pub mod error;
pub mod map;
pub mod neighbor;
mod node;
pub mod path;
pub mod pathfind;
pub mod plugin;
pub mod queue;

pub mod prelude {
    pub use crate::cell::Cell;
    pub use crate::coord::{distance, hex_distance, HexCoord, HexDirection};
    pub use crate::error::HexPathError;
    pub use crate::map::{HexMap, MapSettings, MapSettingsBuilder};
    pub use crate::neighbor::*;
    pub use crate::path::HexPath;
    pub use crate::pathfind::find_path;
    pub use crate::plugin::{HexPathPlugin, PathFailed, PathRequest, PathingSet};
    pub use crate::queue::PriorityQueue;
}

pub type NodeId = usize;

type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;
