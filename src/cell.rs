//! The `Cell` record stored in a [`crate::map::HexMap`].
use std::hash::{Hash, Hasher};

use crate::coord::HexCoord;

/// A single hex cell.
///
/// Cells are identified by their coordinate alone: two cells at the same
/// position compare and hash equal whatever their walkability.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub(crate) coord: HexCoord,
    pub(crate) walkable: bool,
    /// Mirrors the obstacle marker shown on the tile.
    pub(crate) obstacle: bool,
}

impl Cell {
    /// Creates a walkable cell without an obstacle.
    pub fn new(x: i32, z: i32) -> Self {
        Cell {
            coord: HexCoord::new(x, z),
            walkable: true,
            obstacle: false,
        }
    }

    pub fn blocked(x: i32, z: i32) -> Self {
        Cell {
            coord: HexCoord::new(x, z),
            walkable: false,
            obstacle: true,
        }
    }

    pub fn coord(&self) -> HexCoord {
        self.coord
    }

    pub fn x(&self) -> i32 {
        self.coord.x
    }

    pub fn z(&self) -> i32 {
        self.coord.z
    }

    pub fn is_walkable(&self) -> bool {
        self.walkable
    }

    pub fn has_obstacle(&self) -> bool {
        self.obstacle
    }

    /// Sets walkability. The obstacle marker is shown exactly when the cell is blocked.
    pub fn set_walkable(&mut self, walkable: bool) {
        self.walkable = walkable;
        self.obstacle = !walkable;
    }

    /// Flips walkability and the obstacle marker, returning the new walkability.
    pub fn toggle(&mut self) -> bool {
        self.walkable = !self.walkable;
        self.obstacle = !self.obstacle;
        self.walkable
    }

    /// Back to the default state: walkable, no obstacle.
    pub fn reset(&mut self) {
        self.walkable = true;
        self.obstacle = false;
    }
}

impl From<HexCoord> for Cell {
    fn from(coord: HexCoord) -> Self {
        Cell::new(coord.x, coord.z)
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coord.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_eq_ignores_walkability() {
        let cell1 = Cell::new(1, 2);
        let cell2 = Cell::blocked(1, 2);

        assert_eq!(cell1, cell2);
        assert_ne!(cell1, Cell::new(2, 1));
    }

    #[test]
    fn test_cell_hash() {
        let cell1 = Cell::new(1, 2);
        let mut cell2 = Cell::new(1, 2);
        cell2.toggle();

        let mut hasher1 = std::collections::hash_map::DefaultHasher::new();
        let mut hasher2 = std::collections::hash_map::DefaultHasher::new();

        cell1.hash(&mut hasher1);
        cell2.hash(&mut hasher2);

        assert_eq!(hasher1.finish(), hasher2.finish());
    }

    #[test]
    fn test_toggle_and_reset() {
        let mut cell = Cell::new(0, 0);
        assert!(cell.is_walkable());
        assert!(!cell.has_obstacle());

        assert!(!cell.toggle());
        assert!(cell.has_obstacle());

        assert!(cell.toggle());
        assert!(!cell.has_obstacle());

        cell.set_walkable(false);
        cell.reset();
        assert!(cell.is_walkable());
        assert!(!cell.has_obstacle());
    }
}
