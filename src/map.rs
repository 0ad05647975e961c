//! This module contains the `HexMap` resource which owns every cell of the grid.
use bevy::{log, math::UVec2, prelude::Resource};
use smallvec::SmallVec;

use crate::{
    cell::Cell,
    coord::HexCoord,
    error::HexPathError,
    neighbor::{Neighborhood, OddRowNeighborhood},
    path::HexPath,
    pathfind, FxIndexMap,
};

/// Holder for internal map settings.
pub struct MapSettings(pub(crate) MapInternalSettings);

/// Builder for [`MapSettings`].
///
/// Example usage:
/// ```
/// use bevy_hexpath::prelude::*;
///
/// let settings = MapSettingsBuilder::new(16, 12)
///     .search_capacity(256)
///     .build();
///
/// let map: HexMap = HexMap::new(&settings);
/// assert_eq!(map.len(), 16 * 12);
/// ```
#[derive(Clone, Debug)]
pub struct MapSettingsBuilder {
    dimensions: UVec2,
    default_walkable: bool,
    search_capacity: usize,
}

impl Default for MapSettingsBuilder {
    fn default() -> Self {
        MapSettingsBuilder {
            dimensions: UVec2::new(10, 10),
            default_walkable: true,
            search_capacity: 64,
        }
    }
}

impl MapSettingsBuilder {
    /// Map of `width` columns (x) by `height` rows (z). Returns a [`MapSettingsBuilder`] that can be further configured.
    ///
    /// # Panics
    /// If either dimension is zero or larger than `i32::MAX`.
    pub fn new(width: u32, height: u32) -> Self {
        if width == 0 || height == 0 {
            panic!("Width and height must be at least 1");
        }
        if width > i32::MAX as u32 || height > i32::MAX as u32 {
            panic!("Width and height must fit in an i32 coordinate");
        }

        MapSettingsBuilder {
            dimensions: UVec2::new(width, height),
            ..Default::default()
        }
    }

    /// Generated cells start blocked instead of walkable.
    pub fn default_blocked(mut self) -> Self {
        self.default_walkable = false;
        self
    }

    /// Initial capacity of the search bookkeeping.
    /// Roughly the number of cells a typical search expands.
    pub fn search_capacity(mut self, capacity: usize) -> Self {
        self.search_capacity = capacity;
        self
    }

    /// Builds the [`MapSettings`] to pass to [`HexMap::new()`].
    pub fn build(self) -> MapSettings {
        MapSettings(MapInternalSettings {
            dimensions: self.dimensions,
            default_walkable: self.default_walkable,
            search_capacity: self.search_capacity,
        })
    }
}

#[derive(Clone, Debug)]
pub(crate) struct MapInternalSettings {
    pub(crate) dimensions: UVec2,
    pub(crate) default_walkable: bool,
    pub(crate) search_capacity: usize,
}

/// `HexMap` owns the cells of the grid and answers neighbor queries.
///
/// It also keeps the start and end cells picked by the player. Those are plain
/// coordinates into the map and can be cleared independently.
///
/// # Example
/// ```rust
/// use bevy_hexpath::prelude::*;
///
/// let mut map: HexMap = HexMap::default();
/// for x in 0..3 {
///     for z in 0..2 {
///         map.add_cell(Cell::new(x, z));
///     }
/// }
///
/// map.set_start(HexCoord::new(0, 0)).unwrap();
/// map.set_end(HexCoord::new(2, 1)).unwrap();
///
/// let path = map.find_path().unwrap();
/// assert_eq!(path.start(), Some(HexCoord::new(0, 0)));
/// assert_eq!(path.goal(), Some(HexCoord::new(2, 1)));
/// ```
#[derive(Resource, Debug, Clone)]
pub struct HexMap<N: Neighborhood = OddRowNeighborhood> {
    pub(crate) neighborhood: N,
    cells: FxIndexMap<HexCoord, Cell>,
    start: Option<HexCoord>,
    end: Option<HexCoord>,
    search_capacity: usize,
}

impl<N: Neighborhood> Default for HexMap<N> {
    fn default() -> Self {
        HexMap {
            neighborhood: N::default(),
            cells: FxIndexMap::default(),
            start: None,
            end: None,
            search_capacity: MapSettingsBuilder::default().search_capacity,
        }
    }
}

impl<N: Neighborhood> HexMap<N> {
    /// Creates a map with one cell for every `x` in `0..width` and `z` in `0..height`.
    pub fn new(settings: &MapSettings) -> Self {
        let MapInternalSettings {
            dimensions,
            default_walkable,
            search_capacity,
        } = settings.0;

        let mut cells = FxIndexMap::with_capacity_and_hasher(
            (dimensions.x as usize).saturating_mul(dimensions.y as usize),
            Default::default(),
        );

        for x in 0..dimensions.x as i32 {
            for z in 0..dimensions.y as i32 {
                let mut cell = Cell::new(x, z);
                cell.set_walkable(default_walkable);
                cells.insert(cell.coord, cell);
            }
        }

        log::debug!("Generated {}x{} hex map", dimensions.x, dimensions.y);

        HexMap {
            neighborhood: N::default(),
            cells,
            start: None,
            end: None,
            search_capacity,
        }
    }

    pub fn neighborhood(&self) -> &N {
        &self.neighborhood
    }

    pub(crate) fn search_capacity(&self) -> usize {
        self.search_capacity
    }

    /// Inserts `cell`, replacing any cell already stored at its coordinate.
    pub fn add_cell(&mut self, cell: Cell) {
        self.cells.insert(cell.coord, cell);
    }

    /// Returns the cell at `pos`, if there is one.
    pub fn cell(&self, pos: HexCoord) -> Option<&Cell> {
        self.cells.get(&pos)
    }

    pub fn cell_mut(&mut self, pos: HexCoord) -> Option<&mut Cell> {
        self.cells.get_mut(&pos)
    }

    pub fn contains(&self, pos: HexCoord) -> bool {
        self.cells.contains_key(&pos)
    }

    /// Iterates over every cell in insertion order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.values()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Makes every cell walkable and clears its obstacle marker.
    pub fn set_all_cells_walkable(&mut self) {
        for cell in self.cells.values_mut() {
            cell.reset();
        }
    }

    /// Flips the walkability of the cell at `pos` and returns the new value.
    pub fn toggle_walkable(&mut self, pos: HexCoord) -> Result<bool, HexPathError> {
        self.cells
            .get_mut(&pos)
            .map(Cell::toggle)
            .ok_or(HexPathError::CellNotFound(pos))
    }

    pub fn set_walkable(&mut self, pos: HexCoord, walkable: bool) -> Result<(), HexPathError> {
        let cell = self
            .cells
            .get_mut(&pos)
            .ok_or(HexPathError::CellNotFound(pos))?;
        cell.set_walkable(walkable);
        Ok(())
    }

    /// Walkable cells adjacent to `pos`, in neighborhood direction order.
    ///
    /// Positions missing from the map and blocked cells are left out.
    pub fn neighbors(&self, pos: HexCoord) -> SmallVec<[&Cell; 6]> {
        self.neighborhood
            .neighbors(pos)
            .into_iter()
            .filter_map(|neighbor| self.cells.get(&neighbor))
            .filter(|cell| cell.is_walkable())
            .collect()
    }

    /// Same as [`HexMap::neighbors`] but appends positions to a caller-owned buffer.
    pub fn neighbors_into(&self, pos: HexCoord, target: &mut Vec<HexCoord>) {
        for neighbor in self.neighborhood.neighbors(pos) {
            if self.cells.get(&neighbor).is_some_and(Cell::is_walkable) {
                target.push(neighbor);
            }
        }
    }

    pub fn start(&self) -> Option<HexCoord> {
        self.start
    }

    pub fn end(&self) -> Option<HexCoord> {
        self.end
    }

    /// Picks the start cell. Only walkable cells can be picked.
    pub fn set_start(&mut self, pos: HexCoord) -> Result<(), HexPathError> {
        self.start = Some(self.pickable(pos)?);
        Ok(())
    }

    /// Picks the end cell. Only walkable cells can be picked.
    pub fn set_end(&mut self, pos: HexCoord) -> Result<(), HexPathError> {
        self.end = Some(self.pickable(pos)?);
        Ok(())
    }

    pub fn clear_start(&mut self) {
        self.start = None;
    }

    pub fn clear_end(&mut self) {
        self.end = None;
    }

    /// True once both the start and the end cell are picked.
    pub fn endpoints_ready(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Clears both endpoints and makes every cell walkable again.
    pub fn reset(&mut self) {
        self.start = None;
        self.end = None;
        self.set_all_cells_walkable();
        log::debug!("Reset {} cells", self.cells.len());
    }

    /// Searches between the picked start and end cells.
    pub fn find_path(&self) -> Result<HexPath, HexPathError> {
        let start = self.start.and_then(|pos| self.cells.get(&pos));
        let end = self.end.and_then(|pos| self.cells.get(&pos));

        pathfind::find_path(start, end, self)
    }

    /// Searches between two coordinates of this map.
    pub fn get_path(&self, start: HexCoord, goal: HexCoord) -> Result<HexPath, HexPathError> {
        let start = self.cell(start).ok_or(HexPathError::CellNotFound(start))?;
        let goal = self.cell(goal).ok_or(HexPathError::CellNotFound(goal))?;

        pathfind::find_path(Some(start), Some(goal), self)
    }

    fn pickable(&self, pos: HexCoord) -> Result<HexCoord, HexPathError> {
        match self.cells.get(&pos) {
            Some(cell) if cell.is_walkable() => Ok(pos),
            Some(_) => Err(HexPathError::NotWalkable(pos)),
            None => Err(HexPathError::CellNotFound(pos)),
        }
    }
}
