//! This module defines the pathfinding entry point which can be called directly.
use bevy::log;

use crate::{
    astar::astar_hex, cell::Cell, error::HexPathError, map::HexMap, neighbor::Neighborhood,
    path::HexPath,
};

/// A* pathfinding between two cells of `map`.
///
/// [`HexMap::find_path`] and [`HexMap::get_path`] wrap this for the stored endpoints
/// and for plain coordinates.
///
/// # Arguments
/// * `start` - The starting cell. `None` when nothing is picked yet.
/// * `end` - The goal cell. `None` when nothing is picked yet.
/// * `map` - The [`HexMap`] the cells belong to.
///
/// # Errors
/// * [`HexPathError::InvalidEndpoints`] if either endpoint is missing.
/// * [`HexPathError::CellNotFound`] if an endpoint is not part of `map`.
/// * [`HexPathError::NoPathFound`] if the end cannot be reached.
pub fn find_path<N: Neighborhood>(
    start: Option<&Cell>,
    end: Option<&Cell>,
    map: &HexMap<N>,
) -> Result<HexPath, HexPathError> {
    let (Some(start), Some(end)) = (start, end) else {
        log::warn!("Path requested without both endpoints set");
        return Err(HexPathError::InvalidEndpoints);
    };

    for cell in [start, end] {
        if !map.contains(cell.coord()) {
            log::warn!("Endpoint {} is not part of the map", cell.coord());
            return Err(HexPathError::CellNotFound(cell.coord()));
        }
    }

    let path = timed!("hex astar", {
        astar_hex(map, start.coord(), end.coord(), map.search_capacity())
    });

    match path {
        Some(path) => {
            log::debug!(
                "Found path {} -> {} in {} steps",
                start.coord(),
                end.coord(),
                path.steps()
            );
            Ok(path)
        }
        None => {
            log::debug!("No path {} -> {}", start.coord(), end.coord());
            Err(HexPathError::NoPathFound)
        }
    }
}
