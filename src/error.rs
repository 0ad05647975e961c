use thiserror::Error;

use crate::coord::HexCoord;

/// Errors returned by map operations and path searches.
///
/// [`HexPathError::NoPathFound`] is an expected outcome of a search, not a fault.
/// Its message is the text shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HexPathError {
    /// No cell is registered at the coordinate.
    #[error("no cell at {0}")]
    CellNotFound(HexCoord),
    /// The start or end cell is missing.
    #[error("start and end cells must both be set")]
    InvalidEndpoints,
    /// The search exhausted every reachable cell without reaching the end.
    #[error("No path found")]
    NoPathFound,
    /// The cell is blocked and cannot be used as an endpoint.
    #[error("cell {0} is not walkable")]
    NotWalkable(HexCoord),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(HexPathError::NoPathFound.to_string(), "No path found");
        assert_eq!(
            HexPathError::CellNotFound(HexCoord::new(4, 2)).to_string(),
            "no cell at (4,2)"
        );
        assert_eq!(
            HexPathError::NotWalkable(HexCoord::new(0, 1)).to_string(),
            "cell (0,1) is not walkable"
        );
    }
}
