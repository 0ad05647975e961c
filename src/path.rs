//! This module defines the `HexPath` component.
use std::fmt;

use bevy::prelude::Component;
use bevy::reflect::Reflect;

use crate::coord::HexCoord;

/// The result of a successful search.
///
/// Positions run from the start cell to the end cell, both included.
/// If using [`crate::plugin::HexPathPlugin`] this is inserted as a component on the
/// requesting entity.
#[derive(Debug, Clone, Component, Reflect)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexPath {
    pub(crate) path: Vec<HexCoord>,
    cost: f32,
}

impl HexPath {
    /// Create a new path from a vector of positions and its total movement cost.
    pub fn new(path: Vec<HexCoord>, cost: f32) -> Self {
        HexPath { path, cost }
    }

    /// Returns true if the path contains the given position
    pub fn is_position_in_path(&self, pos: HexCoord) -> bool {
        self.path.contains(&pos)
    }

    /// Returns the positions of the path.
    ///
    /// ```rust
    /// use bevy_hexpath::prelude::*;
    ///
    /// let path = HexPath::new(vec![HexCoord::new(0, 0), HexCoord::new(1, 0)], 1.0);
    /// assert_eq!(path.path(), &[HexCoord::new(0, 0), HexCoord::new(1, 0)]);
    /// ```
    pub fn path(&self) -> &[HexCoord] {
        &self.path
    }

    /// Returns the movement cost of the path
    pub fn cost(&self) -> f32 {
        self.cost
    }

    /// Number of steps taken, one less than the number of positions.
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Returns the length of the path
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Returns true if the path is empty
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn start(&self) -> Option<HexCoord> {
        self.path.first().copied()
    }

    pub fn goal(&self) -> Option<HexCoord> {
        self.path.last().copied()
    }
}

impl PartialEq for HexPath {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

/// Space separated `(x,z)` pairs, the form shown in the path readout.
impl fmt::Display for HexPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pos) in self.path.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{pos}")?;
        }
        Ok(())
    }
}

impl IntoIterator for HexPath {
    type Item = HexCoord;
    type IntoIter = std::vec::IntoIter<HexCoord>;

    fn into_iter(self) -> Self::IntoIter {
        self.path.into_iter()
    }
}
