// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board representation and manipulation

use serde::{Deserialize, Serialize};

use crate::{Color, Coord, BOARD_SIZE};

/// The 9x9 Go board with stones and empty positions.
///
/// Equality compares the whole position cell by cell, which is exactly
/// what the simple-ko rule needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Positions on the board, row-major
    positions: Vec<Option<Color>>,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        let cells = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);
        Self {
            positions: vec![None; cells],
        }
    }

    /// Get the stone at the specified coordinate
    pub fn get(&self, coord: Coord) -> Option<Color> {
        if !coord.is_valid() {
            return None;
        }

        self.positions[Self::coord_to_index(coord)]
    }

    /// Place a stone at the specified coordinate.
    /// Returns false if the coordinate is off the board or occupied.
    pub fn place(&mut self, coord: Coord, color: Color) -> bool {
        if !coord.is_valid() {
            return false;
        }

        let idx = Self::coord_to_index(coord);
        if self.positions[idx].is_some() {
            return false;
        }

        self.positions[idx] = Some(color);
        true
    }

    /// Remove a stone at the specified coordinate.
    /// Returns false if the coordinate is off the board or empty.
    pub fn remove(&mut self, coord: Coord) -> bool {
        if !coord.is_valid() {
            return false;
        }

        let idx = Self::coord_to_index(coord);
        if self.positions[idx].is_none() {
            return false;
        }

        self.positions[idx] = None;
        true
    }

    /// Count stones of the specified color on the board
    pub fn count_stones(&self, color: Color) -> u16 {
        self.positions
            .iter()
            .filter(|stone| **stone == Some(color))
            .count() as u16
    }

    /// Iterate over every coordinate of the board, row by row
    pub fn coords() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|y| (0..BOARD_SIZE).map(move |x| Coord::new(x, y)))
    }

    /// Convert a coordinate to a vector index
    fn coord_to_index(coord: Coord) -> usize {
        (coord.y as usize) * (BOARD_SIZE as usize) + (coord.x as usize)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
