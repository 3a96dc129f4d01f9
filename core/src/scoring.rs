// SPDX-License-Identifier: MIT OR Apache-2.0

//! Area scoring: stones on the board plus exclusively-bordered territory.

use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::{board::Board, Color, Coord};

/// Final area score with per-cell territory attribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalScore {
    /// Black stones plus Black territory
    pub black: u16,
    /// White stones plus White territory
    pub white: u16,
    /// Every empty cell attributed as territory, with its owner, so the
    /// collaborator can mark it
    pub territory: Vec<(Coord, Color)>,
}

impl FinalScore {
    /// The strictly higher total wins; equal totals are a draw (`None`).
    pub fn winner(&self) -> Option<Color> {
        match self.black.cmp(&self.white) {
            std::cmp::Ordering::Greater => Some(Color::Black),
            std::cmp::Ordering::Less => Some(Color::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Score a finished game.
///
/// Every stone counts one point for its color. Every maximal connected
/// region of empty cells counts one point per cell for the single color
/// bordering it; regions bordering both colors or neither are neutral and
/// score nothing.
pub fn score_board(board: &Board) -> FinalScore {
    let mut black = board.count_stones(Color::Black);
    let mut white = board.count_stones(Color::White);
    let mut territory = Vec::new();
    let mut seen = HashSet::new();

    for coord in Board::coords() {
        if board.get(coord).is_some() || seen.contains(&coord) {
            continue;
        }

        let (region, borders) = region_and_borders(board, coord, &mut seen);
        if borders.len() == 1 {
            let owner = *borders.iter().next().unwrap();
            match owner {
                Color::Black => black += region.len() as u16,
                Color::White => white += region.len() as u16,
            }
            territory.extend(region.into_iter().map(|c| (c, owner)));
        }
    }

    FinalScore {
        black,
        white,
        territory,
    }
}

/// BFS over empty points; returns (region coords, bordering stone colors)
fn region_and_borders(
    board: &Board,
    start: Coord,
    global_seen: &mut HashSet<Coord>,
) -> (Vec<Coord>, HashSet<Color>) {
    let mut queue = VecDeque::from([start]);
    let mut region = vec![start];
    let mut borders = HashSet::new();
    global_seen.insert(start);

    while let Some(coord) = queue.pop_front() {
        for neighbor in coord.adjacent_coords() {
            match board.get(neighbor) {
                Some(color) => {
                    borders.insert(color);
                }
                None => {
                    if global_seen.insert(neighbor) {
                        region.push(neighbor);
                        queue.push_back(neighbor);
                    }
                }
            }
        }
    }

    (region, borders)
}
