// SPDX-License-Identifier: MIT OR Apache-2.0

//! Group connectivity and liberty analysis.
//!
//! Groups are maximal 4-connected sets of same-colored stones; they are
//! derived on demand and never stored. All traversals use an explicit
//! stack frontier.

use std::collections::HashSet;

use crate::{board::Board, Color, Coord};

/// True if the group of `color` containing `coord` has at least one
/// liberty. Returns as soon as any empty neighbor of any group member is
/// found; false once the frontier is exhausted without one.
pub fn has_liberty(board: &Board, coord: Coord, color: Color) -> bool {
    let mut stack = vec![coord];
    let mut visited = HashSet::new();

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }

        for neighbor in current.adjacent_coords() {
            match board.get(neighbor) {
                None => return true,
                Some(c) if c == color && !visited.contains(&neighbor) => {
                    stack.push(neighbor);
                }
                _ => {}
            }
        }
    }

    false
}

/// Every member of the connected group of `color` containing `coord`.
/// Used to remove captured groups whole.
pub fn collect_group(board: &Board, coord: Coord, color: Color) -> Vec<Coord> {
    let mut group = Vec::new();
    let mut visited = HashSet::new();
    let mut stack = vec![coord];

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        group.push(current);

        for neighbor in current.adjacent_coords() {
            if board.get(neighbor) == Some(color) && !visited.contains(&neighbor) {
                stack.push(neighbor);
            }
        }
    }

    group
}

/// Number of distinct liberties of the group at `coord`. Group members are
/// added to `scanned` so a whole-board scan visits each group only once.
pub fn count_liberties(
    board: &Board,
    coord: Coord,
    color: Color,
    scanned: &mut HashSet<Coord>,
) -> usize {
    let mut liberties = HashSet::new();
    let mut visited = HashSet::new();
    let mut stack = vec![coord];

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        scanned.insert(current);

        for neighbor in current.adjacent_coords() {
            match board.get(neighbor) {
                None => {
                    liberties.insert(neighbor);
                }
                Some(c) if c == color && !visited.contains(&neighbor) => {
                    stack.push(neighbor);
                }
                _ => {}
            }
        }
    }

    liberties.len()
}
