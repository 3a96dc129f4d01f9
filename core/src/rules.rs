// SPDX-License-Identifier: MIT OR Apache-2.0

//! Move legality: occupied points, suicide, and the simple ko rule.

use crate::{board::Board, groups, Color, Coord, GameError};

/// Validates candidate placements against a board and the remembered
/// previous position.
///
/// Only the single position immediately before the opponent's last move is
/// remembered, so only one-ply ko is detected; longer repetition cycles
/// are allowed.
pub struct RuleValidator<'a> {
    /// The board being checked
    board: &'a Board,
    /// Board state before the last move, for ko rule checking
    ko_memory: Option<&'a Board>,
}

impl<'a> RuleValidator<'a> {
    /// Create a new rules validator
    pub fn new(board: &'a Board, ko_memory: Option<&'a Board>) -> Self {
        Self { board, ko_memory }
    }

    /// Check whether `color` may play at `coord`.
    ///
    /// Works on a scratch copy of the board; the real board is never
    /// mutated. Captures are resolved before the self-liberty check, so a
    /// placement that captures surrounding stones is never flagged as
    /// suicide even if it would have no liberties absent the capture.
    pub fn check_move(&self, coord: Coord, color: Color) -> Result<(), GameError> {
        if !coord.is_valid() {
            return Err(GameError::InvalidCoordinate);
        }

        if self.board.get(coord).is_some() {
            return Err(GameError::OccupiedPosition);
        }

        let mut scratch = self.board.clone();
        scratch.place(coord, color);

        let opponent = color.opposite();
        let mut captured = false;

        for neighbor in coord.adjacent_coords() {
            if scratch.get(neighbor) == Some(opponent)
                && !groups::has_liberty(&scratch, neighbor, opponent)
            {
                captured = true;
                for stone in groups::collect_group(&scratch, neighbor, opponent) {
                    scratch.remove(stone);
                }
            }
        }

        if !captured && !groups::has_liberty(&scratch, coord, color) {
            return Err(GameError::SuicideNoLiberties);
        }

        if let Some(previous) = self.ko_memory {
            if scratch == *previous {
                tracing::debug!(x = coord.x, y = coord.y, "ko violation detected");
                return Err(GameError::KoViolation);
            }
        }

        Ok(())
    }
}
