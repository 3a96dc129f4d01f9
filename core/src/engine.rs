// SPDX-License-Identifier: MIT OR Apache-2.0

//! Opponent move selection.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{board::Board, game::GameSession, rules::RuleValidator, Color, Coord, Move, BOARD_SIZE};

/// Move source for an automated player.
pub trait MovePolicy {
    /// Choose the next move for the side to move in `session`.
    fn next_move(&mut self, session: &GameSession) -> Move;
}

/// Shallow greedy heuristic, not a search.
///
/// Candidates are all legal placements that do not fill one of the mover's
/// own eyes. Each is scored by fixed positional and contact weights plus a
/// small random jitter to break ties; if nothing scores at least 1.0, the
/// bot passes.
pub struct HeuristicBot {
    rng: StdRng,
}

impl HeuristicBot {
    /// A bot with entropy-seeded jitter
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// A bot with deterministic jitter, for reproducible games and tests
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// An empty point whose on-board neighbors are all `color`: filling it
    /// would destroy one of the mover's own eyes. Off-board sides count
    /// toward the enclosure.
    fn surrounded_by_own(board: &Board, coord: Coord, color: Color) -> bool {
        coord
            .adjacent_coords()
            .into_iter()
            .all(|n| board.get(n) == Some(color))
    }

    fn evaluate(&mut self, board: &Board, coord: Coord, color: Color) -> f64 {
        let max = BOARD_SIZE - 1;
        let mut score = 0.0;

        if coord.x == 0 || coord.x == max || coord.y == 0 || coord.y == max {
            score += 2.0;
        }
        if (coord.x == 2 || coord.x == 6) && (coord.y == 2 || coord.y == 6) {
            score += 4.0;
        }

        for neighbor in coord.adjacent_coords() {
            match board.get(neighbor) {
                Some(c) if c == color.opposite() => score += 3.0,
                Some(_) => score += 1.0,
                None => {}
            }
        }

        score += self.rng.gen::<f64>() * 0.5;

        // Unreachable through choose(), whose eye filter drops these
        // points before scoring; kept for callers that score directly.
        if Self::surrounded_by_own(board, coord, color) {
            score -= 5.0;
        }

        score
    }

    fn choose(&mut self, board: &Board, ko_memory: Option<&Board>, color: Color) -> Move {
        let validator = RuleValidator::new(board, ko_memory);
        let mut best = None;
        let mut best_score = f64::NEG_INFINITY;

        for coord in Board::coords() {
            if validator.check_move(coord, color).is_err() {
                continue;
            }
            if Self::surrounded_by_own(board, coord, color) {
                continue;
            }

            let score = self.evaluate(board, coord, color);
            if score > best_score {
                best = Some(coord);
                best_score = score;
            }
        }

        match best {
            Some(coord) if best_score >= 1.0 => Move::Place(coord),
            _ => Move::Pass,
        }
    }
}

impl MovePolicy for HeuristicBot {
    fn next_move(&mut self, session: &GameSession) -> Move {
        self.choose(session.board(), session.ko_memory(), session.to_move())
    }
}

impl Default for HeuristicBot {
    fn default() -> Self {
        Self::new()
    }
}
