// SPDX-License-Identifier: MIT OR Apache-2.0

//! Game session state: move execution, capture resolution, pass and undo.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    board::Board,
    groups,
    rules::RuleValidator,
    scoring::{self, FinalScore},
    Color, Coord, GameError,
};

/// One entry in the append-only play log.
///
/// Entries carry full board snapshots, so undo is a pop plus a restore.
/// They are immutable once appended; the log is truncated only from the
/// end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum HistoryEntry {
    /// A stone placement
    Move {
        /// Where the stone was placed
        coord: Coord,
        /// Who placed it
        color: Color,
        /// Deduplicated number of stones the move removed
        captured: u16,
        /// Board after the move took effect
        board: Board,
        /// Snapshot the ko rule compares against while this entry is the
        /// latest: the board as it stood just before this stone was placed
        ko_memory: Option<Board>,
    },
    /// A pass
    Pass {
        /// Who passed
        color: Color,
        /// Consecutive-pass count including this pass
        passes: u8,
        /// Board snapshot, unchanged by the pass
        board: Board,
        /// Ko memory carried over unchanged
        ko_memory: Option<Board>,
    },
}

impl HistoryEntry {
    fn color(&self) -> Color {
        match self {
            HistoryEntry::Move { color, .. } | HistoryEntry::Pass { color, .. } => *color,
        }
    }

    fn passes(&self) -> u8 {
        match self {
            HistoryEntry::Move { .. } => 0,
            HistoryEntry::Pass { passes, .. } => *passes,
        }
    }

    fn board(&self) -> &Board {
        match self {
            HistoryEntry::Move { board, .. } | HistoryEntry::Pass { board, .. } => board,
        }
    }

    fn ko_memory(&self) -> Option<&Board> {
        match self {
            HistoryEntry::Move { ko_memory, .. } | HistoryEntry::Pass { ko_memory, .. } => {
                ko_memory.as_ref()
            }
        }
    }
}

/// Result of a successful stone placement, for rendering and animation.
/// The core exposes the captured set; it performs no animation itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Where the stone was placed
    pub coord: Coord,
    /// Who placed it
    pub color: Color,
    /// Deduplicated positions removed by this move
    pub captured: Vec<Coord>,
}

/// Result of a pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassOutcome {
    /// Who passed
    pub color: Color,
    /// Consecutive-pass count including this pass
    pub consecutive_passes: u8,
    /// Present exactly when this pass ended the game
    pub score: Option<FinalScore>,
}

/// Turn report for the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReport {
    /// Whose turn it is
    pub to_move: Color,
    /// Some group of the side to move has exactly one liberty
    pub in_atari: bool,
    /// Consecutive passes leading up to this turn
    pub consecutive_passes: u8,
}

/// A single game of nine-by-nine Go.
///
/// The session owns the board and history exclusively and every operation
/// is synchronous. Operations arriving after the game has ended are silent
/// no-ops, never errors; the front-end is expected to disable input.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    to_move: Color,
    consecutive_passes: u8,
    history: Vec<HistoryEntry>,
    ko_memory: Option<Board>,
    last_move: Option<Coord>,
    /// Stones captured so far by (Black, White)
    captures: (u16, u16),
    game_over: bool,
    opponent_enabled: bool,
}

impl GameSession {
    /// Start a fresh game: empty board, Black to move, opponent enabled.
    pub fn new() -> Self {
        Self::from_position(Board::new(), Color::Black)
    }

    /// Resume from an arbitrary position with no history and no ko memory.
    pub fn from_position(board: Board, to_move: Color) -> Self {
        Self {
            board,
            to_move,
            consecutive_passes: 0,
            history: Vec::new(),
            ko_memory: None,
            last_move: None,
            captures: (0, 0),
            game_over: false,
            opponent_enabled: true,
        }
    }

    /// The current board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whose turn it is
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    /// Whether the game has ended
    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// The most recent placement, for marking
    pub fn last_move(&self) -> Option<Coord> {
        self.last_move
    }

    /// Consecutive passes so far
    pub fn consecutive_passes(&self) -> u8 {
        self.consecutive_passes
    }

    /// Stones captured so far by (Black, White)
    pub fn captures(&self) -> (u16, u16) {
        self.captures
    }

    /// The position the ko rule currently forbids recreating
    pub fn ko_memory(&self) -> Option<&Board> {
        self.ko_memory.as_ref()
    }

    /// Number of entries in the play log
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Whether the automated opponent answers moves
    pub fn opponent_enabled(&self) -> bool {
        self.opponent_enabled
    }

    /// Enable or disable the automated opponent
    pub fn set_opponent(&mut self, enabled: bool) {
        self.opponent_enabled = enabled;
    }

    /// Check a placement for the side to move without applying it.
    pub fn check_move(&self, coord: Coord) -> Result<(), GameError> {
        RuleValidator::new(&self.board, self.ko_memory.as_ref()).check_move(coord, self.to_move)
    }

    /// Place a stone for the side to move.
    ///
    /// Returns `Ok(None)` when the game is already over. An illegal
    /// placement returns its [`GameError`] and leaves the session
    /// untouched. On success the board is mutated, captures are resolved,
    /// the move is logged and the turn flips.
    pub fn place_stone(&mut self, coord: Coord) -> Result<Option<MoveOutcome>, GameError> {
        if self.game_over {
            return Ok(None);
        }
        self.check_move(coord)?;

        let color = self.to_move;
        let opponent = color.opposite();
        let previous = self.board.clone();

        self.board.place(coord, color);
        self.consecutive_passes = 0;

        // Collect dying neighbor groups before removing anything; two
        // directions can reach the same group, so dedupe by position.
        let mut captured = Vec::new();
        let mut seen = HashSet::new();
        for neighbor in coord.adjacent_coords() {
            if self.board.get(neighbor) == Some(opponent)
                && !groups::has_liberty(&self.board, neighbor, opponent)
            {
                for stone in groups::collect_group(&self.board, neighbor, opponent) {
                    if seen.insert(stone) {
                        captured.push(stone);
                    }
                }
            }
        }
        for &stone in &captured {
            self.board.remove(stone);
        }

        if !captured.is_empty() {
            tracing::debug!(count = captured.len(), "stones captured");
        }
        match color {
            Color::Black => self.captures.0 += captured.len() as u16,
            Color::White => self.captures.1 += captured.len() as u16,
        }

        self.ko_memory = Some(previous);
        self.last_move = Some(coord);
        self.history.push(HistoryEntry::Move {
            coord,
            color,
            captured: captured.len() as u16,
            board: self.board.clone(),
            ko_memory: self.ko_memory.clone(),
        });
        self.to_move = opponent;

        Ok(Some(MoveOutcome {
            coord,
            color,
            captured,
        }))
    }

    /// Pass the turn for the side to move.
    ///
    /// Returns `None` when the game is already over. The second
    /// consecutive pass ends the game and runs the scoring resolver
    /// exactly once; its result rides on the outcome.
    pub fn pass(&mut self) -> Option<PassOutcome> {
        if self.game_over {
            return None;
        }

        let color = self.to_move;
        self.consecutive_passes += 1;
        self.history.push(HistoryEntry::Pass {
            color,
            passes: self.consecutive_passes,
            board: self.board.clone(),
            ko_memory: self.ko_memory.clone(),
        });

        let score = if self.consecutive_passes >= 2 {
            self.game_over = true;
            let score = scoring::score_board(&self.board);
            tracing::info!(
                black = score.black,
                white = score.white,
                "game ended after two consecutive passes"
            );
            Some(score)
        } else {
            self.to_move = color.opposite();
            None
        };

        Some(PassOutcome {
            color,
            consecutive_passes: self.consecutive_passes,
            score,
        })
    }

    /// Roll back the last ply, or the last two when the automated opponent
    /// is enabled and it is Black's turn, so undo steps over the
    /// opponent's reply. A finished game is reopened. Returns false when
    /// the log is empty and there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        if self.history.is_empty() {
            return false;
        }

        let steps = if self.opponent_enabled && self.history.len() >= 2 && self.to_move == Color::Black
        {
            2
        } else {
            1
        };
        for _ in 0..steps {
            if self.history.pop().is_none() {
                break;
            }
        }

        match self.history.last() {
            None => {
                self.board = Board::new();
                self.to_move = Color::Black;
                self.consecutive_passes = 0;
                self.ko_memory = None;
                self.last_move = None;
            }
            Some(entry) => {
                self.board = entry.board().clone();
                self.to_move = entry.color().opposite();
                self.consecutive_passes = entry.passes();
                self.ko_memory = entry.ko_memory().cloned();
                self.last_move = match entry {
                    HistoryEntry::Move { coord, .. } => Some(*coord),
                    HistoryEntry::Pass { .. } => None,
                };
            }
        }

        self.captures = self.recount_captures();
        self.game_over = false;
        true
    }

    /// Status of the side to move: atari is any of its groups down to a
    /// single liberty, found by scanning each group once.
    pub fn status(&self) -> StatusReport {
        let mut scanned = HashSet::new();
        let mut in_atari = false;

        for coord in Board::coords() {
            if self.board.get(coord) == Some(self.to_move) && !scanned.contains(&coord) {
                let liberties = groups::count_liberties(&self.board, coord, self.to_move, &mut scanned);
                if liberties == 1 {
                    in_atari = true;
                }
            }
        }

        StatusReport {
            to_move: self.to_move,
            in_atari,
            consecutive_passes: self.consecutive_passes,
        }
    }

    fn recount_captures(&self) -> (u16, u16) {
        let mut totals = (0, 0);
        for entry in &self.history {
            if let HistoryEntry::Move {
                color, captured, ..
            } = entry
            {
                match color {
                    Color::Black => totals.0 += captured,
                    Color::White => totals.1 += captured,
                }
            }
        }
        totals
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
