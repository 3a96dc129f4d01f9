// SPDX-License-Identifier: MIT OR Apache-2.0

//! Nineboard Core - 9x9 Go Rules and Board Logic
//!
//! This crate provides the core game functionality including:
//! - Go board representation and manipulation
//! - Group connectivity and liberty analysis
//! - Move legality (occupied point, suicide, simple ko)
//! - Capture resolution, play history and undo
//! - A heuristic opponent and area scoring

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod board;
pub mod engine;
pub mod game;
pub mod groups;
pub mod rules;
pub mod scoring;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Board side length. The engine plays nine-by-nine Go only; the board
/// dimensions never change over the lifetime of a game.
pub const BOARD_SIZE: u8 = 9;

/// Player color in a Go game (Black or White)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    /// Black player (traditionally goes first)
    Black,
    /// White player
    White,
}

impl Color {
    /// Returns the opposite color
    pub fn opposite(&self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

/// Board coordinate: `x` is the column, `y` the row, both 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// X coordinate (column)
    pub x: u8,
    /// Y coordinate (row)
    pub y: u8,
}

impl Coord {
    /// Create a new coordinate
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Check if the coordinate lies on the board
    pub fn is_valid(&self) -> bool {
        self.x < BOARD_SIZE && self.y < BOARD_SIZE
    }

    /// On-board neighbors in the four cardinal directions. Off-board
    /// neighbors do not exist: no wraparound, no liberty contribution.
    pub fn adjacent_coords(&self) -> Vec<Coord> {
        let mut neighbors = Vec::with_capacity(4);

        if self.y > 0 {
            neighbors.push(Coord::new(self.x, self.y - 1));
        }
        if self.y < BOARD_SIZE - 1 {
            neighbors.push(Coord::new(self.x, self.y + 1));
        }
        if self.x > 0 {
            neighbors.push(Coord::new(self.x - 1, self.y));
        }
        if self.x < BOARD_SIZE - 1 {
            neighbors.push(Coord::new(self.x + 1, self.y));
        }

        neighbors
    }
}

/// Represents a move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Move {
    /// Place a stone at the specified coordinate
    Place(Coord),
    /// Pass the turn
    Pass,
}

/// Errors that can occur during game play.
///
/// All of these are recovered locally: a rejected action leaves the
/// session in its prior valid state.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The coordinate is outside the board
    #[error("coordinate is off the board")]
    InvalidCoordinate,

    /// The position is already occupied
    #[error("the point is already occupied")]
    OccupiedPosition,

    /// The stone's group would have no liberties after captures resolve
    #[error("suicide: the stone would have no liberties")]
    SuicideNoLiberties,

    /// The move would recreate the position before the opponent's last move
    #[error("ko: the move would repeat the previous position")]
    KoViolation,
}

/// Cumulative win counters kept by a storage collaborator.
///
/// The core reports each decisive result once at game end; the counters
/// are read back for display only and have no gameplay effect.
pub trait WinTally {
    /// Record a finished game; `None` means a draw and counts for nobody.
    fn record(&mut self, winner: Option<Color>);

    /// Total games won by Black.
    fn black_wins(&self) -> u64;

    /// Total games won by White.
    fn white_wins(&self) -> u64;
}

pub use board::Board;
pub use engine::{HeuristicBot, MovePolicy};
pub use game::{GameSession, MoveOutcome, PassOutcome, StatusReport};
pub use scoring::FinalScore;
