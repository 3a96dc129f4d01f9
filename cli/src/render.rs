// SPDX-License-Identifier: MIT OR Apache-2.0

//! ASCII board rendering for the CLI.

use nineboard_core::{Board, Color, Coord, BOARD_SIZE};

/// Render the board as ASCII art with coordinate labels.
///
/// The last move gets a leading `>` marker; attributed territory cells are
/// drawn as `x` (Black) and `o` (White).
pub fn render_board(
    board: &Board,
    last_move: Option<Coord>,
    territory: &[(Coord, Color)],
) -> String {
    let mut output = String::new();

    output.push_str("   ");
    for col in 0..BOARD_SIZE {
        output.push(' ');
        output.push(column_char(col));
    }
    output.push('\n');

    for row in 0..BOARD_SIZE {
        output.push_str(&format!("{:2} ", row + 1));

        for col in 0..BOARD_SIZE {
            let coord = Coord::new(col, row);
            let marker = if last_move == Some(coord) { '>' } else { ' ' };
            let symbol = match board.get(coord) {
                Some(Color::Black) => '●',
                Some(Color::White) => '○',
                None => match territory.iter().find(|(c, _)| *c == coord) {
                    Some((_, Color::Black)) => 'x',
                    Some((_, Color::White)) => 'o',
                    None if is_star_point(coord) => '+',
                    None => '.',
                },
            };
            output.push(marker);
            output.push(symbol);
        }

        output.push_str(&format!(" {}\n", row + 1));
    }

    output.push_str("   ");
    for col in 0..BOARD_SIZE {
        output.push(' ');
        output.push(column_char(col));
    }
    output.push('\n');

    output
}

/// Convert a column index to its label (A-H then J; 'I' is skipped)
pub fn column_char(col: u8) -> char {
    if col < 8 {
        (b'A' + col) as char
    } else {
        (b'A' + col + 1) as char
    }
}

/// Star points of the 9x9 board
fn is_star_point(coord: Coord) -> bool {
    matches!(
        (coord.x, coord.y),
        (2, 2) | (2, 6) | (4, 4) | (6, 2) | (6, 6)
    )
}
